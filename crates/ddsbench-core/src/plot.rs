//! Plot Rendering
//!
//! Renders the captured waveform and its dB spectrum to PNG files.
//! Non-finite values (the `-inf` bins of an empty spectrum) are legal
//! input: the line is broken into finite segments so the plot shows a
//! gap instead of failing. Render failures themselves are fatal and
//! surfaced immediately.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::spectrum::Spectrum;

/// Rendered image size in pixels.
const PLOT_SIZE: (u32, u32) = (1024, 640);

/// Axis range used when a trace has no finite values at all.
const FALLBACK_RANGE: (f64, f64) = (-1.0, 1.0);

/// Errors raised while rendering a plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to render {path}: {reason}")]
    Render { path: PathBuf, reason: String },
}

fn render_err(path: &Path, err: impl std::fmt::Display) -> PlotError {
    PlotError::Render {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Spectrum image path for a given oscillator step, e.g.
/// `sin_step4000.png`. The name is deterministic in the step so runs
/// with different configurations never overwrite each other.
pub fn spectrum_plot_path<P: AsRef<Path>>(dir: P, step: u32) -> PathBuf {
    dir.as_ref().join(format!("sin_step{step}.png"))
}

/// Render the time-domain trace as a line plot.
pub fn plot_waveform<P: AsRef<Path>>(samples: &[f64], path: P) -> Result<(), PlotError> {
    let path = path.as_ref();
    let points = samples
        .iter()
        .copied()
        .enumerate()
        .map(|(i, v)| (i as f64, v));
    let (y_lo, y_hi) = finite_bounds(samples.iter().copied());
    let x_hi = samples.len().max(1) as f64;

    draw_line_plot(
        path,
        "NCO output",
        "sample",
        "amplitude",
        0.0..x_hi,
        y_lo..y_hi,
        points,
    )?;
    info!(path = %path.display(), n = samples.len(), "waveform rendered");
    Ok(())
}

/// Render the frequency-domain trace in dB, captioned with the
/// oscillator step that produced it.
pub fn plot_spectrum<P: AsRef<Path>>(
    spectrum: &Spectrum,
    step: u32,
    path: P,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    let points = spectrum
        .freqs
        .iter()
        .zip(&spectrum.amp_db)
        .map(|(&f, &db)| (f as f64, db));
    let (y_lo, y_hi) = finite_bounds(spectrum.amp_db.iter().copied());
    let x_lo = spectrum.freqs.first().copied().unwrap_or(0) as f64;
    let x_hi = spectrum.freqs.last().copied().unwrap_or(1) as f64;

    draw_line_plot(
        path,
        &format!("Step = {step}"),
        "frequency bin",
        "amplitude, dB",
        x_lo..x_hi.max(x_lo + 1.0),
        y_lo..y_hi,
        points,
    )?;
    info!(path = %path.display(), step, "spectrum rendered");
    Ok(())
}

/// Y-axis bounds over the finite values of a trace, padded so the line
/// does not hug the frame. Falls back to a fixed range when nothing is
/// finite (e.g. an all `-inf` spectrum).
fn finite_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return FALLBACK_RANGE;
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}

/// Split a trace into runs of finite points. Each run is drawn as its
/// own series, so non-finite values appear as gaps.
fn finite_segments(points: impl Iterator<Item = (f64, f64)>) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        if y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn draw_line_plot(
    path: &Path,
    caption: &str,
    x_label: &str,
    y_label: &str,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
    points: impl Iterator<Item = (f64, f64)>,
) -> Result<(), PlotError> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| render_err(path, e))?;

    for segment in finite_segments(points) {
        chart
            .draw_series(LineSeries::new(segment, &BLUE))
            .map_err(|e| render_err(path, e))?;
    }

    root.present().map_err(|e| render_err(path, e))?;
    Ok(())
}
