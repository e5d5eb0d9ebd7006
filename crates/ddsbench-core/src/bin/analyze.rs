//! Analysis pipeline entry point: reload the raw sample log, compute
//! the centered dB spectrum, and render the time- and frequency-domain
//! plots.

use ddsbench_core::{plot, sample_store, spectrum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Oscillator phase step of the session being analyzed; parameterizes
/// the spectrum plot title and filename.
const STEP: u32 = 4000;
/// Raw sample log produced by the `capture` binary.
const SAMPLE_FILE: &str = "sin_log.data";
/// Time-domain plot output.
const WAVEFORM_FILE: &str = "sin_waveform.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let samples = sample_store::load_samples(SAMPLE_FILE)?;
    info!(file = SAMPLE_FILE, n = samples.len(), "sample log loaded");

    plot::plot_waveform(&samples, WAVEFORM_FILE)?;

    let spec = spectrum::analyze(&samples);
    let out = plot::spectrum_plot_path(".", STEP);
    plot::plot_spectrum(&spec, STEP, &out)?;
    info!(path = %out.display(), "analysis complete");
    Ok(())
}
