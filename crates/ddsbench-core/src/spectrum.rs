//! Spectral Analysis
//!
//! Turns a captured real-valued sample buffer into a frequency-centered
//! amplitude spectrum in dB:
//!
//! ```text
//! samples → FFT → fft_shift → |·| → 10·log10(·) → dB spectrum
//!                                  └── freqs: -N/2 ..= N/2-1
//! ```
//!
//! The shift moves the zero-frequency bin to the middle of the array so
//! the spectrum reads left-to-right from the most negative to the most
//! positive frequency, aligned one-to-one with the integer frequency
//! axis.
//!
//! A magnitude of zero maps to `-inf` dB and is passed through as-is:
//! consumers (plots, summaries) must tolerate non-finite values rather
//! than have the analysis invent a floor.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_core::spectrum::analyze;
//! use std::f64::consts::PI;
//!
//! let n = 1024;
//! let samples: Vec<f64> = (0..n)
//!     .map(|i| (2.0 * PI * 64.0 * i as f64 / n as f64).sin())
//!     .collect();
//!
//! let spectrum = analyze(&samples);
//! assert_eq!(spectrum.len(), n);
//! assert_eq!(spectrum.freqs[0], -(n as i64) / 2);
//! ```

use num_complex::Complex64;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

/// Frequency-centered amplitude spectrum of one sample buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spectrum {
    /// Amplitude in dB per bin, `-inf` where the bin magnitude is zero.
    pub amp_db: Vec<f64>,
    /// Integer frequency axis, `-N/2 ..= N/2-1`, aligned with `amp_db`.
    pub freqs: Vec<i64>,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.amp_db.len()
    }

    /// Whether the spectrum is empty.
    pub fn is_empty(&self) -> bool {
        self.amp_db.is_empty()
    }

    /// Bin index of the strongest positive-frequency component.
    ///
    /// Ties resolve to the lowest bin; `None` for an empty spectrum or
    /// when every positive-frequency bin is non-finite.
    pub fn peak_positive_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, (&f, &db)) in self.freqs.iter().zip(&self.amp_db).enumerate() {
            if f <= 0 || !db.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, best_db)| db > best_db) {
                best = Some((i, db));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Compute the frequency-centered amplitude spectrum in dB.
///
/// The input is treated as a real signal (imaginary part zero). N is
/// normally even; odd lengths are accepted with the usual one-bin
/// asymmetry in the centered layout.
pub fn analyze(samples: &[f64]) -> Spectrum {
    let n = samples.len();
    let mut buffer: Vec<Complex64> = samples
        .iter()
        .map(|&s| Complex64::new(s, 0.0))
        .collect();

    if n > 0 {
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(n).process(&mut buffer);
    }

    let amp_db = fft_shift(&buffer)
        .iter()
        .map(|c| 10.0 * c.norm().log10())
        .collect();

    Spectrum {
        amp_db,
        freqs: frequency_axis(n),
    }
}

/// Move the zero-frequency bin to the center (circular shift by N/2).
pub fn fft_shift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let mid = spectrum.len() / 2;
    let mut shifted = Vec::with_capacity(spectrum.len());
    shifted.extend_from_slice(&spectrum[mid..]);
    shifted.extend_from_slice(&spectrum[..mid]);
    shifted
}

/// Integer frequency axis matching a shifted N-bin spectrum:
/// `-N/2 ..= N/2-1`, strictly increasing.
pub fn frequency_axis(n: usize) -> Vec<i64> {
    let start = -((n / 2) as i64);
    (start..start + n as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sinusoid(n: usize, cycles: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * cycles * i as f64 / n as f64).sin())
            .collect()
    }

    #[test]
    fn test_frequency_axis_even() {
        let axis = frequency_axis(8);
        assert_eq!(axis, vec![-4, -3, -2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_frequency_axis_properties() {
        let n = 10_000;
        let axis = frequency_axis(n);
        assert_eq!(axis.len(), n);
        assert_eq!(axis[0], -5_000);
        assert_eq!(*axis.last().unwrap(), 4_999);
        assert!(axis.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_fft_shift_even_and_odd() {
        assert_eq!(fft_shift(&[0, 1, 2, 3]), vec![2, 3, 0, 1]);
        assert_eq!(fft_shift(&[0, 1, 2, 3, 4]), vec![2, 3, 4, 0, 1]);
        assert!(fft_shift::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_pure_tone_peaks_at_plus_minus_f() {
        let n = 1024;
        let cycles = 50.0;
        let spectrum = analyze(&sinusoid(n, cycles));

        assert_eq!(spectrum.len(), n);
        let center = n / 2;
        let peak = spectrum.peak_positive_bin().unwrap();
        assert_eq!(peak, center + 50);

        // Mirror image on the negative side, same magnitude
        let mirror = center - 50;
        let diff = (spectrum.amp_db[peak] - spectrum.amp_db[mirror]).abs();
        assert!(diff < 1e-6, "peak asymmetry {} dB", diff);

        // Both peaks tower over the rest of the spectrum
        for (i, &db) in spectrum.amp_db.iter().enumerate() {
            if i != peak && i != mirror {
                assert!(db < spectrum.amp_db[peak] - 20.0, "bin {}", i);
            }
        }
    }

    #[test]
    fn test_real_input_spectrum_is_symmetric() {
        let n = 256;
        let samples: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                (2.0 * PI * 17.0 * t).sin() + 0.5 * (2.0 * PI * 40.0 * t).cos()
            })
            .collect();
        let spectrum = analyze(&samples);

        // Conjugate symmetry: compare magnitudes in the linear domain,
        // where rounding noise in near-empty bins stays tiny.
        let center = n / 2;
        for k in 1..center {
            let pos = 10f64.powf(spectrum.amp_db[center + k] / 10.0);
            let neg = 10f64.powf(spectrum.amp_db[center - k] / 10.0);
            assert!(
                (pos - neg).abs() < 1e-6,
                "bin ±{}: {} vs {}",
                k,
                pos,
                neg
            );
        }
    }

    #[test]
    fn test_zero_signal_yields_negative_infinity() {
        let spectrum = analyze(&[0.0; 5]);
        assert_eq!(spectrum.len(), 5);
        assert!(spectrum.amp_db.iter().all(|db| *db == f64::NEG_INFINITY));
        assert_eq!(spectrum.freqs, vec![-2, -1, 0, 1, 2]);
        assert_eq!(spectrum.peak_positive_bin(), None);
    }

    #[test]
    fn test_empty_input() {
        let spectrum = analyze(&[]);
        assert!(spectrum.is_empty());
        assert!(spectrum.freqs.is_empty());
    }

    #[test]
    fn test_dc_only_signal() {
        let spectrum = analyze(&[1.0; 64]);
        let center = 32;
        assert!(spectrum.amp_db[center].is_finite());
        assert_eq!(spectrum.freqs[center], 0);
        // All real energy sits in the zero bin; anything elsewhere is
        // rounding residue far below it.
        for (i, &db) in spectrum.amp_db.iter().enumerate() {
            if i != center {
                assert!(db < spectrum.amp_db[center] - 100.0, "bin {}", i);
            }
        }
    }
}
