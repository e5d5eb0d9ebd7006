//! # Sample Persistence and Spectral Verification
//!
//! Offline half of the NCO verification pipeline: reload a raw sample
//! log captured by `ddsbench-sim`, reconstruct its frequency spectrum,
//! and render both domains to image files.
//!
//! ## Pipeline
//!
//! ```text
//! sin_log.data → load → FFT → fft_shift → |·| → 10·log10 → plots
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_core::{sample_store, spectrum};
//!
//! let tmp = std::env::temp_dir().join("ddsbench_core_doc.data");
//! let buffer: Vec<f64> = (0..64).map(|i| (i as f64 * 0.4).sin()).collect();
//! sample_store::persist_samples(&tmp, &buffer).unwrap();
//!
//! let reloaded = sample_store::load_samples(&tmp).unwrap();
//! let spec = spectrum::analyze(&reloaded);
//! assert_eq!(spec.len(), 64);
//! std::fs::remove_file(&tmp).ok();
//! ```

pub mod plot;
pub mod sample_store;
pub mod spectrum;

pub use plot::{plot_spectrum, plot_waveform, spectrum_plot_path, PlotError};
pub use sample_store::{load_samples, persist_samples, StoreError};
pub use spectrum::{analyze, fft_shift, frequency_axis, Spectrum};
