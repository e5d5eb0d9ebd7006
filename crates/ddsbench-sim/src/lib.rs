//! # NCO Simulation and Sample Acquisition
//!
//! Clock-accurate simulation of a digital oscillator (NCO/DDS) together
//! with the acquisition loop that captures its output for spectral
//! verification.
//!
//! ## Pipeline
//!
//! ```text
//! configure step → assert reset → hold → release
//!        │
//!        ▼
//! for each of N cycles: wait falling edge → read bus → store sample
//!        │
//!        ▼
//! fixed-length f64 buffer (indeterminate reads zero-filled)
//! ```
//!
//! The simulation side is deliberately small: a four-state logic model
//! ([`logic`]), integer-picosecond time ([`clock`]), a device seam
//! ([`device`]), a behavioral oscillator ([`nco`]), a blocking
//! event-loop kernel ([`simulator`]), and the session driver
//! ([`capture`]). Persistence and analysis of the captured buffer live
//! in `ddsbench-core`.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_sim::capture::{run_capture, CaptureConfig};
//!
//! let samples = run_capture(&CaptureConfig {
//!     step: 4096,
//!     num_samples: 512,
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(samples.len(), 512);
//! ```

pub mod capture;
pub mod clock;
pub mod device;
pub mod logic;
pub mod nco;
pub mod simulator;

pub use capture::{run_capture, CaptureConfig};
pub use clock::{ClockConfig, SimDuration, SimTime, TimeUnit};
pub use device::{Dut, Edge, SimError, SimResult};
pub use logic::{BusValue, Logic, LogicVector};
pub use nco::NcoDut;
pub use simulator::Simulator;
