//! Sample Acquisition Session
//!
//! Runs one complete capture: configure the oscillator, hold reset,
//! then sample the output bus on every falling clock edge until the
//! buffer is full.
//!
//! ## Sampling policy
//!
//! The buffer has one slot per clock cycle and its length never
//! changes. A read that contains `x` or `z` bits is discarded and the
//! slot keeps its pre-initialized zero — no retry, no shifting, no
//! early termination. Uniform sample spacing is what the later spectral
//! analysis relies on, so dropping a cycle would be worse than logging
//! a zero. Reads taken while reset is still asserted are expected to be
//! indeterminate; the zero-filled warm-up at the start of a capture is
//! normal, not an error.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_sim::capture::{run_capture, CaptureConfig};
//!
//! let config = CaptureConfig {
//!     num_samples: 256,
//!     ..Default::default()
//! };
//! let samples = run_capture(&config).unwrap();
//! assert_eq!(samples.len(), 256);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::{ClockConfig, SimDuration};
use crate::device::{Edge, SimResult};
use crate::logic::BusValue;
use crate::nco::NcoDut;
use crate::simulator::Simulator;

/// Parameters of one acquisition session.
///
/// These are fixed for the whole session; nothing is reconfigured
/// mid-capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Oscillator phase step, in accumulator counts per clock.
    pub step: u16,
    /// Clock period.
    pub clock_period: SimDuration,
    /// How long reset stays asserted at session start.
    pub reset_hold: SimDuration,
    /// Number of samples to acquire (one per clock cycle).
    pub num_samples: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            step: 4000,
            clock_period: SimDuration::ns(1),
            reset_hold: SimDuration::ns(100),
            num_samples: 10_000,
        }
    }
}

/// Drive a full acquisition session and return the captured buffer.
///
/// The session walks one way through its states: the oscillator step is
/// set once, reset is asserted and held for the configured time, and
/// the loop then consumes exactly one falling edge per buffer slot.
/// The returned buffer always has exactly `config.num_samples`
/// elements, however many reads were indeterminate.
pub fn run_capture(config: &CaptureConfig) -> SimResult<Vec<f64>> {
    let mut dut = NcoDut::new();
    dut.set_step(config.step)?;

    let mut sim = Simulator::new(ClockConfig::new(config.clock_period), dut)?;
    sim.hold_reset_for(config.reset_hold);

    info!(
        step = config.step,
        clock_period_ps = config.clock_period.as_picos(),
        reset_hold_ps = config.reset_hold.as_picos(),
        num_samples = config.num_samples,
        "starting capture session"
    );

    let mut samples = vec![0.0f64; config.num_samples];
    let mut indeterminate = 0usize;
    for (cycle, slot) in samples.iter_mut().enumerate() {
        sim.wait_edge(Edge::Falling);
        match sim.sample_output() {
            BusValue::Valid(value) => *slot = value as f64,
            BusValue::Indeterminate => {
                // slot keeps its zero; spacing stays uniform
                indeterminate += 1;
                debug!(cycle, "indeterminate read zero-filled");
            }
        }
    }

    info!(
        indeterminate,
        end_time = %sim.now(),
        "capture complete"
    );
    Ok(samples)
}
