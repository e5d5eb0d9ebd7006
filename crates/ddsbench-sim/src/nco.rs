//! Behavioral NCO Model
//!
//! Clock-accurate model of a digital oscillator (NCO/DDS): a 16-bit
//! phase accumulator advances by a fixed step on every rising clock
//! edge, and the registered output bus carries the corresponding sine
//! sample as a signed 16-bit word.
//!
//! The model reproduces the simulation states of the real circuit:
//!
//! - at power-on the output register is all-`x`,
//! - while reset is asserted, rising edges clear the accumulator but
//!   the output stays `x` (the datapath is not yet valid),
//! - the first rising edge after release registers `sin(0) = 0`, after
//!   which the accumulator free-runs and wraps modulo 2^16.
//!
//! Output frequency is `step / 2^16` cycles per clock.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_sim::device::{Dut, Edge};
//! use ddsbench_sim::nco::NcoDut;
//!
//! let mut nco = NcoDut::new();
//! nco.set_step(4096).unwrap();
//! assert!(!nco.output().is_determinate()); // power-on x's
//!
//! nco.set_reset(false);
//! nco.clock_edge(Edge::Rising);
//! assert_eq!(nco.output().to_i64(), Some(0)); // sin(0)
//! ```

use std::f64::consts::PI;

use crate::device::{Dut, Edge, SimError, SimResult};
use crate::logic::LogicVector;

/// Output bus width in bits.
pub const OUTPUT_WIDTH: usize = 16;

/// Phase accumulator width in bits.
pub const PHASE_BITS: u32 = 16;

/// Full-scale output amplitude (signed 16-bit).
const AMPLITUDE: f64 = i16::MAX as f64;

/// Behavioral NCO device under test.
#[derive(Debug, Clone)]
pub struct NcoDut {
    /// Phase increment per clock, set once before the session.
    step: u16,
    /// Phase accumulator.
    phase: u16,
    /// Reset line state.
    reset: bool,
    /// Registered output bus.
    out: LogicVector,
}

impl NcoDut {
    /// New device in its power-on state: output all-`x`, reset
    /// deasserted, step unset.
    pub fn new() -> Self {
        Self {
            step: 0,
            phase: 0,
            reset: false,
            out: LogicVector::unknown(OUTPUT_WIDTH),
        }
    }

    /// Configure the phase step. Must be called exactly once before
    /// the session starts; a zero step would freeze the oscillator and
    /// is rejected.
    pub fn set_step(&mut self, step: u16) -> SimResult<()> {
        if step == 0 {
            return Err(SimError::InvalidStep);
        }
        self.step = step;
        Ok(())
    }

    /// Configured phase step.
    pub fn step(&self) -> u16 {
        self.step
    }

    /// Current accumulator phase.
    pub fn phase(&self) -> u16 {
        self.phase
    }

    /// Ideal sine sample for an accumulator phase, quantized to the
    /// output word size.
    fn sine_sample(phase: u16) -> i64 {
        let angle = 2.0 * PI * f64::from(phase) / f64::from(1u32 << PHASE_BITS);
        (angle.sin() * AMPLITUDE).round() as i64
    }
}

impl Default for NcoDut {
    fn default() -> Self {
        Self::new()
    }
}

impl Dut for NcoDut {
    fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    fn clock_edge(&mut self, edge: Edge) {
        if edge != Edge::Rising {
            return; // registers update on the rising edge only
        }
        if self.reset {
            self.phase = 0;
            self.out = LogicVector::unknown(OUTPUT_WIDTH);
        } else {
            self.out = LogicVector::from_i64(OUTPUT_WIDTH, Self::sine_sample(self.phase));
            self.phase = self.phase.wrapping_add(self.step);
        }
    }

    fn output(&self) -> &LogicVector {
        &self.out
    }
}
