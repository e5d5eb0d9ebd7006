//! Device-Under-Test Abstraction
//!
//! The simulator drives any synchronous device through this trait: it
//! asserts or releases reset, delivers clock edges, and reads the
//! output bus bit-accurately. Behavioral models implement [`Dut`];
//! the event loop in [`crate::simulator`] owns the schedule.

use crate::logic::LogicVector;

/// Clock edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low-to-high transition.
    Rising,
    /// High-to-low transition.
    Falling,
}

/// A synchronous device under test.
///
/// Implementations update registered state on [`Edge::Rising`] and are
/// expected to keep [`Dut::output`] stable between edges, so a read on
/// the falling edge observes the value registered half a period earlier.
pub trait Dut {
    /// Drive the reset line. `true` asserts reset.
    fn set_reset(&mut self, asserted: bool);

    /// Deliver one clock edge.
    fn clock_edge(&mut self, edge: Edge);

    /// Current value of the output bus.
    fn output(&self) -> &LogicVector;
}

/// Errors raised while configuring or running a simulation session.
///
/// All of these are fatal: the session never retries or rolls back.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("clock period must be at least 2 ps, got {0} ps")]
    InvalidClockPeriod(u64),

    #[error("phase step must be nonzero")]
    InvalidStep,
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
