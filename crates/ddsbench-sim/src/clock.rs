//! Simulation Time and Clock Configuration
//!
//! Simulated time is kept in integer picoseconds so that edge schedules
//! are exact: there is no floating-point drift no matter how long a
//! session runs. Durations carry an explicit [`TimeUnit`] the way
//! testbench APIs usually write them (`SimDuration::ns(100)`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time unit for durations handed to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Picoseconds (base resolution).
    Ps,
    /// Nanoseconds.
    Ns,
    /// Microseconds.
    Us,
    /// Milliseconds.
    Ms,
}

impl TimeUnit {
    /// Picoseconds per unit.
    pub fn picos(&self) -> u64 {
        match self {
            TimeUnit::Ps => 1,
            TimeUnit::Ns => 1_000,
            TimeUnit::Us => 1_000_000,
            TimeUnit::Ms => 1_000_000_000,
        }
    }
}

/// A span of simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimDuration {
    picos: u64,
}

impl SimDuration {
    /// Duration from a value and unit.
    pub fn new(value: u64, unit: TimeUnit) -> Self {
        Self {
            picos: value * unit.picos(),
        }
    }

    /// Duration in picoseconds.
    pub fn ps(value: u64) -> Self {
        Self::new(value, TimeUnit::Ps)
    }

    /// Duration in nanoseconds.
    pub fn ns(value: u64) -> Self {
        Self::new(value, TimeUnit::Ns)
    }

    /// Duration in microseconds.
    pub fn us(value: u64) -> Self {
        Self::new(value, TimeUnit::Us)
    }

    /// Total picoseconds.
    pub fn as_picos(&self) -> u64 {
        self.picos
    }

    /// Whether this is a zero-length span.
    pub fn is_zero(&self) -> bool {
        self.picos == 0
    }
}

/// An absolute point on the simulation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTime {
    picos: u64,
}

impl SimTime {
    /// Session start.
    pub const ZERO: SimTime = SimTime { picos: 0 };

    /// Time from an absolute picosecond count.
    pub fn from_picos(picos: u64) -> Self {
        Self { picos }
    }

    /// Picoseconds since session start.
    pub fn as_picos(&self) -> u64 {
        self.picos
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ps", self.picos)
    }
}

/// Free-running clock description.
///
/// The clock starts low at time zero and toggles every half period for
/// the whole session; it is never paused or retimed once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Full clock period. Odd picosecond counts are truncated to an
    /// even number so both half periods are equal.
    pub period: SimDuration,
}

impl ClockConfig {
    /// Clock with the given period.
    pub fn new(period: SimDuration) -> Self {
        Self { period }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period: SimDuration::ns(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(SimDuration::ns(1).as_picos(), 1_000);
        assert_eq!(SimDuration::us(2).as_picos(), 2_000_000);
        assert_eq!(SimDuration::new(3, TimeUnit::Ms).as_picos(), 3_000_000_000);
        assert_eq!(SimDuration::ps(7).as_picos(), 7);
    }

    #[test]
    fn test_duration_ordering() {
        assert!(SimDuration::ns(1) < SimDuration::us(1));
        assert!(SimDuration::ps(999) < SimDuration::ns(1));
        assert!(SimDuration::ps(0).is_zero());
    }

    #[test]
    fn test_time_display() {
        assert_eq!(SimTime::from_picos(1500).to_string(), "1500 ps");
        assert_eq!(SimTime::ZERO.as_picos(), 0);
    }
}
