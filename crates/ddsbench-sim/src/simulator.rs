//! Event-Loop Simulator
//!
//! Single-threaded simulation kernel that owns the timeline: a
//! free-running clock, a one-shot reset schedule, and the device under
//! test. Instead of suspending coroutines on signal transitions, callers
//! block on [`Simulator::wait_edge`], which advances simulated time to
//! the next matching transition and delivers edges to the device along
//! the way. One call consumes exactly one edge, so edges are never
//! missed or reordered.
//!
//! ## Timeline
//!
//! ```text
//! clk  ____/▔▔▔▔\____/▔▔▔▔\____/▔▔▔▔\____
//!      0   T/2  T    3T/2 2T   ...
//!           ^R   ^F    ^R   ^F
//! ```
//!
//! The clock starts low; rising edges land on odd half-period
//! boundaries, falling edges on full periods. A scheduled reset release
//! takes effect before any edge at the same or a later time.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_sim::clock::{ClockConfig, SimDuration};
//! use ddsbench_sim::device::Edge;
//! use ddsbench_sim::nco::NcoDut;
//! use ddsbench_sim::simulator::Simulator;
//!
//! let mut dut = NcoDut::new();
//! dut.set_step(4096).unwrap();
//!
//! let mut sim = Simulator::new(ClockConfig::default(), dut).unwrap();
//! sim.hold_reset_for(SimDuration::ns(100));
//!
//! let t = sim.wait_edge(Edge::Falling);
//! assert_eq!(t.as_picos(), 1_000); // first falling edge of a 1 ns clock
//! ```

use tracing::debug;

use crate::clock::{ClockConfig, SimDuration, SimTime};
use crate::device::{Dut, Edge, SimError, SimResult};
use crate::logic::BusValue;

/// Simulation kernel driving one clock, one reset line, and one device.
#[derive(Debug)]
pub struct Simulator<D: Dut> {
    /// Current simulated time in picoseconds.
    time_ps: u64,
    /// Half of the clock period in picoseconds.
    half_period_ps: u64,
    /// Current clock level.
    clk_high: bool,
    /// Current state of the reset line.
    reset_line: bool,
    /// Pending reset release, if one is scheduled.
    reset_release_ps: Option<u64>,
    /// Device under test.
    dut: D,
}

impl<D: Dut> Simulator<D> {
    /// Create a session with reset asserted and the clock about to
    /// start. Fails if the clock period is shorter than 2 ps.
    pub fn new(clock: ClockConfig, mut dut: D) -> SimResult<Self> {
        let period_ps = clock.period.as_picos();
        let half_period_ps = period_ps / 2;
        if half_period_ps == 0 {
            return Err(SimError::InvalidClockPeriod(period_ps));
        }
        dut.set_reset(true);
        Ok(Self {
            time_ps: 0,
            half_period_ps,
            clk_high: false,
            reset_line: true,
            reset_release_ps: None,
            dut,
        })
    }

    /// Schedule the reset release `hold` after the current time. Until
    /// then the reset line stays asserted; the release happens exactly
    /// once and cannot be rescheduled mid-hold.
    pub fn hold_reset_for(&mut self, hold: SimDuration) {
        self.reset_release_ps = Some(self.time_ps + hold.as_picos());
    }

    /// Whether the reset line is currently asserted.
    pub fn reset_asserted(&self) -> bool {
        self.reset_line
    }

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        SimTime::from_picos(self.time_ps)
    }

    /// Current clock level.
    pub fn clk_is_high(&self) -> bool {
        self.clk_high
    }

    /// Shared access to the device under test.
    pub fn dut(&self) -> &D {
        &self.dut
    }

    /// Advance to the next clock transition, releasing reset first if
    /// its schedule has come due.
    fn advance_half_period(&mut self) -> Edge {
        let next_ps = self.time_ps + self.half_period_ps;
        if let Some(release_ps) = self.reset_release_ps {
            if release_ps <= next_ps {
                self.dut.set_reset(false);
                self.reset_line = false;
                self.reset_release_ps = None;
                debug!(release_ps, "reset released");
            }
        }
        self.time_ps = next_ps;
        self.clk_high = !self.clk_high;
        let edge = if self.clk_high {
            Edge::Rising
        } else {
            Edge::Falling
        };
        self.dut.clock_edge(edge);
        edge
    }

    /// Block until the next `edge` transition of the clock, returning
    /// the time at which it occurred.
    pub fn wait_edge(&mut self, edge: Edge) -> SimTime {
        loop {
            if self.advance_half_period() == edge {
                return self.now();
            }
        }
    }

    /// Bit-accurate read of the device output bus.
    pub fn sample_output(&self) -> BusValue {
        BusValue::from_vector(self.dut.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicVector;

    /// Minimal DUT that counts edges and mirrors its reset line.
    struct Probe {
        rising: usize,
        falling: usize,
        resets: Vec<bool>,
        out: LogicVector,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                rising: 0,
                falling: 0,
                resets: Vec::new(),
                out: LogicVector::from_i64(8, 0),
            }
        }
    }

    impl Dut for Probe {
        fn set_reset(&mut self, asserted: bool) {
            self.resets.push(asserted);
        }

        fn clock_edge(&mut self, edge: Edge) {
            match edge {
                Edge::Rising => self.rising += 1,
                Edge::Falling => self.falling += 1,
            }
        }

        fn output(&self) -> &LogicVector {
            &self.out
        }
    }

    #[test]
    fn test_zero_period_is_fatal() {
        let err = Simulator::new(
            ClockConfig::new(SimDuration::ps(0)),
            Probe::new(),
        )
        .err()
        .expect("zero period must be rejected");
        assert!(matches!(err, SimError::InvalidClockPeriod(0)));

        // 1 ps has no representable half period either
        assert!(Simulator::new(ClockConfig::new(SimDuration::ps(1)), Probe::new()).is_err());
    }

    #[test]
    fn test_edge_times() {
        let mut sim =
            Simulator::new(ClockConfig::new(SimDuration::ns(1)), Probe::new()).unwrap();

        assert_eq!(sim.wait_edge(Edge::Rising).as_picos(), 500);
        assert_eq!(sim.wait_edge(Edge::Falling).as_picos(), 1_000);
        assert_eq!(sim.wait_edge(Edge::Falling).as_picos(), 2_000);
        assert_eq!(sim.wait_edge(Edge::Rising).as_picos(), 2_500);
    }

    #[test]
    fn test_one_edge_per_wait() {
        let mut sim =
            Simulator::new(ClockConfig::new(SimDuration::ns(2)), Probe::new()).unwrap();
        for _ in 0..10 {
            sim.wait_edge(Edge::Falling);
        }
        assert_eq!(sim.dut().falling, 10);
        assert_eq!(sim.dut().rising, 10);
        assert_eq!(sim.now().as_picos(), 20_000);
    }

    #[test]
    fn test_reset_line_asserted_from_construction() {
        // The line is driven high by `new` itself, before any release
        // schedule exists.
        let sim =
            Simulator::new(ClockConfig::new(SimDuration::ns(1)), Probe::new()).unwrap();
        assert!(sim.reset_asserted());
        assert_eq!(sim.dut().resets, vec![true]);
    }

    #[test]
    fn test_reset_asserted_at_start_and_released_on_schedule() {
        let mut sim =
            Simulator::new(ClockConfig::new(SimDuration::ns(1)), Probe::new()).unwrap();
        assert!(sim.reset_asserted());
        sim.hold_reset_for(SimDuration::ns(3));
        assert!(sim.reset_asserted());

        // Edges strictly before the release leave reset alone
        sim.wait_edge(Edge::Falling); // 1 ns
        sim.wait_edge(Edge::Falling); // 2 ns
        assert!(sim.reset_asserted());
        assert_eq!(sim.dut().resets, vec![true]);

        // The rising edge at 2.5 ns is still held; 3 ns releases first
        sim.wait_edge(Edge::Falling); // 3 ns
        assert!(!sim.reset_asserted());
        assert_eq!(sim.dut().resets, vec![true, false]);
    }
}
