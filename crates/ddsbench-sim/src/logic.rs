//! Four-State Logic Values
//!
//! Hardware simulation distinguishes more than two signal states: a bit
//! can be driven low, driven high, unknown (`x`, e.g. an uninitialized
//! register), or high-impedance (`z`, an undriven bus). Ordinary numeric
//! types cannot express the last two, so bus reads are surfaced as a
//! tagged [`BusValue`] instead of a sentinel number.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_sim::logic::{BusValue, Logic, LogicVector};
//!
//! let bus = LogicVector::from_i64(8, -3);
//! assert_eq!(bus.binstr(), "11111101");
//! assert_eq!(BusValue::from_vector(&bus), BusValue::Valid(-3));
//!
//! let undriven = LogicVector::unknown(8);
//! assert_eq!(BusValue::from_vector(&undriven), BusValue::Indeterminate);
//! ```

use std::fmt;

/// One simulated signal bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    /// Driven low.
    Zero,
    /// Driven high.
    One,
    /// Unknown value (uninitialized or conflicting drivers).
    X,
    /// High impedance (undriven).
    Z,
}

impl Logic {
    /// Whether this bit carries a defined binary value.
    pub fn is_determinate(&self) -> bool {
        matches!(self, Logic::Zero | Logic::One)
    }

    /// Character used in bit strings (`0`, `1`, `x`, `z`).
    pub fn to_char(&self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'x',
            Logic::Z => 'z',
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A fixed-width bus of [`Logic`] bits, MSB first.
///
/// The width is fixed at construction and never changes; bus-wide
/// updates replace the whole vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicVector {
    bits: Vec<Logic>,
}

impl LogicVector {
    /// A bus with every bit set to `value`.
    pub fn filled(width: usize, value: Logic) -> Self {
        Self {
            bits: vec![value; width],
        }
    }

    /// An all-`x` bus, the power-on state of an uninitialized register.
    pub fn unknown(width: usize) -> Self {
        Self::filled(width, Logic::X)
    }

    /// Encode a signed integer as a two's-complement bus of `width` bits.
    ///
    /// Values outside the representable range are truncated to the low
    /// `width` bits, matching hardware assignment semantics.
    pub fn from_i64(width: usize, value: i64) -> Self {
        assert!(width > 0 && width <= 64, "bus width must be 1..=64");
        let bits = (0..width)
            .rev()
            .map(|i| {
                if (value >> i) & 1 == 1 {
                    Logic::One
                } else {
                    Logic::Zero
                }
            })
            .collect();
        Self { bits }
    }

    /// Bus width in bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Whether every bit is a defined `0` or `1`.
    pub fn is_determinate(&self) -> bool {
        self.bits.iter().all(Logic::is_determinate)
    }

    /// Bit string representation, MSB first (e.g. `"10x1"`).
    pub fn binstr(&self) -> String {
        self.bits.iter().map(Logic::to_char).collect()
    }

    /// Interpret the bus as a signed two's-complement integer.
    ///
    /// Returns `None` if any bit is `x` or `z` — a partially defined
    /// word has no meaningful numeric reading.
    pub fn to_i64(&self) -> Option<i64> {
        if self.bits.is_empty() || !self.is_determinate() {
            return None;
        }
        let mut raw: u64 = 0;
        for bit in &self.bits {
            raw = (raw << 1) | u64::from(*bit == Logic::One);
        }
        let width = self.bits.len();
        if width < 64 && raw >> (width - 1) & 1 == 1 {
            raw |= !0u64 << width;
        }
        Some(raw as i64)
    }
}

impl fmt::Display for LogicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binstr())
    }
}

/// Result of a bit-accurate bus read.
///
/// Any `x` or `z` anywhere in the word makes the whole read
/// [`BusValue::Indeterminate`]; there is no partial interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusValue {
    /// Fully driven word, interpreted as signed two's complement.
    Valid(i64),
    /// At least one bit was `x` or `z`.
    Indeterminate,
}

impl BusValue {
    /// Read a [`LogicVector`] into a tagged value.
    pub fn from_vector(bus: &LogicVector) -> Self {
        match bus.to_i64() {
            Some(v) => BusValue::Valid(v),
            None => BusValue::Indeterminate,
        }
    }

    /// The signed value, if the read was fully driven.
    pub fn valid(&self) -> Option<i64> {
        match self {
            BusValue::Valid(v) => Some(*v),
            BusValue::Indeterminate => None,
        }
    }
}

impl From<&LogicVector> for BusValue {
    fn from(bus: &LogicVector) -> Self {
        Self::from_vector(bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_complement_round_trip() {
        for value in [0i64, 1, -1, 42, -42, 32767, -32768] {
            let bus = LogicVector::from_i64(16, value);
            assert_eq!(bus.to_i64(), Some(value), "value {}", value);
        }
    }

    #[test]
    fn test_full_width_round_trip() {
        for value in [i64::MAX, i64::MIN, -1, 0] {
            let bus = LogicVector::from_i64(64, value);
            assert_eq!(bus.to_i64(), Some(value));
        }
    }

    #[test]
    fn test_truncation_matches_hardware_assignment() {
        // 0x1_00 into an 8-bit bus keeps only the low byte
        let bus = LogicVector::from_i64(8, 256);
        assert_eq!(bus.to_i64(), Some(0));
        let bus = LogicVector::from_i64(8, 257);
        assert_eq!(bus.to_i64(), Some(1));
    }

    #[test]
    fn test_binstr() {
        let bus = LogicVector::from_i64(4, 0b1010);
        assert_eq!(bus.binstr(), "1010");
        assert_eq!(LogicVector::unknown(3).binstr(), "xxx");
        assert_eq!(LogicVector::filled(2, Logic::Z).binstr(), "zz");
    }

    #[test]
    fn test_any_unknown_bit_poisons_the_read() {
        let mut bus = LogicVector::from_i64(8, 17);
        assert!(bus.is_determinate());

        bus.bits[3] = Logic::X;
        assert!(!bus.is_determinate());
        assert_eq!(bus.to_i64(), None);
        assert_eq!(BusValue::from_vector(&bus), BusValue::Indeterminate);

        bus.bits[3] = Logic::Z;
        assert_eq!(BusValue::from_vector(&bus), BusValue::Indeterminate);
    }

    #[test]
    fn test_bus_value_accessor() {
        let bus = LogicVector::from_i64(12, -100);
        let read = BusValue::from_vector(&bus);
        assert_eq!(read.valid(), Some(-100));
        assert_eq!(BusValue::Indeterminate.valid(), None);
    }
}
