//! Port register state and masking
//!
//! [`PortState`] holds the two port registers the display shares with the
//! rest of the board. [`PortState::apply`] is the pure half of a display
//! write: it replaces only the display bits of each register and leaves
//! every other pin as it was.
//!
//! ```
//! use seg7_port::{PortState, SegmentMask};
//!
//! // Unrelated pins high on both ports
//! let before = PortState::new(0b1111_1100, 0b0000_0011);
//! let after = before.apply(SegmentMask::from_bits(0b1101_0100)); // 'h'
//!
//! assert_eq!(after.reg_a, 0b1111_1100);
//! assert_eq!(after.reg_b, 0b1101_0111);
//! ```

use crate::segment::SegmentMask;
use crate::wiring::{REGISTER_A_CLEAR, REGISTER_A_MASK, REGISTER_B_CLEAR, REGISTER_B_MASK};

/// Contents of the two port registers driving the display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortState {
    /// Register A (`PORTB`); bits 0-1 drive segments a and b
    pub reg_a: u8,
    /// Register B (`PORTD`); bits 2-7 drive segments e, d, c, dp, g and f
    pub reg_b: u8,
}

impl PortState {
    /// Create a port state from raw register values
    pub const fn new(reg_a: u8, reg_b: u8) -> Self {
        Self { reg_a, reg_b }
    }

    /// Show `mask` on the display pins, preserving all other pins
    ///
    /// 1. Clear bits 0-1 of register A
    /// 2. Clear bits 2-7 of register B
    /// 3. Set register A bits 0-1 from mask bits 0-1
    /// 4. Set register B bits 2-7 from mask bits 2-7
    pub const fn apply(self, mask: SegmentMask) -> Self {
        let bits = mask.bits();
        let reg_a = self.reg_a & REGISTER_A_CLEAR;
        let reg_b = self.reg_b & REGISTER_B_CLEAR;
        Self {
            reg_a: reg_a | (bits & REGISTER_A_MASK),
            reg_b: reg_b | (bits & REGISTER_B_MASK),
        }
    }

    /// Mask currently shown on the display pins
    pub const fn mask(self) -> SegmentMask {
        SegmentMask::from_bits((self.reg_a & REGISTER_A_MASK) | (self.reg_b & REGISTER_B_MASK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    #[test]
    fn test_apply_preserves_unrelated_bits() {
        let before = PortState::new(REGISTER_A_CLEAR, REGISTER_B_CLEAR);
        for mask in 0..=u8::MAX {
            let after = before.apply(SegmentMask::from_bits(mask));
            assert_eq!(after.reg_a & REGISTER_A_CLEAR, REGISTER_A_CLEAR);
            assert_eq!(after.reg_b & REGISTER_B_CLEAR, REGISTER_B_CLEAR);
        }
    }

    #[test]
    fn test_apply_clears_previous_glyph() {
        let eight = PortState::default().apply(SegmentMask::from_bits(0b1101_1111));
        let one = eight.apply(SegmentMask::from_bits(0b0001_0010));
        assert_eq!(one, PortState::new(0b0000_0010, 0b0001_0000));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let start = PortState::new(0b1010_1010, 0b0101_0101);
        for mask in 0..=u8::MAX {
            let mask = SegmentMask::from_bits(mask);
            let once = start.apply(mask);
            assert_eq!(once.apply(mask), once);
        }
    }

    #[test]
    fn test_mask_round_trips_through_registers() {
        let start = PortState::new(0b1111_1111, 0b1111_1111);
        let shown = start.apply(SegmentMask::from_bits(0b0101_1011));
        assert_eq!(shown.mask().bits(), 0b0101_1011);
    }

    #[test]
    fn test_lowercase_h_split() {
        let glyph = table::lookup_char(b'h').unwrap();
        assert_eq!(glyph.mask().bits(), 0b1101_0100);

        let state = PortState::default().apply(glyph.mask());
        assert_eq!(state.reg_a & REGISTER_A_MASK, 0b00);
        assert_eq!((state.reg_b & REGISTER_B_MASK) >> 2, 0b11_0101);
    }

    #[test]
    fn test_uppercase_h_split() {
        let glyph = table::lookup_char(b'H').unwrap();
        assert_eq!(glyph.mask().bits(), 0b1101_0110);

        let state = PortState::default().apply(glyph.mask());
        assert_eq!(state.reg_a & REGISTER_A_MASK, 0b10);
        assert_eq!((state.reg_b & REGISTER_B_MASK) >> 2, 0b11_0101);
    }
}
