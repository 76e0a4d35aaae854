//! Register wiring constants
//!
//! The display's eight segment pins are soldered across two GPIO ports so
//! that each mask bit lands on the matching bit of one port register. On the
//! reference ATmega328P board register A is `PORTB` and register B is
//! `PORTD`; `PD0`/`PD1` are the serial TX/RX pins and must never be touched.
//!
//! ```text
//!            a.7.PB0
//!           +--------+
//! f.9.PD7   |        | b.6.PB1
//!           |g.10.PD6|
//!           +--------+
//! e.1.PD2   |        | c.4.PD4
//!           |        |
//!           +--------+  *dp.5.PD5
//!            d.2.PD3
//! ```
//!
//! Labels read `segment.display-pin.mcu-pin`.
//!
//! ## Example
//!
//! ```
//! use seg7_port::wiring::{REGISTER_A_MASK, REGISTER_B_MASK};
//!
//! assert_eq!(REGISTER_A_MASK & REGISTER_B_MASK, 0);
//! assert_eq!(REGISTER_A_MASK | REGISTER_B_MASK, 0xFF);
//! ```

// Register A (PORTB)

/// Mask bits routed to register A (bits 0-1: segments a, b)
pub const REGISTER_A_MASK: u8 = 0b0000_0011;

/// AND-mask that clears the display pins of register A and keeps the rest
pub const REGISTER_A_CLEAR: u8 = !REGISTER_A_MASK;

// Register B (PORTD)

/// Mask bits routed to register B (bits 2-7: segments e, d, c, dp, g, f)
pub const REGISTER_B_MASK: u8 = 0b1111_1100;

/// AND-mask that clears the display pins of register B and keeps the rest
///
/// Bits 0-1 of register B are the serial TX/RX pins.
pub const REGISTER_B_CLEAR: u8 = !REGISTER_B_MASK;

/// Number of pins driving the display
pub const PIN_COUNT: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    #[test]
    fn test_masks_partition_the_byte() {
        assert_eq!(REGISTER_A_MASK & REGISTER_B_MASK, 0);
        assert_eq!(REGISTER_A_MASK | REGISTER_B_MASK, 0xFF);
        assert_eq!(REGISTER_A_CLEAR, 0b1111_1100);
        assert_eq!(REGISTER_B_CLEAR, 0b0000_0011);
    }

    #[test]
    fn test_segments_a_and_b_are_on_register_a() {
        for segment in Segment::BIT_ORDER {
            let on_a = segment.mask().bits() & REGISTER_A_MASK != 0;
            assert_eq!(on_a, matches!(segment, Segment::A | Segment::B));
        }
    }
}
