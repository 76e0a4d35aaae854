//! Segment and segment-mask types
//!
//! This module defines the [`Segment`] enum for the eight illuminable strokes
//! of the display and the [`SegmentMask`] newtype that encodes which of them
//! are lit.
//!
//! ## Bit Assignment
//!
//! Each bit of a [`SegmentMask`] drives one segment. The assignment follows
//! the board wiring and is fixed:
//!
//! | Bit | Segment | Pin |
//! |-----|---------|-----|
//! | 0   | a       | PB0 |
//! | 1   | b       | PB1 |
//! | 2   | e       | PD2 |
//! | 3   | d       | PD3 |
//! | 4   | c       | PD4 |
//! | 5   | dp      | PD5 |
//! | 6   | g       | PD6 |
//! | 7   | f       | PD7 |
//!
//! ## Example
//!
//! ```
//! use seg7_port::{Segment, SegmentMask};
//!
//! let one = SegmentMask::from_segments(&[Segment::B, Segment::C]);
//! assert_eq!(one.bits(), 0b0001_0010);
//! assert!(one.is_lit(Segment::C));
//! assert!(!one.is_lit(Segment::Dp));
//! ```

use core::ops::{BitAnd, BitOr};

/// One stroke of a 7-segment display, or the decimal point
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Segment {
    /// Top
    A,
    /// Top right
    B,
    /// Bottom right
    C,
    /// Bottom
    D,
    /// Bottom left
    E,
    /// Top left
    F,
    /// Middle
    G,
    /// Decimal point
    Dp,
}

impl Segment {
    /// All segments in bit order (bit 0 first)
    pub const BIT_ORDER: [Segment; 8] = [
        Self::A,
        Self::B,
        Self::E,
        Self::D,
        Self::C,
        Self::Dp,
        Self::G,
        Self::F,
    ];

    /// Bit position of this segment within a [`SegmentMask`]
    ///
    /// ```
    /// use seg7_port::Segment;
    ///
    /// assert_eq!(Segment::A.bit(), 0);
    /// assert_eq!(Segment::Dp.bit(), 5);
    /// assert_eq!(Segment::F.bit(), 7);
    /// ```
    pub const fn bit(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::E => 2,
            Self::D => 3,
            Self::C => 4,
            Self::Dp => 5,
            Self::G => 6,
            Self::F => 7,
        }
    }

    /// Single-segment mask with only this segment lit
    pub const fn mask(self) -> SegmentMask {
        SegmentMask(1 << self.bit())
    }
}

/// Eight-bit segment illumination pattern
///
/// A set bit lights the corresponding [`Segment`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct SegmentMask(u8);

impl SegmentMask {
    /// All segments off
    pub const BLANK: Self = Self(0b0000_0000);

    /// Only the decimal point lit
    ///
    /// This is also the placeholder shown for characters without a glyph.
    pub const DECIMAL_POINT: Self = Self(0b0010_0000);

    /// All segments, including the decimal point, lit
    pub const ALL: Self = Self(0b1111_1111);

    /// Wrap raw mask bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask from a list of lit segments
    pub const fn from_segments(segments: &[Segment]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].mask().0;
            i += 1;
        }
        Self(bits)
    }

    /// Raw mask bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `segment` is lit in this mask
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.mask().0 != 0
    }

    /// Copy of this mask with `segment` lit
    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | segment.mask().0)
    }

    /// Copy of this mask with `segment` dark
    pub const fn without(self, segment: Segment) -> Self {
        Self(self.0 & !segment.mask().0)
    }

    /// Number of lit segments
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the lit segments in bit order
    pub fn lit_segments(self) -> impl Iterator<Item = Segment> {
        Segment::BIT_ORDER
            .into_iter()
            .filter(move |segment| self.is_lit(*segment))
    }
}

impl From<u8> for SegmentMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<SegmentMask> for u8 {
    fn from(mask: SegmentMask) -> Self {
        mask.0
    }
}

impl From<Segment> for SegmentMask {
    fn from(segment: Segment) -> Self {
        segment.mask()
    }
}

impl BitOr for SegmentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for SegmentMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl core::fmt::Binary for SegmentMask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_matches_bit() {
        for (position, segment) in Segment::BIT_ORDER.iter().enumerate() {
            assert_eq!(segment.bit() as usize, position);
        }
    }

    #[test]
    fn test_segment_masks_are_distinct_single_bits() {
        let combined = Segment::BIT_ORDER
            .iter()
            .fold(SegmentMask::BLANK, |acc, segment| acc | segment.mask());
        assert_eq!(combined, SegmentMask::ALL);
        for segment in Segment::BIT_ORDER {
            assert_eq!(segment.mask().lit_count(), 1);
        }
    }

    #[test]
    fn test_decimal_point_constant() {
        assert_eq!(Segment::Dp.mask(), SegmentMask::DECIMAL_POINT);
    }

    #[test]
    fn test_from_segments_eight() {
        let eight = SegmentMask::from_segments(&[
            Segment::A,
            Segment::B,
            Segment::C,
            Segment::D,
            Segment::E,
            Segment::F,
            Segment::G,
        ]);
        assert_eq!(eight.bits(), 0b1101_1111);
    }

    #[test]
    fn test_with_and_without() {
        let mask = SegmentMask::BLANK.with(Segment::G).with(Segment::Dp);
        assert_eq!(mask.bits(), 0b0110_0000);
        assert_eq!(mask.without(Segment::Dp).bits(), 0b0100_0000);
        assert_eq!(mask.without(Segment::A), mask);
    }

    #[test]
    fn test_lit_segments_in_bit_order() {
        let mask = SegmentMask::from_bits(0b1000_0001);
        let mut lit = mask.lit_segments();
        assert_eq!(lit.next(), Some(Segment::A));
        assert_eq!(lit.next(), Some(Segment::F));
        assert_eq!(lit.next(), None);
    }

    #[test]
    fn test_binary_format() {
        let mask = SegmentMask::from_bits(0b0010_0000);
        assert_eq!(alloc::format!("{mask:08b}"), "00100000");
    }
}
