//! Character glyphs
//!
//! A [`Glyph`] is either a defined segment pattern or the marker that no
//! pattern exists for a character. The hardware has no way to show "no
//! glyph", so [`Glyph::Undefined`] is collapsed to a placeholder mask only
//! when it is written out (by default the decimal point, which makes it
//! indistinguishable from `'.'` on the display).
//!
//! ```
//! use seg7_port::{Glyph, SegmentMask};
//!
//! let dot = Glyph::Defined(SegmentMask::DECIMAL_POINT);
//! assert_ne!(dot, Glyph::Undefined);
//! assert_eq!(dot.mask(), Glyph::Undefined.mask());
//! ```

use crate::segment::SegmentMask;

/// Placeholder mask written for [`Glyph::Undefined`] (decimal point only)
pub const UNDEFINED_MASK: SegmentMask = SegmentMask::DECIMAL_POINT;

/// Segment pattern for one character
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    /// Character has a segment pattern
    Defined(SegmentMask),
    /// Character cannot be drawn on seven segments
    Undefined,
}

impl Glyph {
    /// Mask to write, using [`UNDEFINED_MASK`] for undefined glyphs
    pub const fn mask(self) -> SegmentMask {
        self.mask_or(UNDEFINED_MASK)
    }

    /// Mask to write, using `placeholder` for undefined glyphs
    pub const fn mask_or(self, placeholder: SegmentMask) -> SegmentMask {
        match self {
            Self::Defined(mask) => mask,
            Self::Undefined => placeholder,
        }
    }

    /// Whether a segment pattern exists
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// The segment pattern, if any
    pub const fn defined(self) -> Option<SegmentMask> {
        match self {
            Self::Defined(mask) => Some(mask),
            Self::Undefined => None,
        }
    }
}

impl From<SegmentMask> for Glyph {
    fn from(mask: SegmentMask) -> Self {
        Self::Defined(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_collapses_to_decimal_point() {
        assert_eq!(Glyph::Undefined.mask().bits(), 0b0010_0000);
    }

    #[test]
    fn test_mask_or_uses_placeholder_only_for_undefined() {
        let placeholder = SegmentMask::from_bits(0b0100_0000);
        assert_eq!(Glyph::Undefined.mask_or(placeholder), placeholder);

        let blank = Glyph::Defined(SegmentMask::BLANK);
        assert_eq!(blank.mask_or(placeholder), SegmentMask::BLANK);
    }

    #[test]
    fn test_defined_accessors() {
        let glyph = Glyph::from(SegmentMask::from_bits(0b0001_0010));
        assert!(glyph.is_defined());
        assert_eq!(glyph.defined(), Some(SegmentMask::from_bits(0b0001_0010)));
        assert!(!Glyph::Undefined.is_defined());
        assert_eq!(Glyph::Undefined.defined(), None);
    }
}
