//! Display configuration types and builder

use crate::animation::Animation;
use crate::glyph::UNDEFINED_MASK;
use crate::segment::SegmentMask;

/// What the driver does with a character, digit or frame index outside its table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Return [`Error::OutOfRange`](crate::Error::OutOfRange) and leave the ports alone
    #[default]
    Reject,
    /// Log a warning, leave the ports alone and return `Ok(())`
    Ignore,
}

/// Display configuration
///
/// Use [`Builder`] to create a Config, or [`Config::default`] for the
/// stock behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Mask shown for characters without a glyph
    pub undefined_glyph: SegmentMask,
    /// Handling of out-of-range requests
    pub range_policy: RangePolicy,
    /// Frame table used by `print_snake`
    pub animation: Animation,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use seg7_port::{Animation, Builder, RangePolicy, SegmentMask};
///
/// let config = Builder::new()
///     .undefined_glyph(SegmentMask::from_bits(0b0100_0000)) // '-'
///     .range_policy(RangePolicy::Ignore)
///     .animation(Animation::DoubleSnake)
///     .build();
/// assert_eq!(config.undefined_glyph.bits(), 0b0100_0000);
/// ```
#[must_use]
pub struct Builder {
    /// Mask shown for characters without a glyph
    undefined_glyph: SegmentMask,
    /// Handling of out-of-range requests
    range_policy: RangePolicy,
    /// Frame table used by `print_snake`
    animation: Animation,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Decimal point, same as '.'
            undefined_glyph: UNDEFINED_MASK,
            range_policy: RangePolicy::Reject,
            animation: Animation::Snake,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mask shown for characters without a glyph
    ///
    /// The default is the decimal point alone, which cannot be told apart
    /// from `'.'`. Use a different mask if the two must be distinguishable.
    pub fn undefined_glyph(mut self, mask: SegmentMask) -> Self {
        self.undefined_glyph = mask;
        self
    }

    /// Set the out-of-range policy
    pub fn range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Set the animation used by `print_snake`
    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            undefined_glyph: self.undefined_glyph,
            range_policy: self.range_policy,
            animation: self.animation,
        }
    }
}
