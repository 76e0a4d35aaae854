//! Segment animations
//!
//! An [`Animation`] selects one of the frame tables in [`crate::table`].
//! Frames are only produced here; how long each one stays lit is up to the
//! caller.
//!
//! ## Example
//!
//! ```
//! use seg7_port::Animation;
//!
//! let frames: Vec<u8> = Animation::Snake.frames().map(|f| f.bits()).collect();
//! assert_eq!(frames, [0x08, 0x10, 0x02, 0x01, 0x80, 0x04]);
//!
//! // Loop forever
//! let mut looping = Animation::Snake.frames().cycle();
//! assert_eq!(looping.nth(6), Animation::Snake.frame(0).ok());
//! ```

use crate::error::LookupError;
use crate::segment::SegmentMask;
use crate::table::{DOUBLE_SNAKE_FRAMES, SNAKE_FRAMES, lookup};

/// Frame sequence shown by [`Display::print_snake`](crate::display::Display::print_snake)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    /// One segment circling the outer ring (6 frames)
    #[default]
    Snake,
    /// Two adjacent segments tracing a figure eight through g (8 frames)
    DoubleSnake,
}

impl Animation {
    /// All frames of this animation, in order
    pub fn frame_table(self) -> &'static [SegmentMask] {
        match self {
            Self::Snake => &SNAKE_FRAMES,
            Self::DoubleSnake => &DOUBLE_SNAKE_FRAMES,
        }
    }

    /// Number of frames
    pub fn len(self) -> usize {
        self.frame_table().len()
    }

    /// Always false; every animation has frames
    pub fn is_empty(self) -> bool {
        self.frame_table().is_empty()
    }

    /// Frame `i`
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::OutOfRange`] if `i >= self.len()`.
    pub fn frame(self, i: u8) -> Result<SegmentMask, LookupError> {
        lookup(self.frame_table(), i as u32)
    }

    /// Iterate over the frames once
    pub fn frames(self) -> impl Iterator<Item = SegmentMask> + Clone {
        self.frame_table().iter().copied()
    }
}
