//! Character and animation lookup tables
//!
//! [`CHARACTER_TABLE`] holds one [`Glyph`] per ASCII code point. Characters
//! that need diagonal strokes (K, M, Q, V, W, X, Z), most punctuation and all
//! control codes have no glyph and resolve to [`Glyph::Undefined`].
//!
//! [`SNAKE_FRAMES`] is a single lit segment running around the outer ring;
//! [`DOUBLE_SNAKE_FRAMES`] is the two-segment variant.
//!
//! All lookups are bounds-checked and return [`LookupError::OutOfRange`]
//! instead of reading past the table.
//!
//! ## Example
//!
//! ```
//! use seg7_port::{table, Glyph, SegmentMask};
//!
//! let h = table::lookup_char(b'h');
//! assert_eq!(h, Ok(Glyph::Defined(SegmentMask::from_bits(0b1101_0100))));
//!
//! // No glyph for 'K'
//! assert_eq!(table::lookup_char(b'K'), Ok(Glyph::Undefined));
//!
//! assert_eq!(table::lookup_digit(7), table::lookup_char(b'7'));
//! ```

use crate::error::LookupError;
use crate::glyph::Glyph;
use crate::segment::SegmentMask;

/// Number of entries in [`CHARACTER_TABLE`]
pub const ASCII_TABLE_LEN: usize = 128;

/// Number of frames in [`SNAKE_FRAMES`]
pub const SNAKE_FRAME_COUNT: usize = 6;

/// Number of frames in [`DOUBLE_SNAKE_FRAMES`]
pub const DOUBLE_SNAKE_FRAME_COUNT: usize = 8;

/// Number of decimal digits
const DIGIT_COUNT: u32 = 10;

/// Characters that have a segment pattern
///
/// Bit 7 is the leftmost digit of each literal.
const DEFINED_GLYPHS: [(u8, u8); 58] = [
    (b' ', 0b0000_0000),
    (b'-', 0b0100_0000),
    (b'.', 0b0010_0000),
    (b'0', 0b1001_1111),
    (b'1', 0b0001_0010),
    (b'2', 0b0100_1111),
    (b'3', 0b0101_1011),
    (b'4', 0b1101_0010),
    (b'5', 0b1101_1001),
    (b'6', 0b1101_1101),
    (b'7', 0b0001_0011),
    (b'8', 0b1101_1111),
    (b'9', 0b1101_1011),
    (b'=', 0b0100_1000),
    (b'A', 0b1101_0111),
    (b'B', 0b1101_1100),
    (b'C', 0b1000_1101),
    (b'D', 0b0101_1110),
    (b'E', 0b1100_1101),
    (b'F', 0b1100_0101),
    (b'G', 0b1101_1011),
    (b'H', 0b1101_0110),
    (b'I', 0b1000_0100),
    (b'J', 0b0001_1110),
    (b'L', 0b1000_1100),
    (b'N', 0b1001_0111),
    (b'O', 0b1001_1111),
    (b'P', 0b1100_0111),
    (b'R', 0b0100_0100),
    (b'S', 0b1101_1001),
    (b'T', 0b1000_0101),
    (b'U', 0b1001_1110),
    (b'Y', 0b1101_1010),
    (b'[', 0b1000_1101),
    (b']', 0b0001_1011),
    (b'_', 0b0000_1000),
    (b'a', 0b1101_0111),
    (b'b', 0b1101_1100),
    (b'c', 0b0100_1100),
    (b'd', 0b0101_1110),
    (b'e', 0b1100_1111),
    (b'f', 0b1100_0101),
    (b'g', 0b1101_1011),
    (b'h', 0b1101_0100),
    (b'i', 0b0000_0100),
    (b'j', 0b0001_1110),
    (b'l', 0b1000_0100),
    (b'n', 0b0101_0100),
    (b'o', 0b0101_1100),
    (b'p', 0b1100_0111),
    (b'r', 0b0100_0100),
    (b's', 0b1101_1001),
    (b't', 0b1100_0100),
    (b'u', 0b0001_1100),
    (b'y', 0b1101_1010),
    (b'{', 0b1000_1101),
    (b'|', 0b1000_0100),
    (b'}', 0b0001_1011),
];

const fn build_character_table() -> [Glyph; ASCII_TABLE_LEN] {
    let mut table = [Glyph::Undefined; ASCII_TABLE_LEN];
    let mut i = 0;
    while i < DEFINED_GLYPHS.len() {
        let (code, bits) = DEFINED_GLYPHS[i];
        table[code as usize] = Glyph::Defined(SegmentMask::from_bits(bits));
        i += 1;
    }
    table
}

/// Glyph for every ASCII code point, indexed by code
pub static CHARACTER_TABLE: [Glyph; ASCII_TABLE_LEN] = build_character_table();

/// Single snake: one lit segment circling d, c, b, a, f, e
pub static SNAKE_FRAMES: [SegmentMask; SNAKE_FRAME_COUNT] = [
    SegmentMask::from_bits(0b0000_1000),
    SegmentMask::from_bits(0b0001_0000),
    SegmentMask::from_bits(0b0000_0010),
    SegmentMask::from_bits(0b0000_0001),
    SegmentMask::from_bits(0b1000_0000),
    SegmentMask::from_bits(0b0000_0100),
];

/// Double snake: two adjacent lit segments tracing a figure eight
pub static DOUBLE_SNAKE_FRAMES: [SegmentMask; DOUBLE_SNAKE_FRAME_COUNT] = [
    SegmentMask::from_bits(0b0001_1000),
    SegmentMask::from_bits(0b0101_0000),
    SegmentMask::from_bits(0b1100_0000),
    SegmentMask::from_bits(0b1000_0001),
    SegmentMask::from_bits(0b0000_0011),
    SegmentMask::from_bits(0b0100_0010),
    SegmentMask::from_bits(0b0100_0100),
    SegmentMask::from_bits(0b0000_1100),
];

/// Look up a table entry, reporting the table length on failure
pub(crate) fn lookup<T: Copy>(table: &[T], index: u32) -> Result<T, LookupError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .ok_or(LookupError::OutOfRange {
            index,
            len: table.len() as u32,
        })
}

/// Glyph for an ASCII character
///
/// # Errors
///
/// Returns [`LookupError::OutOfRange`] if `c` is not ASCII (`c > 127`).
pub fn lookup_char(c: u8) -> Result<Glyph, LookupError> {
    lookup(&CHARACTER_TABLE, c as u32)
}

/// Glyph for a decimal digit `0..=9`
///
/// Same as looking up `b'0' + d`.
///
/// # Errors
///
/// Returns [`LookupError::OutOfRange`] with `len: 10` if `d > 9`.
pub fn lookup_digit(d: u32) -> Result<Glyph, LookupError> {
    if d >= DIGIT_COUNT {
        return Err(LookupError::OutOfRange {
            index: d,
            len: DIGIT_COUNT,
        });
    }
    lookup_char(b'0' + d as u8)
}

/// Glyph at a raw table index
///
/// Identical to [`lookup_char`]; use it when walking the whole table
/// rather than printing a character.
///
/// # Errors
///
/// Returns [`LookupError::OutOfRange`] if `i > 127`.
pub fn lookup_index(i: u8) -> Result<Glyph, LookupError> {
    lookup(&CHARACTER_TABLE, i as u32)
}

/// Frame `i` of the single snake animation
///
/// # Errors
///
/// Returns [`LookupError::OutOfRange`] if `i > 5`.
pub fn snake_frame(i: u8) -> Result<SegmentMask, LookupError> {
    lookup(&SNAKE_FRAMES, i as u32)
}

/// Iterate over every `(code, glyph)` pair of the character table
pub fn glyphs() -> impl Iterator<Item = (u8, Glyph)> {
    (0u8..).zip(CHARACTER_TABLE.iter().copied())
}
