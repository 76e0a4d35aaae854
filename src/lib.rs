//! 7-Segment Port Driver
//!
//! A driver for a single 7-segment LED digit whose eight segment pins are
//! wired straight to two GPIO port registers.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 pin support via [`PinInterface`]
//! - Full ASCII glyph table with explicit [`Glyph::Undefined`] entries
//! - Snake animation frames
//! - Read-modify-write that never disturbs pins unrelated to the display
//! - Optional critical section around port writes (`critical-section` feature, default)
//!
//! ## Usage
//!
//! ```rust
//! use seg7_port::{Builder, Display, PortState, RangePolicy};
//!
//! // Any PortInterface works; PortState is a pair of virtual registers.
//! let ports = PortState::new(0x00, 0b0000_0011); // PD0/PD1 in use by the UART
//! let config = Builder::new().range_policy(RangePolicy::Reject).build();
//!
//! let mut display = Display::new(ports, config);
//! let _ = display.print_char('H');
//! let _ = display.print_digit(7);
//! for frame in 0..6 {
//!     let _ = display.print_snake(frame);
//! }
//!
//! // The UART pins were never touched
//! let ports = display.release();
//! assert_eq!(ports.reg_b & 0b0000_0011, 0b0000_0011);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Segment animations
pub mod animation;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Character glyphs
pub mod glyph;
/// Hardware interface abstraction
pub mod interface;
/// Port register state and masking
pub mod port;
/// Segment and segment-mask types
pub mod segment;
/// Character and animation lookup tables
pub mod table;
/// Register wiring constants
pub mod wiring;

pub use animation::Animation;
pub use config::{Builder, Config, RangePolicy};
pub use display::Display;
pub use error::{Error, LookupError};
pub use glyph::{Glyph, UNDEFINED_MASK};
pub use interface::{PinError, PinInterface, PortInterface};
pub use port::PortState;
pub use segment::{Segment, SegmentMask};
