//! Error types for the driver
//!
//! This module defines the error returned by table lookups ([`LookupError`])
//! and by display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`LookupError`] - Index outside a lookup table
//! - [`Error`] - Runtime errors during display operations
//! - [`PinError`](crate::interface::PinError) - Low-level GPIO errors from
//!   [`PinInterface`](crate::interface::PinInterface)
//!
//! ## Example
//!
//! ```
//! use seg7_port::{table, LookupError};
//!
//! // Only ASCII is in the table
//! let result = table::lookup_char(200);
//! assert_eq!(result, Err(LookupError::OutOfRange { index: 200, len: 128 }));
//!
//! // Digits stop at 9
//! assert!(table::lookup_digit(10).is_err());
//! ```

use crate::interface::PortInterface;

/// Errors that can occur when looking up a glyph or animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// Index is outside the table
    ///
    /// Valid indices are `0..len`.
    OutOfRange {
        /// Requested index
        index: u32,
        /// Number of entries in the table
        len: u32,
    },
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range (table has {len} entries)")
            }
        }
    }
}

impl core::error::Error for LookupError {}

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<P: PortInterface> {
    /// Interface error (port read or write)
    ///
    /// Wraps the underlying hardware error from the [`PortInterface`] implementation.
    Port(P::Error),
    /// Character, digit or frame index outside its table
    ///
    /// Only returned with [`RangePolicy::Reject`](crate::config::RangePolicy::Reject).
    /// The ports are not written.
    OutOfRange {
        /// Requested index
        index: u32,
        /// Number of entries in the table
        len: u32,
    },
}

impl<P: PortInterface> From<LookupError> for Error<P> {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::OutOfRange { index, len } => Self::OutOfRange { index, len },
        }
    }
}

impl<P: PortInterface> core::fmt::Display for Error<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Port(e) => write!(f, "Port error: {e:?}"),
            Self::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range (table has {len} entries)")
            }
        }
    }
}

impl<P: PortInterface + core::fmt::Debug> core::error::Error for Error<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::PortState;
    use alloc::string::ToString;

    #[test]
    fn test_lookup_error_converts_to_display_error() {
        let err: Error<PortState> = LookupError::OutOfRange { index: 12, len: 10 }.into();
        assert!(matches!(err, Error::OutOfRange { index: 12, len: 10 }));
    }

    #[test]
    fn test_error_messages() {
        let err = LookupError::OutOfRange { index: 6, len: 6 };
        assert_eq!(err.to_string(), "Index 6 out of range (table has 6 entries)");

        let err: Error<PortState> = Error::OutOfRange { index: 128, len: 128 };
        assert_eq!(
            err.to_string(),
            "Index 128 out of range (table has 128 entries)"
        );
    }
}
