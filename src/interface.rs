//! Hardware interface abstraction
//!
//! This module provides the [`PortInterface`] trait, the single boundary
//! where port register contents reach the hardware, and two implementations:
//!
//! - [`PortState`] itself, a virtual pair of registers with no side effects,
//!   for simulation and tests
//! - [`PinInterface`], eight `embedded-hal` [`OutputPin`]s, one per segment
//!
//! ## Hardware Requirements
//!
//! - 8 GPIO output pins, wired per [`crate::wiring`]
//! - Segments lit when the pin is high (common-cathode display)
//!
//! ## Example
//!
//! ```
//! use seg7_port::{PortInterface, PortState, SegmentMask};
//!
//! let mut ports = PortState::new(0xFF, 0x00);
//! let current = ports.read_ports().unwrap_or_default();
//! let _ = ports.write_ports(current.apply(SegmentMask::BLANK));
//! assert_eq!(ports, PortState::new(0b1111_1100, 0x00));
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

use crate::port::PortState;
use crate::segment::{Segment, SegmentMask};
use crate::wiring::PIN_COUNT;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for access to the two port registers driving the display
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with memory-mapped
/// ports, individual GPIO pins or a simulation.
///
/// ## Implementing
///
/// For pin-level HALs, use the provided [`PinInterface`]. For a port-level
/// HAL, implement this trait on a wrapper that reads and writes the two
/// port output registers.
pub trait PortInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Read the current contents of both registers
    ///
    /// # Errors
    ///
    /// Returns an error if the registers cannot be read.
    fn read_ports(&mut self) -> InterfaceResult<PortState, Self::Error>;

    /// Write both registers
    ///
    /// The implementation must write `state` exactly; it has already been
    /// masked so that pins unrelated to the display keep their values.
    ///
    /// # Errors
    ///
    /// Returns an error if a register or pin write fails.
    fn write_ports(&mut self, state: PortState) -> InterfaceResult<(), Self::Error>;
}

impl PortInterface for PortState {
    type Error = Infallible;

    fn read_ports(&mut self) -> InterfaceResult<PortState, Self::Error> {
        Ok(*self)
    }

    fn write_ports(&mut self, state: PortState) -> InterfaceResult<(), Self::Error> {
        *self = state;
        Ok(())
    }
}

/// Error from a single segment pin
#[derive(Debug)]
pub struct PinError<E> {
    /// Segment whose pin failed
    pub segment: Segment,
    /// Underlying GPIO error
    pub error: E,
}

impl<E: Debug> core::fmt::Display for PinError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Pin error on segment {:?}: {:?}", self.segment, self.error)
    }
}

impl<E: Debug> core::error::Error for PinError<E> {}

/// Port interface over eight individual output pins
///
/// Pins are given in mask bit order: `pins[0]` drives the segment on bit 0
/// (a), `pins[7]` the segment on bit 7 (f). See [`Segment::BIT_ORDER`].
///
/// Only the display pins exist here, so the non-display bits of the two
/// registers are kept in a shadow [`PortState`] and never reach hardware.
///
/// ## Example
///
/// ```
/// use seg7_port::{Config, Display, PinInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let pins = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
/// let mut display = Display::new(PinInterface::new(pins), Config::default());
/// let _ = display.print_char('3');
/// ```
pub struct PinInterface<P> {
    /// Segment pins in mask bit order
    pins: [P; PIN_COUNT],
    /// Last state written
    shadow: PortState,
}

impl<P> PinInterface<P>
where
    P: OutputPin,
{
    /// Create a new PinInterface
    ///
    /// The pins are not driven until the first write.
    pub fn new(pins: [P; PIN_COUNT]) -> Self {
        Self {
            pins,
            shadow: PortState::default(),
        }
    }

    /// Release the pins
    pub fn release(self) -> [P; PIN_COUNT] {
        self.pins
    }
}

impl<P> PortInterface for PinInterface<P>
where
    P: OutputPin,
{
    type Error = PinError<P::Error>;

    fn read_ports(&mut self) -> InterfaceResult<PortState, Self::Error> {
        Ok(self.shadow)
    }

    fn write_ports(&mut self, state: PortState) -> InterfaceResult<(), Self::Error> {
        let mask = state.mask();
        let previous = self.shadow.mask().bits();
        // Pins already set to the new mask
        let mut driven = 0u8;
        for (pin, segment) in self.pins.iter_mut().zip(Segment::BIT_ORDER) {
            let result = if mask.is_lit(segment) {
                pin.set_high()
            } else {
                pin.set_low()
            };
            if let Err(error) = result {
                let shown = (mask.bits() & driven) | (previous & !driven);
                self.shadow = self.shadow.apply(SegmentMask::from_bits(shown));
                return Err(PinError { segment, error });
            }
            driven |= segment.mask().bits();
        }
        self.shadow = state;
        Ok(())
    }
}
