//! Core display operations

use crate::config::{Config, RangePolicy};
use crate::error::{Error, LookupError};
use crate::glyph::Glyph;
use crate::interface::PortInterface;
use crate::port::PortState;
use crate::segment::SegmentMask;
use crate::table::{ASCII_TABLE_LEN, lookup_char, lookup_digit, lookup_index};

type DisplayResult<P> = core::result::Result<(), Error<P>>;

/// Driver for a single 7-segment digit
///
/// Every `print_*` call looks up a mask and writes it to the ports. Pins not
/// wired to the display keep their values.
///
/// ## Example
///
/// ```
/// use seg7_port::{Config, Display, PortState};
///
/// let mut display = Display::new(PortState::new(0b1000_0000, 0b0000_0011), Config::default());
/// let _ = display.print_char('h');
///
/// let ports = display.release();
/// assert_eq!(ports, PortState::new(0b1000_0000, 0b1101_0111));
/// ```
pub struct Display<P>
where
    P: PortInterface,
{
    /// Hardware interface
    interface: P,
    /// Display configuration
    config: Config,
}

impl<P> Display<P>
where
    P: PortInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is written until the first call that shows a mask.
    pub fn new(interface: P, config: Config) -> Self {
        Self { interface, config }
    }

    /// Show a raw segment mask
    ///
    /// Reads both ports, replaces the display bits and writes them back.
    /// With the `critical-section` feature the read-modify-write runs in a
    /// critical section, so an interrupt touching other pins of the same
    /// ports cannot lose its update. Without the feature nothing is locked:
    /// if an interrupt handler or another task writes the same ports, the
    /// caller must disable interrupts or otherwise serialize around this call.
    pub fn write_mask(&mut self, mask: SegmentMask) -> DisplayResult<P> {
        let interface = &mut self.interface;
        let state = locked(|| -> Result<PortState, P::Error> {
            let state = interface.read_ports()?.apply(mask);
            interface.write_ports(state)?;
            Ok(state)
        })
        .map_err(Error::Port)?;
        log::trace!(
            "mask {:#010b} -> reg_a {:#010b}, reg_b {:#010b}",
            mask.bits(),
            state.reg_a,
            state.reg_b
        );
        Ok(())
    }

    /// Show a glyph, substituting the configured mask for undefined glyphs
    pub fn write_glyph(&mut self, glyph: Glyph) -> DisplayResult<P> {
        if glyph == Glyph::Undefined {
            log::debug!(
                "no glyph, showing placeholder {:#010b}",
                self.config.undefined_glyph.bits()
            );
        }
        self.write_mask(glyph.mask_or(self.config.undefined_glyph))
    }

    /// Show an ASCII character
    ///
    /// Characters without a glyph show the configured undefined mask.
    ///
    /// # Errors
    ///
    /// Non-ASCII characters are out of range; see [`RangePolicy`].
    pub fn print_char(&mut self, ch: char) -> DisplayResult<P> {
        let glyph = u8::try_from(ch)
            .map_err(|_| LookupError::OutOfRange {
                index: ch as u32,
                len: ASCII_TABLE_LEN as u32,
            })
            .and_then(lookup_char);
        self.show(glyph)
    }

    /// Show a decimal digit `0..=9`
    ///
    /// # Errors
    ///
    /// Digits above 9 are out of range; see [`RangePolicy`].
    pub fn print_digit(&mut self, digit: u32) -> DisplayResult<P> {
        self.show(lookup_digit(digit))
    }

    /// Show the glyph at a raw character table index
    ///
    /// Walking `0..128` shows every entry of the table.
    ///
    /// # Errors
    ///
    /// Indices above 127 are out of range; see [`RangePolicy`].
    pub fn print_index(&mut self, index: u8) -> DisplayResult<P> {
        self.show(lookup_index(index))
    }

    /// Show frame `index` of the configured animation
    ///
    /// # Errors
    ///
    /// Indices past the last frame are out of range; see [`RangePolicy`].
    pub fn print_snake(&mut self, index: u8) -> DisplayResult<P> {
        let frame = self.config.animation.frame(index).map(Glyph::Defined);
        self.show(frame)
    }

    /// Turn every segment off
    pub fn clear(&mut self) -> DisplayResult<P> {
        self.write_mask(SegmentMask::BLANK)
    }

    /// Mask currently shown, read back from the ports
    pub fn current_mask(&mut self) -> Result<SegmentMask, Error<P>> {
        let state = self.interface.read_ports().map_err(Error::Port)?;
        Ok(state.mask())
    }

    /// Get the display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the hardware interface
    pub fn interface(&self) -> &P {
        &self.interface
    }

    /// Release the hardware interface
    pub fn release(self) -> P {
        self.interface
    }

    fn show(&mut self, glyph: Result<Glyph, LookupError>) -> DisplayResult<P> {
        match glyph {
            Ok(glyph) => self.write_glyph(glyph),
            Err(err) => match self.config.range_policy {
                RangePolicy::Reject => Err(err.into()),
                RangePolicy::Ignore => {
                    log::warn!("ignoring request: {}", err);
                    Ok(())
                }
            },
        }
    }
}

#[cfg(feature = "critical-section")]
fn locked<R>(f: impl FnOnce() -> R) -> R {
    critical_section::with(|_| f())
}

#[cfg(not(feature = "critical-section"))]
fn locked<R>(f: impl FnOnce() -> R) -> R {
    f()
}
