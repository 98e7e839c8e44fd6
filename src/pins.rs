//! Stand-in for control lines that are not wired
//!
//! On many modules CS is tied to ground and RST to the reset of the
//! microcontroller. The driver still wants a pin for them, [`NoPin`] takes
//! their place and ignores every level change.
use hal::digital::v2::OutputPin;

/// An `OutputPin` that isn't connected to anything
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPin;

impl OutputPin for NoPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
