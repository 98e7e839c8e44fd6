//! Error types of the driver
//!
//! The CH1115 is write only, so the only errors are the ones the HAL reports
//! while moving bytes and toggling pins. They are handed back as they are, the
//! driver does not retry.

/// Errors of the [`CH1115`](crate::CH1115) driver.
///
/// `CommE` is the error of the [`DisplayInterface`](crate::DisplayInterface),
/// `PinE` the error of the reset pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<CommE, PinE> {
    /// sending commands or data failed
    Interface(CommE),
    /// toggling the reset pin failed
    Pin(PinE),
    /// the display has not been started with `begin()` (or was powered down)
    Uninitialized,
}

impl<CommE, PinE> Error<CommE, PinE> {
    /// map the result of an interface transfer
    pub fn interface<T>(result: Result<T, CommE>) -> Result<T, Self> {
        result.map_err(Error::Interface)
    }

    /// map the result of a reset pin operation
    pub fn pin<T>(result: Result<T, PinE>) -> Result<T, Self> {
        result.map_err(Error::Pin)
    }
}

/// Errors of the [`SpiInterface`](crate::SpiInterface)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
}

impl<SpiE, PinE> InterfaceError<SpiE, PinE> {
    pub fn spi<T>(result: Result<T, SpiE>) -> Result<T, Self> {
        result.map_err(InterfaceError::Spi)
    }

    pub fn pin<T>(result: Result<T, PinE>) -> Result<T, Self> {
        result.map_err(InterfaceError::Pin)
    }
}
