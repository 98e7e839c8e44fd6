//! Transport of command and data bytes to the display
//!
//! The CH1115 tells commands and display data apart by the level of the DC
//! line: low for commands, high for data. [`DisplayInterface`] hides that (and
//! chip select handling) behind two functions, so the driver doesn't care how
//! the bytes travel.
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

use crate::error::InterfaceError;

/// A write only channel to the display controller
pub trait DisplayInterface {
    type Error;

    /// send bytes to the command register (DC low)
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// send bytes to the display RAM (DC high)
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// drive all control lines low before the display loses power
    fn lines_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Four wire SPI: SCLK and MOSI (inside `SPI`), DC and CS.
///
/// `SPI` can be a hardware SPI peripheral or the [`BitBangSpi`](crate::spi::BitBangSpi).
/// The CH1115 samples on the rising edge of the clock (SPI mode 0), MSB first.
#[derive(Debug)]
pub struct SpiInterface<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS, SpiE, PinE> SpiInterface<SPI, DC, CS>
where
    SPI: SpiWrite<u8, Error = SpiE>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
{
    /// Create the interface and deselect the display
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Result<Self, InterfaceError<SpiE, PinE>> {
        InterfaceError::pin(cs.set_high())?;
        Ok(SpiInterface { spi, dc, cs })
    }

    /// give back the bus and the pins
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    // CS is only low while the bytes are on the bus
    fn send(&mut self, bytes: &[u8]) -> Result<(), InterfaceError<SpiE, PinE>> {
        InterfaceError::pin(self.cs.set_low())?;
        let result = InterfaceError::spi(self.spi.write(bytes));
        InterfaceError::pin(self.cs.set_high())?;
        result
    }
}

impl<SPI, DC, CS, SpiE, PinE> DisplayInterface for SpiInterface<SPI, DC, CS>
where
    SPI: SpiWrite<u8, Error = SpiE>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
{
    type Error = InterfaceError<SpiE, PinE>;

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        InterfaceError::pin(self.dc.set_low())?;
        self.send(commands)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        InterfaceError::pin(self.dc.set_high())?;
        self.send(data)
    }

    fn lines_low(&mut self) -> Result<(), Self::Error> {
        InterfaceError::pin(self.dc.set_low())?;
        InterfaceError::pin(self.cs.set_low())
    }
}
