//! Bit banged, write only SPI
//!
//! The CH1115 never answers, so there is no MISO and the whole transfer is a
//! matter of putting a bit on MOSI and pulsing SCLK, MSB first (SPI mode 0).
//! Handy when the SPI peripheral is taken or the pins don't line up with it.
//!
//! Use [`BitBangSpi::new`] when the GPIOs are slow enough on their own (the
//! CH1115 takes up to 10MHz) and [`BitBangSpi::with_delay`] otherwise.
use hal::blocking::delay::DelayUs;
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

/// Write only software SPI over a clock and a data pin
#[derive(Debug)]
pub struct BitBangSpi<CLK, MOSI, DELAY = NoDelay> {
    clk: CLK,
    mosi: MOSI,
    delay: DELAY,
    half_period_us: u8,
}

/// A delay that doesn't wait at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl DelayUs<u8> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u8) {}
}

impl<CLK, MOSI, E> BitBangSpi<CLK, MOSI, NoDelay>
where
    CLK: OutputPin<Error = E>,
    MOSI: OutputPin<Error = E>,
{
    /// Full speed, the clock is as fast as the pins can toggle
    pub fn new(clk: CLK, mosi: MOSI) -> Result<Self, E> {
        BitBangSpi::with_delay(clk, mosi, NoDelay, 0)
    }
}

impl<CLK, MOSI, DELAY, E> BitBangSpi<CLK, MOSI, DELAY>
where
    CLK: OutputPin<Error = E>,
    MOSI: OutputPin<Error = E>,
    DELAY: DelayUs<u8>,
{
    /// Wait `half_period_us` after every clock edge
    pub fn with_delay(mut clk: CLK, mosi: MOSI, delay: DELAY, half_period_us: u8) -> Result<Self, E> {
        // mode 0 idles low
        clk.set_low()?;
        Ok(BitBangSpi {
            clk,
            mosi,
            delay,
            half_period_us,
        })
    }

    /// give back the pins and the delay
    pub fn release(self) -> (CLK, MOSI, DELAY) {
        (self.clk, self.mosi, self.delay)
    }

    #[inline]
    fn clock_out(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.mosi.set_high()?;
            } else {
                self.mosi.set_low()?;
            }
            self.clk.set_high()?;
            self.delay.delay_us(self.half_period_us);
            self.clk.set_low()?;
            self.delay.delay_us(self.half_period_us);
        }
        Ok(())
    }
}

impl<CLK, MOSI, DELAY, E> SpiWrite<u8> for BitBangSpi<CLK, MOSI, DELAY>
where
    CLK: OutputPin<Error = E>,
    MOSI: OutputPin<Error = E>,
    DELAY: DelayUs<u8>,
{
    type Error = E;

    fn write(&mut self, words: &[u8]) -> Result<(), E> {
        words.iter().try_for_each(|byte| self.clock_out(*byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn clocks_out_msb_first() {
        let mut clk_expectations = vec![PinTransaction::set(State::Low)];
        let mut mosi_expectations = Vec::new();
        for bit in (0..8).rev() {
            let state = if 0xA5u8 & (1 << bit) != 0 {
                State::High
            } else {
                State::Low
            };
            mosi_expectations.push(PinTransaction::set(state));
            clk_expectations.push(PinTransaction::set(State::High));
            clk_expectations.push(PinTransaction::set(State::Low));
        }
        let clk = PinMock::new(&clk_expectations);
        let mosi = PinMock::new(&mosi_expectations);

        let mut spi = BitBangSpi::new(clk, mosi).unwrap();
        spi.write(&[0xA5]).unwrap();

        let (mut clk, mut mosi, _) = spi.release();
        clk.done();
        mosi.done();
    }
}
