//! # The CH1115 driver
//!
//! [`CH1115`] owns the display interface, the reset pin and a 1024 byte copy of
//! the display RAM. Drawing (through [`Canvas`] and [`Text`]) only touches that
//! copy; [`CH1115::update`] sends all of it to the display.
//!
//! The controller starts out [`PowerState::Uninitialized`]. `begin()` resets it
//! and runs the power up sequence, after which every command is available.
//! Before that only drawing into the buffer works, everything that talks to
//! the display returns [`Error::Uninitialized`].
//!
//! ```text
//!                begin()              enable(false)
//! Uninitialized -------->   Awake   --------------->  Asleep
//!       ^                   |  ^    <---------------    |
//!       |    power_down()   |  |      enable(true)      |
//!       +-------------------+--+------------------------+
//! ```
use hal::blocking::delay::{DelayMs, DelayUs};
use hal::digital::v2::OutputPin;

use crate::{
    buffer::PageBuffer,
    canvas::{Canvas, CanvasState, Color},
    error::Error,
    instructions::prelude::*,
    interface::DisplayInterface,
    text::Text,
    HEIGHT, PAGES, WIDTH,
};

/// The in-memory copy of the display RAM
pub type FrameBuffer = PageBuffer<{ WIDTH as usize }, { PAGES as usize }>;

/// Power state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// not reset and configured yet, or powered down
    Uninitialized,
    /// display on
    Awake,
    /// display off, RAM content kept
    Asleep,
}

/// Register values written during power up.
///
/// The defaults are the ones of the ER-OLEDM1 module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub contrast: u8,
    pub pump_voltage: PumpVoltage,
    pub iref: u8,
    /// number of active COM lines minus one
    pub multiplex_ratio: u8,
    pub display_offset: u8,
    pub oscillator_frequency: u8,
    pub precharge: u8,
    pub vcom_deselect_level: u8,
    /// mirror horizontally
    pub segment_remap: bool,
    /// mirror vertically, see [`CH1115::flip`]
    pub com_scan_reversed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contrast: 0x80,
            pump_voltage: PumpVoltage::V7_4,
            iref: 0x00,
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            oscillator_frequency: 0xA0,
            precharge: 0x22,
            vcom_deselect_level: 0x40,
            segment_remap: false,
            com_scan_reversed: false,
        }
    }
}

impl Config {
    pub fn with_contrast(contrast: u8) -> Self {
        Config {
            contrast,
            ..Config::default()
        }
    }
}

/// Hardware scrolling setup, see [`CH1115::scroll_setup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub direction: ScrollDirection,
    pub interval: ScrollInterval,
    pub mode: ScrollMode,
    /// first page of the scrolled band; 0..=7
    pub start_page: u8,
    /// last page of the scrolled band; 0..=7
    pub end_page: u8,
    pub start_column: u8,
    pub end_column: u8,
}

impl Default for ScrollConfig {
    /// the whole display, to the right, continuously, every 6 frames
    fn default() -> Self {
        ScrollConfig {
            direction: ScrollDirection::Right,
            interval: ScrollInterval::Frames6,
            mode: ScrollMode::Continuous,
            start_page: 0,
            end_page: PAGES - 1,
            start_column: 0,
            end_column: WIDTH - 1,
        }
    }
}

/// Driver for a CH1115 controlled 128x64 OLED
#[derive(Debug)]
pub struct CH1115<DI, RST> {
    interface: DI,
    rst: RST,
    state: PowerState,
    contrast: u8,
    inverted: bool,
    flipped: bool,
    canvas: CanvasState,
    buffer: FrameBuffer,
}

impl<DI, RST, PinE> CH1115<DI, RST>
where
    DI: DisplayInterface,
    RST: OutputPin<Error = PinE>,
{
    /// Create the driver. Nothing is sent until [`begin`](CH1115::begin).
    pub fn new(interface: DI, rst: RST) -> Self {
        CH1115 {
            interface,
            rst,
            state: PowerState::Uninitialized,
            contrast: Config::default().contrast,
            inverted: false,
            flipped: false,
            canvas: CanvasState::new(WIDTH.into(), HEIGHT.into()),
            buffer: FrameBuffer::new(),
        }
    }

    /// Reset and power up the display with the default configuration and the given contrast.
    pub fn begin<D>(&mut self, contrast: u8, delay: &mut D) -> Result<(), Error<DI::Error, PinE>>
    where
        D: DelayMs<u8>,
    {
        self.begin_with_config(Config::with_contrast(contrast), delay)
    }

    /// Reset and power up the display.
    ///
    /// Can be called again at any time to start over, the buffer is kept.
    pub fn begin_with_config<D>(
        &mut self,
        config: Config,
        delay: &mut D,
    ) -> Result<(), Error<DI::Error, PinE>>
    where
        D: DelayMs<u8>,
    {
        self.reset(delay)?;
        self.send(&[
            DisplayOn(false),
            ColumnAddress(0),
            PageAddress(0),
            StartLine(0),
            Contrast(config.contrast),
            IrefResistor(config.iref),
            ChargePump(config.pump_voltage),
            DcDc(true),
            SegmentRemap(config.segment_remap),
            SegmentPads(false),
            MultiplexRatio(config.multiplex_ratio),
            ComScanReversed(config.com_scan_reversed),
            DisplayOffset(config.display_offset),
            OscillatorFrequency(config.oscillator_frequency),
            Precharge(config.precharge),
            VcomDeselectLevel(config.vcom_deselect_level),
            AllPixelsOn(false),
            Invert(false),
            DisplayOn(true),
        ])?;
        delay.delay_ms(100);

        self.state = PowerState::Awake;
        self.contrast = config.contrast;
        self.inverted = false;
        self.flipped = config.com_scan_reversed;
        #[cfg(feature = "defmt")]
        defmt::info!("CH1115 powered up, contrast {=u8}", config.contrast);
        Ok(())
    }

    fn reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), Error<DI::Error, PinE>> {
        Error::pin(self.rst.set_high())?;
        delay.delay_ms(10);
        Error::pin(self.rst.set_low())?;
        delay.delay_ms(100);
        Error::pin(self.rst.set_high())
    }

    fn ensure_initialized(&self) -> Result<(), Error<DI::Error, PinE>> {
        if self.state == PowerState::Uninitialized {
            Err(Error::Uninitialized)
        } else {
            Ok(())
        }
    }

    // no state check, begin() uses this before the display is up
    fn send(&mut self, instructions: &[Instruction]) -> Result<(), Error<DI::Error, PinE>> {
        for instruction in instructions {
            Error::interface(self.interface.send_commands(&instruction.bytes()))?;
        }
        Ok(())
    }

    /// Send a single instruction to the controller
    pub fn command(&mut self, instruction: Instruction) -> Result<(), Error<DI::Error, PinE>> {
        self.ensure_initialized()?;
        self.send(&[instruction])
    }

    /// Send the whole buffer to the display, page by page.
    pub fn update(&mut self) -> Result<(), Error<DI::Error, PinE>> {
        self.ensure_initialized()?;
        for page in 0..PAGES {
            self.send(&[PageAddress(page), ColumnAddress(0)])?;
            let data = &self.buffer.pages()[page as usize];
            Error::interface(self.interface.send_data(data))?;
        }
        Ok(())
    }

    /// Clear the buffer. The display keeps showing the old content until `update()`.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Turn the display on (`true`) or put it to sleep (`false`)
    pub fn enable(&mut self, on: bool) -> Result<(), Error<DI::Error, PinE>> {
        self.command(DisplayOn(on))?;
        self.state = if on {
            PowerState::Awake
        } else {
            PowerState::Asleep
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("CH1115 {}", self.state);
        Ok(())
    }

    /// Show the display inverted
    pub fn invert(&mut self, on: bool) -> Result<(), Error<DI::Error, PinE>> {
        self.command(Invert(on))?;
        self.inverted = on;
        Ok(())
    }

    /// Mirror the display vertically by reversing the COM scan direction
    pub fn flip(&mut self, on: bool) -> Result<(), Error<DI::Error, PinE>> {
        self.command(ComScanReversed(on))?;
        self.flipped = on;
        Ok(())
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::Error, PinE>> {
        self.command(Contrast(contrast))?;
        self.contrast = contrast;
        Ok(())
    }

    /// Light every pixel regardless of the RAM content
    pub fn all_pixels_on(&mut self, on: bool) -> Result<(), Error<DI::Error, PinE>> {
        self.command(AllPixelsOn(on))
    }

    /// Configure hardware scrolling. Start it with [`scroll`](CH1115::scroll).
    ///
    /// Pages past the last one are clamped to page 7, columns to column 127.
    pub fn scroll_setup(&mut self, config: ScrollConfig) -> Result<(), Error<DI::Error, PinE>> {
        self.ensure_initialized()?;
        self.send(&[
            ScrollArea {
                start_column: config.start_column.min(WIDTH - 1),
                end_column: config.end_column.min(WIDTH - 1),
            },
            ScrollSetup {
                direction: config.direction,
                start_page: config.start_page.min(PAGES - 1),
                interval: config.interval,
                end_page: config.end_page.min(PAGES - 1),
            },
            SetScrollMode(config.mode),
        ])
    }

    /// Start (`true`) or stop (`false`) hardware scrolling
    pub fn scroll(&mut self, on: bool) -> Result<(), Error<DI::Error, PinE>> {
        self.command(Scroll(on))
    }

    /// Breathing effect, the whole display slowly fades in and out
    pub fn fade_effect(&mut self, effect: Breathing) -> Result<(), Error<DI::Error, PinE>> {
        self.command(BreathingEffect(effect))
    }

    /// true whenever the display is not on: before `begin()`, after
    /// `enable(false)` and after `power_down()`
    pub fn is_sleeping(&self) -> bool {
        self.state != PowerState::Awake
    }

    pub fn power_state(&self) -> PowerState {
        self.state
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Fill the display RAM with `pattern`, bypassing the buffer.
    ///
    /// Waits `delay_us` after every byte, which makes a visible wipe effect.
    pub fn fill_screen<D>(
        &mut self,
        pattern: u8,
        delay_us: u8,
        delay: &mut D,
    ) -> Result<(), Error<DI::Error, PinE>>
    where
        D: DelayUs<u8>,
    {
        for page in 0..PAGES {
            self.fill_page(page, pattern, delay_us, delay)?;
        }
        Ok(())
    }

    /// Fill one page of the display RAM with `pattern`, bypassing the buffer.
    pub fn fill_page<D>(
        &mut self,
        page: u8,
        pattern: u8,
        delay_us: u8,
        delay: &mut D,
    ) -> Result<(), Error<DI::Error, PinE>>
    where
        D: DelayUs<u8>,
    {
        self.ensure_initialized()?;
        if page >= PAGES {
            return Ok(());
        }
        self.send(&[PageAddress(page), ColumnAddress(0)])?;
        for _ in 0..WIDTH {
            Error::interface(self.interface.send_data(&[pattern]))?;
            delay.delay_us(delay_us);
        }
        Ok(())
    }

    /// Write a bitmap straight into the display RAM, bypassing the buffer.
    ///
    /// `data` is packed like the display RAM (see [`BitmapMode::Vertical`](crate::BitmapMode)),
    /// `y` and `h` are rounded to whole pages. Everything right of the display
    /// or below it is cut off.
    pub fn draw_bitmap_direct(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        data: &[u8],
    ) -> Result<(), Error<DI::Error, PinE>> {
        self.ensure_initialized()?;
        if x >= WIDTH {
            return Ok(());
        }
        let w = usize::from(w);
        let visible = w.min(usize::from(WIDTH - x));
        for band in 0..(usize::from(h) + 7) / 8 {
            let page = usize::from(y / 8) + band;
            if page >= usize::from(PAGES) {
                break;
            }
            let start = band * w;
            let row = match data.get(start..(start + visible).min(data.len())) {
                Some(row) if !row.is_empty() => row,
                _ => break,
            };
            self.send(&[ColumnAddress(x), PageAddress(page as u8)])?;
            Error::interface(self.interface.send_data(row))?;
        }
        Ok(())
    }

    /// Switch the display off and pull all control lines low.
    ///
    /// Call `begin()` to use the display again.
    pub fn power_down(&mut self) -> Result<(), Error<DI::Error, PinE>> {
        if self.state != PowerState::Uninitialized {
            self.send(&[DisplayOn(false)])?;
        }
        Error::interface(self.interface.lines_low())?;
        Error::pin(self.rst.set_low())?;
        self.state = PowerState::Uninitialized;
        #[cfg(feature = "defmt")]
        defmt::info!("CH1115 powered down");
        Ok(())
    }
}

impl<DI, RST> CH1115<DI, RST> {
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// give back the interface and the reset pin
    pub fn release(self) -> (DI, RST) {
        (self.interface, self.rst)
    }
}

impl<DI, RST> Canvas for CH1115<DI, RST> {
    fn canvas_state(&self) -> &CanvasState {
        &self.canvas
    }

    fn canvas_state_mut(&mut self) -> &mut CanvasState {
        &mut self.canvas
    }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        if let Some((x, y)) = self.canvas.to_physical(x, y) {
            self.buffer.set_pixel(x.into(), y.into(), color);
        }
    }
}

/// Formatted text output at the cursor, e.g. `write!(display, "{:.2}", 98.5)`
impl<DI, RST> core::fmt::Write for CH1115<DI, RST> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        Text::print(self, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};

    /// records what would have gone over the bus
    #[derive(Debug, Default)]
    struct Recorder {
        sent: Vec<(bool, Vec<u8>)>,
        lines_low: bool,
    }

    impl Recorder {
        fn commands(&self) -> Vec<u8> {
            self.sent
                .iter()
                .filter(|(data, _)| !data)
                .flat_map(|(_, bytes)| bytes.iter().copied())
                .collect()
        }
    }

    impl DisplayInterface for Recorder {
        type Error = ();

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), ()> {
            self.sent.push((false, commands.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), ()> {
            self.sent.push((true, data.to_vec()));
            Ok(())
        }

        fn lines_low(&mut self) -> Result<(), ()> {
            self.lines_low = true;
            Ok(())
        }
    }

    fn reset_pin() -> PinMock {
        PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ])
    }

    fn started() -> CH1115<Recorder, PinMock> {
        let mut display = CH1115::new(Recorder::default(), reset_pin());
        display.begin(0x80, &mut MockNoop::new()).unwrap();
        display.interface.sent.clear();
        display
    }

    #[test]
    fn begin_sends_power_up_sequence() {
        let mut display = CH1115::new(Recorder::default(), reset_pin());
        assert_eq!(display.power_state(), PowerState::Uninitialized);
        display.begin(0x40, &mut MockNoop::new()).unwrap();
        assert_eq!(display.power_state(), PowerState::Awake);
        assert_eq!(display.contrast(), 0x40);

        let commands = display.interface.commands();
        assert_eq!(&commands[..3], &[0xAE, 0x00, 0x10]);
        assert_eq!(&commands[commands.len() - 3..], &[0xA4, 0xA6, 0xAF]);
        assert!(commands.windows(2).any(|w| w == [0x81, 0x40]));
        assert!(commands.windows(2).any(|w| w == [0xAD, 0x8B]));

        let (_, mut rst) = display.release();
        rst.done();
    }

    #[test]
    fn commands_need_begin() {
        let mut display = CH1115::new(Recorder::default(), PinMock::new(&[]));
        assert_eq!(display.update(), Err(Error::Uninitialized));
        assert_eq!(display.enable(true), Err(Error::Uninitialized));
        assert_eq!(display.scroll(true), Err(Error::Uninitialized));
        assert!(display.interface.sent.is_empty());

        // drawing works without a display
        display.fill_rect(0, 0, 8, 8, Color::Foreground);
        assert_eq!(display.buffer().page(0).map(|p| p[0]), Some(0xFF));
    }

    #[test]
    fn update_sends_every_page() {
        let mut display = started();
        display.draw_pixel(127, 63, Color::Foreground);
        display.update().unwrap();

        let sent = &display.interface.sent;
        assert_eq!(sent.len(), 8 * 3);
        for (page, chunk) in sent.chunks(3).enumerate() {
            assert_eq!(chunk[0], (false, vec![0xB0 | page as u8]));
            assert_eq!(chunk[1], (false, vec![0x00, 0x10]));
            assert!(chunk[2].0);
            assert_eq!(chunk[2].1.len(), 128);
        }
        assert_eq!(sent[23].1[127], 0x80);
    }

    #[test]
    fn sleep_and_wake() {
        let mut display = started();
        display.enable(false).unwrap();
        assert!(display.is_sleeping());
        display.enable(true).unwrap();
        assert!(!display.is_sleeping());
        assert_eq!(display.interface.commands(), vec![0xAE, 0xAF]);
    }

    #[test]
    fn settings() {
        let mut display = started();
        display.invert(true).unwrap();
        display.flip(true).unwrap();
        display.set_contrast(0x10).unwrap();
        display.fade_effect(Breathing::default()).unwrap();
        assert!(display.is_inverted() && display.is_flipped());
        assert_eq!(display.contrast(), 0x10);
        assert_eq!(
            display.interface.commands(),
            vec![0xA7, 0xC8, 0x81, 0x10, 0x23, 0x81]
        );
    }

    #[test]
    fn scrolling() {
        let mut display = started();
        display
            .scroll_setup(ScrollConfig {
                direction: ScrollDirection::Left,
                ..ScrollConfig::default()
            })
            .unwrap();
        display.scroll(true).unwrap();
        assert_eq!(
            display.interface.commands(),
            vec![0x24, 0x00, 0x7F, 0x27, 0x00, 0x00, 0x07, 0x28, 0x2F]
        );
    }

    #[test]
    fn fill_screen_bypasses_the_buffer() {
        let mut display = started();
        display.fill_screen(0xAA, 0, &mut MockNoop::new()).unwrap();
        let data: Vec<_> = display.interface.sent.iter().filter(|(d, _)| *d).collect();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|(_, bytes)| bytes == &vec![0xAA]));
        assert!(display.buffer().bytes().all(|b| b == 0));
    }

    #[test]
    fn fill_page_past_the_last_page_sends_nothing() {
        let mut display = started();
        display.fill_page(8, 0xFF, 0, &mut MockNoop::new()).unwrap();
        display.fill_page(u8::MAX, 0xFF, 0, &mut MockNoop::new()).unwrap();
        assert!(display.interface.sent.is_empty());

        display.fill_page(7, 0x0F, 0, &mut MockNoop::new()).unwrap();
        assert_eq!(display.interface.sent[0], (false, vec![0xB7]));
        assert_eq!(display.interface.sent.len(), 2 + 128);
    }

    #[test]
    fn scroll_band_is_clamped_to_the_display() {
        let mut display = started();
        display
            .scroll_setup(ScrollConfig {
                start_page: 9,
                end_page: 12,
                end_column: 200,
                ..ScrollConfig::default()
            })
            .unwrap();
        assert_eq!(
            display.interface.commands(),
            vec![0x24, 0x00, 0x7F, 0x26, 0x07, 0x00, 0x07, 0x28]
        );
    }

    #[test]
    fn direct_bitmap_is_clipped() {
        let mut display = started();
        let data = [0xFFu8; 32];
        // 16 x 16 at the right edge: only 8 columns fit
        display.draw_bitmap_direct(120, 48, 16, 16, &data).unwrap();
        let sent = &display.interface.sent;
        assert_eq!(sent.len(), 6);
        assert_eq!(sent[0].1, vec![0x08, 0x17]);
        assert_eq!(sent[1].1, vec![0xB6]);
        assert_eq!(sent[2].1.len(), 8);
        assert_eq!(sent[4].1, vec![0xB7]);

        // past the last page nothing is sent
        display.interface.sent.clear();
        display.draw_bitmap_direct(0, 64, 16, 16, &data).unwrap();
        assert!(display.interface.sent.is_empty());
    }

    #[test]
    fn power_down_and_restart() {
        let rst = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);
        let mut display = CH1115::new(Recorder::default(), rst);
        assert!(display.is_sleeping());
        display.begin(0x80, &mut MockNoop::new()).unwrap();
        assert!(!display.is_sleeping());
        display.interface.sent.clear();

        display.power_down().unwrap();
        assert_eq!(display.power_state(), PowerState::Uninitialized);
        assert!(display.is_sleeping());
        assert_eq!(display.interface.commands(), vec![0xAE]);
        assert!(display.interface.lines_low);
        assert_eq!(display.update(), Err(Error::Uninitialized));

        let (_, mut rst) = display.release();
        rst.done();
    }

    #[test]
    fn formatted_text() {
        let mut display = started();
        write!(display, "{:.2}", 98.5).unwrap();
        assert_eq!(display.cursor(), (5 * 6, 0));
        assert!(display.buffer().bytes().any(|b| b != 0));
    }
}
