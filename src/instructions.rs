//! # Module defining the instruction set of the CH1115
//!
//! All instructions are implemented as enums and most arguments as well.
//! The naming follows the CH1115 data sheet as close as possible.
//!
//! Every instruction is sent with the DC line low. Some of them are a single
//! byte with the argument OR-ed into the low bits (page address, start line,
//! scan direction, ...), others are a "mode set" byte followed by one or more
//! data bytes (contrast, multiplex ratio, scroll setup, ...).
//! [`Instruction::bytes`] returns the complete byte sequence for both kinds.
//!
//! ## Contrast
//! The contrast register takes the full 0..=255 range, 0x80 is the power on
//! default of the controller. More is brighter, and on an OLED also more
//! current and faster aging of the pixels.
//!
//! ## Charge pump, DC-DC and IREF
//! The panel needs a segment voltage well above the 3.3V logic supply. The
//! CH1115 generates it with an internal charge pump (voltage selected with
//! [`PumpVoltage`]) and a DC-DC converter which must be switched on before the
//! display is turned on. The IREF resistor setting trims the segment current.
//! The defaults in [`Config`](crate::Config) match the ER-OLEDM1 module.
//!
//! ## Scrolling and breathing
//! The controller can scroll a horizontal band of pages on its own, without
//! any bus traffic, and it can "breathe" (slowly fade the whole display in and
//! out). Both only change how the RAM is shown, the RAM content stays as it is.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Output voltage of the internal charge pump
pub enum PumpVoltage {
    V6_4 = 0b00,
    /// ER-OLEDM1 default
    V7_4 = 0b01,
    V8_0 = 0b10,
    V9_0 = 0b11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Direction of the horizontal scroll
pub enum ScrollDirection {
    Right = 0x26,
    Left = 0x27,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Number of frames between two scroll steps
pub enum ScrollInterval {
    Frames6 = 0b000,
    Frames32 = 0b001,
    Frames64 = 0b010,
    Frames128 = 0b011,
    Frames3 = 0b100,
    Frames4 = 0b101,
    Frames5 = 0b110,
    Frames2 = 0b111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Scroll mode set (28H - 2BH)
pub enum ScrollMode {
    /// keep scrolling until deactivated
    Continuous = 0x28,
    /// move by a single column per activation
    OneColumn = 0x29,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// The breathing (fade in/out) display effect.
pub enum Breathing {
    Off,
    /// On, with a time interval between 0 and 7 (higher is slower)
    On(u8),
}

impl Breathing {
    /// data byte following the breathing effect mode set
    pub fn byte(self) -> u8 {
        match self {
            Breathing::Off => 0x00,
            Breathing::On(interval) => 0x80 | (interval & 0x07),
        }
    }
}

impl Default for Breathing {
    fn default() -> Self {
        Breathing::On(1)
    }
}

/// CH1115 instruction set, see data sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// turn the display on (true) or off/sleep (false)
    // AFH / AEH
    DisplayOn(bool),

    /// true forces every pixel on, false shows the RAM content
    // A5H / A4H
    AllPixelsOn(bool),

    /// true shows the RAM inverted
    // A7H / A6H
    Invert(bool),

    /// contrast control mode set, followed by the contrast value
    // 81H, value
    Contrast(u8),

    /// page address of the RAM; 0..=7
    // B0H - B7H
    PageAddress(u8),

    /// column address of the RAM, sent as lower and higher nibble
    // 00H - 0FH, 10H - 1FH
    ColumnAddress(u8),

    /// RAM line shown at the top of the display; 0..=63
    // 40H - 7FH
    StartLine(u8),

    /// charge pump output voltage
    // 30H - 33H
    ChargePump(PumpVoltage),

    /// IREF resistor set, followed by the adjust value
    // 82H, value
    IrefResistor(u8),

    /// true remaps segment 0 to the last column (mirrors horizontally)
    // A1H / A0H
    SegmentRemap(bool),

    /// alternative SEG pad hardware configuration
    // A3H / A2H
    SegmentPads(bool),

    /// multiplex ratio mode set, followed by the ratio; 0..=63
    // A8H, value
    MultiplexRatio(u8),

    /// DC-DC control mode set, followed by on/off
    // ADH, 8BH / 8AH
    DcDc(bool),

    /// true scans the COM outputs in reverse (mirrors vertically)
    // C8H / C0H
    ComScanReversed(bool),

    /// display offset mode set, followed by the offset; 0..=63
    // D3H, value
    DisplayOffset(u8),

    /// divide ratio / oscillator frequency mode set, followed by the value
    // D5H, value
    OscillatorFrequency(u8),

    /// discharge / pre-charge period mode set, followed by the value
    // D9H, value
    Precharge(u8),

    /// VCOM deselect level mode set, followed by the level
    // DBH, value
    VcomDeselectLevel(u8),

    /// breathing display effect, followed by on/off and interval
    // 23H, value
    BreathingEffect(Breathing),

    /// additional horizontal scroll setup: start and end column
    // 24H, start, end
    ScrollArea { start_column: u8, end_column: u8 },

    /// horizontal scroll setup: direction, start page, interval, end page
    // 26H / 27H, start page, interval, end page
    ScrollSetup {
        direction: ScrollDirection,
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
    },

    /// scroll mode set
    // 28H - 2BH
    SetScrollMode(ScrollMode),

    /// activate (true) or deactivate (false) scrolling
    // 2FH / 2EH
    Scroll(bool),
}

use Instruction::*;

/// Encoded instruction, at most 4 bytes long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes {
    buf: [u8; 4],
    len: u8,
}

impl Bytes {
    fn one(a: u8) -> Self {
        Bytes { buf: [a, 0, 0, 0], len: 1 }
    }

    fn two(a: u8, b: u8) -> Self {
        Bytes { buf: [a, b, 0, 0], len: 2 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl core::ops::Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Instruction {
    /// Returns the bytes of the instruction as they go over the wire
    pub fn bytes(self) -> Bytes {
        match self {
            DisplayOn(on) => Bytes::one(0b1010_1110 | on as u8),
            AllPixelsOn(on) => Bytes::one(0b1010_0100 | on as u8),
            Invert(on) => Bytes::one(0b1010_0110 | on as u8),
            Contrast(value) => Bytes::two(0b1000_0001, value),
            PageAddress(page) => Bytes::one(0b1011_0000 | (page & 0x07)),
            ColumnAddress(column) => Bytes::two(column & 0x0F, 0b0001_0000 | (column >> 4)),
            StartLine(line) => Bytes::one(0b0100_0000 | (line & 0x3F)),
            ChargePump(voltage) => Bytes::one(0b0011_0000 | voltage as u8),
            IrefResistor(value) => Bytes::two(0b1000_0010, value),
            SegmentRemap(remap) => Bytes::one(0b1010_0000 | remap as u8),
            SegmentPads(alternative) => Bytes::one(0b1010_0010 | alternative as u8),
            MultiplexRatio(ratio) => Bytes::two(0b1010_1000, ratio & 0x3F),
            DcDc(on) => Bytes::two(0b1010_1101, 0b1000_1010 | on as u8),
            ComScanReversed(reversed) => Bytes::one(0b1100_0000 | ((reversed as u8) << 3)),
            DisplayOffset(offset) => Bytes::two(0b1101_0011, offset & 0x3F),
            OscillatorFrequency(value) => Bytes::two(0b1101_0101, value),
            Precharge(value) => Bytes::two(0b1101_1001, value),
            VcomDeselectLevel(level) => Bytes::two(0b1101_1011, level),
            BreathingEffect(effect) => Bytes::two(0b0010_0011, effect.byte()),
            ScrollArea {
                start_column,
                end_column,
            } => Bytes {
                buf: [0b0010_0100, start_column, end_column, 0],
                len: 3,
            },
            ScrollSetup {
                direction,
                start_page,
                interval,
                end_page,
            } => Bytes {
                buf: [
                    direction as u8,
                    start_page & 0x07,
                    interval as u8,
                    end_page & 0x07,
                ],
                len: 4,
            },
            SetScrollMode(mode) => Bytes::one(mode as u8),
            Scroll(active) => Bytes::one(0b0010_1110 | active as u8),
        }
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        Breathing, Instruction, Instruction::*, PumpVoltage, ScrollDirection, ScrollInterval,
        ScrollMode,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn single_byte_instructions() {
        assert_eq!(&*DisplayOn(true).bytes(), &[0xAF]);
        assert_eq!(&*DisplayOn(false).bytes(), &[0xAE]);
        assert_eq!(&*Invert(true).bytes(), &[0xA7]);
        assert_eq!(&*Invert(false).bytes(), &[0xA6]);
        assert_eq!(&*AllPixelsOn(false).bytes(), &[0xA4]);
        assert_eq!(&*PageAddress(7).bytes(), &[0xB7]);
        assert_eq!(&*ComScanReversed(true).bytes(), &[0xC8]);
        assert_eq!(&*ComScanReversed(false).bytes(), &[0xC0]);
        assert_eq!(&*ChargePump(PumpVoltage::V7_4).bytes(), &[0x31]);
        assert_eq!(&*Scroll(true).bytes(), &[0x2F]);
        assert_eq!(&*Scroll(false).bytes(), &[0x2E]);
    }

    #[test]
    fn instructions_with_arguments() {
        assert_eq!(&*Contrast(0x80).bytes(), &[0x81, 0x80]);
        assert_eq!(&*ColumnAddress(0x52).bytes(), &[0x02, 0x15]);
        assert_eq!(&*DcDc(true).bytes(), &[0xAD, 0x8B]);
        assert_eq!(&*MultiplexRatio(0xFF).bytes(), &[0xA8, 0x3F]);
        assert_eq!(&*BreathingEffect(Breathing::default()).bytes(), &[0x23, 0x81]);
        assert_eq!(&*BreathingEffect(Breathing::Off).bytes(), &[0x23, 0x00]);
    }

    #[test]
    fn scroll_setup_is_four_bytes() {
        let setup = ScrollSetup {
            direction: ScrollDirection::Left,
            start_page: 0,
            interval: ScrollInterval::Frames6,
            end_page: 7,
        };
        assert_eq!(&*setup.bytes(), &[0x27, 0x00, 0x00, 0x07]);
        let area = ScrollArea {
            start_column: 0,
            end_column: 127,
        };
        assert_eq!(&*area.bytes(), &[0x24, 0x00, 0x7F]);
    }
}
