//! Renders the screen of an FM radio (station, signal, volume, climate) and
//! prints the result to the terminal.
//!
//! The display is driven over the bit banged SPI with pins that lead nowhere,
//! so this runs on any host: `cargo run --example dashboard`.
use core::fmt::Write;

use ch1115::{
    spi::BitBangSpi, BitmapMode, Canvas, Color, FontId, NoPin, SpiInterface, Text, CH1115,
};
use embedded_hal_mock::delay::MockNoop;

/// 16x16 antenna mast, one row per two bytes
const RADIO_MAST: [u8; 32] = [
    0x00, 0x00, 0x20, 0x04, 0x48, 0x12, 0x50, 0x0A, 0x53, 0xCA, 0x50, 0x0A, 0x48, 0x12, 0x21,
    0x84, 0x01, 0x80, 0x01, 0x80, 0x02, 0x40, 0x02, 0x40, 0x04, 0x20, 0x04, 0x20, 0x08, 0x10,
    0x00, 0x00,
];

/// 16x8 signal bars
const SIGNAL: [u8; 16] = [
    0x00, 0x03, 0x00, 0x03, 0x00, 0x1B, 0x00, 0x1B, 0x00, 0xDB, 0x00, 0xDB, 0x06, 0xDB, 0x06,
    0xDB,
];

/// 16x16 speaker
const VOLUME: [u8; 32] = [
    0x00, 0x00, 0x01, 0x00, 0x03, 0x08, 0x07, 0x04, 0x0F, 0x12, 0x7F, 0x0A, 0x7F, 0x4A, 0x7F,
    0x4A, 0x7F, 0x4A, 0x7F, 0x0A, 0x0F, 0x12, 0x07, 0x04, 0x03, 0x08, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

/// 16x16 thermometer
const TEMPERATURE: [u8; 32] = [
    0x03, 0xC0, 0x04, 0x20, 0x04, 0x20, 0x05, 0xA0, 0x05, 0xA0, 0x05, 0xA0, 0x05, 0xA0, 0x05,
    0xA0, 0x05, 0xA0, 0x0B, 0xD0, 0x17, 0xE8, 0x17, 0xE8, 0x17, 0xE8, 0x0B, 0xD0, 0x04, 0x20,
    0x03, 0xC0,
];

struct Reading {
    frequency: f32,
    signal: u8,
    volume: u8,
    temperature: f32,
    humidity: f32,
}

/// maps `value` from one range onto another, like the bar graphs need it
fn scale(value: u8, from: (u8, u8), to: (i16, i16)) -> i16 {
    let value = i16::from(value.max(from.0).min(from.1));
    let (from_low, from_high) = (i16::from(from.0), i16::from(from.1));
    to.0 + (value - from_low) * (to.1 - to.0) / (from_high - from_low)
}

fn render<D>(display: &mut D, reading: &Reading) -> core::fmt::Result
where
    D: Canvas + Write,
{
    display.fill_screen(Color::Background);
    display.set_bitmap_mode(BitmapMode::Horizontal);

    // station and signal
    display.draw_bitmap(0, 0, &RADIO_MAST, 16, 16, Color::Background, Color::Foreground);
    display.draw_bitmap(1, 17, &SIGNAL, 16, 8, Color::Foreground, Color::Background);
    let signal = scale(reading.signal, (0, 20), (5, 36));
    display.draw_round_rect(40, 17, 80, 10, 5, Color::Foreground);
    display.fill_round_rect(40, 17, signal * 2, 10, 5, Color::Foreground);

    display.set_cursor(22, 0);
    display.set_text_size(2);
    display.set_font(FontId::Homespun);
    write!(display, "{:.2}", reading.frequency)?;
    display.set_text_size(1);
    display.set_font(FontId::Tiny);
    display.set_cursor(110, 8);
    display.print(" MHz");
    display.set_cursor(20, 20);
    write!(display, "{}", signal)?;

    // volume
    let volume = scale(reading.volume, (0, 100), (5, 75));
    display.draw_bitmap(1, 30, &VOLUME, 16, 16, Color::Foreground, Color::Background);
    display.draw_round_rect(40, 32, 80, 10, 5, Color::Foreground);
    display.fill_round_rect(40, 32, volume, 10, 5, Color::Foreground);
    display.set_cursor(20, 36);
    write!(display, "{}", volume)?;

    // climate
    display.draw_bitmap(0, 48, &TEMPERATURE, 16, 16, Color::Background, Color::Foreground);
    display.set_font(FontId::Default);
    display.set_cursor(20, 52);
    write!(
        display,
        "T{:.1}C H{:.0}%",
        reading.temperature, reading.humidity
    )
}

fn main() {
    let spi = BitBangSpi::new(NoPin, NoPin).unwrap();
    let interface = SpiInterface::new(spi, NoPin, NoPin).unwrap();
    let mut display = CH1115::new(interface, NoPin);
    display.begin(0x80, &mut MockNoop::new()).unwrap();

    let reading = Reading {
        frequency: 98.4,
        signal: 14,
        volume: 60,
        temperature: 21.37,
        humidity: 48.0,
    };
    render(&mut display, &reading).unwrap();
    display.update().unwrap();

    for y in 0..64 {
        let row: String = (0..128)
            .map(|x| if display.buffer().pixel(x, y) { '#' } else { '.' })
            .collect();
        println!("{}", row);
    }
}
