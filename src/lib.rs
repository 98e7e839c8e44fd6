//! # Driver and graphics engine for CH1115 based OLED displays
//!
//! The CH1115 drives the ER-OLEDM1 128x64 monochrome panel. Its display RAM is
//! organized in 8 "pages" of 128 bytes, every byte being a vertical strip of 8
//! pixels. This crate keeps a copy of that RAM in memory, draws into it and
//! sends it to the display on request.
//!
//! The crate is split in a few layers:
//!  - [`interface`]: moves command and data bytes over SPI (or the bit bang SPI
//!    in [`spi`]), toggling the DC and CS lines.
//!  - [`instructions`]: the CH1115 command set.
//!  - [`display`]: the [`CH1115`] driver itself, owning the page buffer.
//!  - [`canvas`] and [`text`]: line, shape, bitmap and text rasterizing on top
//!    of a single `draw_pixel` operation.
//!  - [`font`]: the glyph tables used by the text functions.
//!  - [`pins`]: a stand-in for control lines that are not wired.
//!
//! With the "graphics" feature the driver is also an embedded-graphics
//! `DrawTarget`, and the "defmt" feature adds logging.
//!
//! Typical workflow:
//!  - create the driver with `CH1115::new()` and call `begin()`
//!  - `clear_buffer()`, draw with the [`Canvas`] and [`Text`] traits
//!  - `update()` to send the buffer to the display
#![cfg_attr(not(test), no_std)]

extern crate embedded_hal as hal;

pub mod buffer;
pub mod canvas;
pub mod display;
pub mod error;
pub mod font;
pub mod instructions;
pub mod interface;
pub mod pins;
pub mod spi;
pub mod text;

#[cfg(feature = "graphics")]
pub mod graphics;

/// width of the display in pixels
pub const WIDTH: u8 = 128;

/// height of the display in pixels
pub const HEIGHT: u8 = 64;

/// number of 8 pixel high pages in the display RAM
pub const PAGES: u8 = HEIGHT / 8;

/// size of the display RAM (and the page buffer) in bytes
pub const BUFFER_SIZE: usize = WIDTH as usize * PAGES as usize;

pub use buffer::PageBuffer;
pub use canvas::{BitmapMode, Canvas, CanvasState, Color, Rotation};
pub use display::{Config, FrameBuffer, PowerState, ScrollConfig, CH1115};
pub use error::{Error, InterfaceError};
pub use font::{Font, FontId};
pub use interface::{DisplayInterface, SpiInterface};
pub use pins::NoPin;
pub use text::Text;
