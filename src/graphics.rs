//! embedded-graphics support
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! It implements `DrawTarget` for the [`CH1115`] driver, so everything from the
//! embedded_graphics ecosystem (mono fonts, primitives, images, ...) can be drawn
//! next to the built-in [`Canvas`](crate::Canvas) functions. Both draw into the
//! same buffer and follow the same rotation, `update()` sends the result.
//!
//! `BinaryColor::On` lights a pixel, `BinaryColor::Off` clears it.
//!  <https://docs.rs/embedded-graphics/latest/embedded_graphics/>
use core::convert::TryFrom;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::{
    canvas::{Canvas, Color},
    display::CH1115,
};

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::Foreground,
            BinaryColor::Off => Color::Background,
        }
    }
}

impl<DI, RST> DrawTarget for CH1115<DI, RST> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // draw_pixel drops everything outside of the canvas, which includes
            // coordinates that don't fit in an i16
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.draw_pixel(x, y, color.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let pattern = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.buffer_mut().fill(pattern);
        Ok(())
    }
}

impl<DI, RST> OriginDimensions for CH1115<DI, RST> {
    /// size in the current rotation
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{canvas::Rotation, pins::NoPin, DisplayInterface};
    use embedded_graphics_core::{geometry::Point, prelude::*};

    struct Nothing;

    impl DisplayInterface for Nothing {
        type Error = ();

        fn send_commands(&mut self, _: &[u8]) -> Result<(), ()> {
            Ok(())
        }

        fn send_data(&mut self, _: &[u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn size_follows_rotation() {
        let mut display = CH1115::new(Nothing, NoPin);
        assert_eq!(display.size(), Size::new(128, 64));
        display.set_rotation(Rotation::Rotate90);
        assert_eq!(display.size(), Size::new(64, 128));
    }

    #[test]
    fn pixels_go_through_the_canvas() {
        let mut display = CH1115::new(Nothing, NoPin);
        display.set_rotation(Rotation::Rotate180);
        Pixel(Point::new(0, 0), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(-1, 70_000), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        assert!(display.buffer().pixel(127, 63));
        assert_eq!(display.buffer().bytes().filter(|b| *b != 0).count(), 1);

        display.clear(BinaryColor::On).unwrap();
        assert!(display.buffer().bytes().all(|b| b == 0xFF));
    }
}
