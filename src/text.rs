//! Text rendering
//!
//! [`Text`] adds a text cursor on top of any [`Canvas`]: characters are drawn
//! at the cursor, which then moves to the right and wraps at the edge of the
//! canvas. The settings (colors, size, font, wrapping) live in the
//! [`CanvasState`](crate::CanvasState) of the canvas.
use crate::canvas::{Canvas, Color};
use crate::font::FontId;

/// radius of the decimal point drawn by the digit fonts
fn dot_radius(font: FontId) -> i16 {
    match font {
        FontId::BigNum => 3,
        _ => 2,
    }
}

/// Text output on a [`Canvas`]. Implemented for every canvas.
pub trait Text: Canvas {
    fn set_cursor(&mut self, x: i16, y: i16) {
        let state = self.canvas_state_mut();
        state.cursor_x = x;
        state.cursor_y = y;
    }

    fn cursor(&self) -> (i16, i16) {
        let state = self.canvas_state();
        (state.cursor_x, state.cursor_y)
    }

    /// Text color with a transparent background
    fn set_text_color(&mut self, color: Color) {
        self.set_text_colors(color, color);
    }

    /// Text and background color. If both are equal the background is not drawn.
    fn set_text_colors(&mut self, color: Color, background: Color) {
        let state = self.canvas_state_mut();
        state.text_color = color;
        state.text_background = background;
    }

    /// Scale factor of the 8 pixel fonts, 0 is treated as 1
    fn set_text_size(&mut self, size: u8) {
        self.canvas_state_mut().text_size = size.max(1);
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.canvas_state_mut().wrap = wrap;
    }

    fn set_font(&mut self, font: FontId) {
        self.canvas_state_mut().font = font;
    }

    fn font(&self) -> FontId {
        self.canvas_state().font
    }

    /// Draw a character at the cursor and advance the cursor.
    ///
    /// `'\n'` moves the cursor to the start of the next line, `'\r'` is
    /// ignored. With wrapping enabled a character that doesn't fit on the
    /// current line is put on the next one.
    fn write_char(&mut self, c: char) {
        let state = self.canvas_state();
        let id = state.font;
        let font = id.font();
        let (color, background) = (state.text_color, state.text_background);
        let (width, wrap) = (state.width(), state.wrap);
        let text_size = state.text_size;
        let size = i16::from(text_size);
        let (advance, line_height) = if id.is_numeric() {
            (i16::from(font.width()), i16::from(font.height()))
        } else {
            (
                size * (i16::from(font.width()) + 1),
                size * i16::from(font.height()),
            )
        };

        let (mut x, mut y) = self.cursor();
        match c {
            '\n' => {
                x = 0;
                y = y.saturating_add(line_height);
            }
            '\r' => {}
            _ => {
                if wrap && x.saturating_add(advance) > width {
                    x = 0;
                    y = y.saturating_add(line_height);
                }
                if !id.is_numeric() {
                    self.draw_char(x, y, c, color, background, text_size);
                    x = x.saturating_add(advance);
                } else if c == '.' {
                    let half = advance / 2;
                    let (cx, cy) = (x.saturating_add(half), y.saturating_add(line_height - 7));
                    self.fill_circle(cx, cy, dot_radius(id), color);
                    x = x.saturating_add(half);
                } else {
                    if c != ' ' {
                        self.draw_char_num_font(x, y, c, color, background);
                    }
                    x = x.saturating_add(advance);
                }
            }
        }
        self.set_cursor(x, y);
    }

    fn print(&mut self, text: &str) {
        for c in text.chars() {
            self.write_char(c);
        }
    }

    /// Draw a character of the current font at (x, y), scaled by `size`.
    ///
    /// The character is followed by a one pixel wide gap column. Background
    /// pixels are only drawn if `background` differs from `color`.
    fn draw_char(&mut self, x: i16, y: i16, c: char, color: Color, background: Color, size: u8) {
        let font = self.font().font();
        let size = i16::from(size.max(1));
        let (w, h) = (i16::from(font.width()), i16::from(font.height()));
        let (x32, y32) = (i32::from(x), i32::from(y));
        if x >= self.width()
            || y >= self.height()
            || x32 + i32::from((w + 1) * size) - 1 < 0
            || y32 + i32::from(h * size) - 1 < 0
        {
            return;
        }

        let glyph = font.glyph(c);
        for i in 0..=w {
            for j in 0..h {
                let on = i < w && glyph.pixel(i as u8, j as u8);
                let paint = if on {
                    color
                } else if background != color {
                    background
                } else {
                    continue;
                };
                if size == 1 {
                    self.draw_pixel(x.saturating_add(i), y.saturating_add(j), paint);
                } else {
                    self.fill_rect(
                        x.saturating_add(i * size),
                        y.saturating_add(j * size),
                        size,
                        size,
                        paint,
                    );
                }
            }
        }
    }

    /// Draw a character of the current digit font at (x, y).
    ///
    /// There is no scaling and no gap, the background is always drawn.
    fn draw_char_num_font(&mut self, x: i16, y: i16, c: char, color: Color, background: Color) {
        let glyph = self.font().font().glyph(c);
        for i in 0..glyph.width() {
            for j in 0..glyph.height() {
                let paint = if glyph.pixel(i, j) { color } else { background };
                self.draw_pixel(
                    x.saturating_add(i16::from(i)),
                    y.saturating_add(i16::from(j)),
                    paint,
                );
            }
        }
    }

    /// Draw a string with the current digit font, starting at (x, y).
    ///
    /// Wraps at the right edge, and restarts at the top left corner once the
    /// bottom is reached. Does nothing if the current font is not a digit font.
    fn draw_text_num_font(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        color: Color,
        background: Color,
    ) {
        let id = self.font();
        if !id.is_numeric() {
            return;
        }
        let font = id.font();
        let (w, h) = (i16::from(font.width()), i16::from(font.height()));
        let (mut x, mut y) = (x, y);
        for c in text.chars() {
            if x > self.width() - w {
                x = 0;
                y = y.saturating_add(h);
                if y > self.height() - h {
                    y = 0;
                }
            }
            self.draw_char_num_font(x, y, c, color, background);
            x = x.saturating_add(w);
        }
    }
}

impl<T: Canvas + ?Sized> Text for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::TestCanvas;
    use crate::canvas::Rotation;

    #[test]
    fn text_size_zero_is_one() {
        let mut canvas = TestCanvas::new();
        canvas.set_text_size(0);
        canvas.write_char('A');
        assert_eq!(canvas.cursor(), (6, 0));
    }

    #[test]
    fn wraps_before_drawing() {
        let mut canvas = TestCanvas::new();
        canvas.set_cursor(120, 0);
        canvas.write_char('A');
        assert_eq!(canvas.cursor(), (126, 0));
        canvas.write_char('B');
        assert_eq!(canvas.cursor(), (6, 8));
        // 'B' has its left column fully set from row 0 to 6
        assert!(canvas.buffer.pixel(0, 8));
        assert!(!canvas.buffer.pixel(126, 0));
    }

    #[test]
    fn no_wrap_keeps_going() {
        let mut canvas = TestCanvas::new();
        canvas.set_text_wrap(false);
        canvas.set_cursor(120, 0);
        canvas.print("ABC");
        assert_eq!(canvas.cursor(), (138, 0));
    }

    #[test]
    fn newline_and_carriage_return() {
        let mut canvas = TestCanvas::new();
        canvas.set_text_size(2);
        canvas.print("AB\r\nC");
        assert_eq!(canvas.cursor(), (12, 16));
    }

    #[test]
    fn transparent_background() {
        let mut canvas = TestCanvas::new();
        canvas.fill_screen(Color::Foreground);
        canvas.set_text_color(Color::Background);
        canvas.print(" ");
        assert_eq!(canvas.count(), 128 * 64);

        canvas.set_text_colors(Color::Background, Color::Foreground);
        canvas.set_cursor(0, 0);
        canvas.print("!");
        assert!(!canvas.buffer.pixel(2, 0));
        assert!(canvas.buffer.pixel(2, 5));
    }

    #[test]
    fn opaque_background_covers_the_gap() {
        let mut canvas = TestCanvas::new();
        canvas.fill_screen(Color::Foreground);
        canvas.draw_char(0, 0, ' ', Color::Foreground, Color::Background, 1);
        assert_eq!(canvas.count(), 128 * 64 - 6 * 8);
    }

    #[test]
    fn scaled_glyph() {
        let mut a = TestCanvas::new();
        let mut b = TestCanvas::new();
        a.draw_char(10, 10, '!', Color::Foreground, Color::Foreground, 3);
        b.draw_char(10, 10, '!', Color::Foreground, Color::Foreground, 1);
        assert_eq!(a.count(), b.count() * 9);
    }

    #[test]
    fn glyph_outside_of_canvas_is_skipped() {
        let mut canvas = TestCanvas::new();
        canvas.draw_char(-6, 0, 'A', Color::Foreground, Color::Background, 1);
        canvas.draw_char(0, 64, 'A', Color::Foreground, Color::Background, 1);
        canvas.draw_char(i16::MAX, i16::MAX, 'A', Color::Foreground, Color::Background, 200);
        assert_eq!(canvas.count(), 0);
    }

    #[test]
    fn unknown_characters_render_a_block() {
        let mut canvas = TestCanvas::new();
        canvas.set_font(FontId::Thick);
        canvas.print("a");
        assert_eq!(canvas.count(), 7 * 8);
    }

    #[test]
    fn text_follows_rotation() {
        let mut canvas = TestCanvas::new();
        canvas.set_rotation(Rotation::Rotate90);
        canvas.set_cursor(60, 0);
        canvas.write_char('A');
        // 60 + 6 > 64: wrapped to the next line
        assert_eq!(canvas.cursor(), (6, 8));
    }

    #[test]
    fn number_font_layout() {
        let mut canvas = TestCanvas::new();
        canvas.set_font(FontId::BigNum);
        canvas.set_text_size(4);
        canvas.print("1 2.");
        // digits and ' ' are 16 wide, '.' is 8 wide, no scaling
        assert_eq!(canvas.cursor(), (16 * 3 + 8, 0));
        // the decimal point is a filled circle around (x + 8, y + 25)
        assert!(canvas.buffer.pixel(48 + 8, 25));
        canvas.print("5");
        assert_eq!(canvas.cursor(), (16 * 4 + 8, 0));

        canvas.print("\n");
        assert_eq!(canvas.cursor(), (0, 32));
    }

    #[test]
    fn number_font_always_draws_background() {
        let mut canvas = TestCanvas::new();
        canvas.fill_screen(Color::Foreground);
        canvas.set_font(FontId::MedNum);
        canvas.draw_char_num_font(0, 0, '1', Color::Foreground, Color::Background);
        let lit = (0..16)
            .flat_map(|x| (0..16).map(move |y| (x, y)))
            .filter(|&(x, y)| canvas.buffer.pixel(x, y))
            .count();
        assert!(lit > 0 && lit < 16 * 16);
    }

    #[test]
    fn number_text_wraps_and_restarts() {
        let mut canvas = TestCanvas::new();
        canvas.set_font(FontId::BigNum);
        // 8 digits per line, 2 lines: the 17th digit lands on the top left again
        canvas.draw_text_num_font(0, 0, "88888888888888881", Color::Foreground, Color::Background);
        assert!(!canvas.buffer.pixel(4, 2));

        let mut canvas = TestCanvas::new();
        canvas.draw_text_num_font(0, 0, "12", Color::Foreground, Color::Background);
        assert_eq!(canvas.count(), 0);
    }
}
