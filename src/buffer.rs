//! In-memory copy of the display RAM
//!
//! The RAM of page based controllers (CH1115, SSD1306, PCD8544, ...) is split
//! in pages of 8 pixel rows. Every byte of a page is a vertical strip of 8
//! pixels, bit 0 is the top row of the page:
//!
//! ```text
//!          column 0   column 1       column W-1
//! page 0  [76543210] [76543210] ... [76543210]   rows 0..=7
//! page 1  [76543210] [76543210] ... [76543210]   rows 8..=15
//! ...
//! ```
use crate::canvas::Color;

/// Page organized pixel buffer of `W` columns and `P` pages (`P * 8` rows).
///
/// The size is fixed at compile time, the buffer never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBuffer<const W: usize, const P: usize> {
    pages: [[u8; W]; P],
}

impl<const W: usize, const P: usize> PageBuffer<W, P> {
    /// A cleared buffer
    pub const fn new() -> Self {
        PageBuffer { pages: [[0; W]; P] }
    }

    /// width in pixels
    pub const fn width(&self) -> usize {
        W
    }

    /// height in pixels
    pub const fn height(&self) -> usize {
        P * 8
    }

    /// size in bytes
    pub const fn len(&self) -> usize {
        W * P
    }

    pub const fn is_empty(&self) -> bool {
        W * P == 0
    }

    /// Set, clear or toggle a single pixel.
    ///
    /// Coordinates outside of the buffer are silently ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= P * 8 {
            return;
        }
        let byte = &mut self.pages[y as usize / 8][x as usize];
        let mask = 1u8 << (y % 8);
        match color {
            Color::Foreground => *byte |= mask,
            Color::Background => *byte &= !mask,
            Color::Inverse => *byte ^= mask,
        }
    }

    /// Returns true if the pixel is set. Outside of the buffer nothing is set.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= P * 8 {
            return false;
        }
        self.pages[y as usize / 8][x as usize] & (1 << (y % 8)) != 0
    }

    /// zero the whole buffer
    pub fn clear(&mut self) {
        self.fill(0x00);
    }

    /// set every byte of the buffer to `pattern`
    pub fn fill(&mut self, pattern: u8) {
        for page in self.pages.iter_mut() {
            page.fill(pattern);
        }
    }

    /// the bytes of one page, `None` if the page doesn't exist
    pub fn page(&self, page: usize) -> Option<&[u8; W]> {
        self.pages.get(page)
    }

    /// all pages, top to bottom
    pub fn pages(&self) -> &[[u8; W]; P] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [[u8; W]; P] {
        &mut self.pages
    }

    /// iterate over all bytes in RAM order (page by page, left to right)
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.pages.iter().flat_map(|page| page.iter().copied())
    }
}

impl<const W: usize, const P: usize> Default for PageBuffer<W, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_128x64_buffer() {
        let buffer = PageBuffer::<128, 8>::new();
        assert_eq!(buffer.len(), 1024);
        assert_eq!(buffer.height(), 64);
        assert_eq!(buffer.bytes().count(), 1024);
    }

    #[test]
    fn pixel_addressing() {
        let mut buffer = PageBuffer::<16, 2>::new();
        buffer.set_pixel(3, 10, Color::Foreground);
        assert_eq!(buffer.page(1).unwrap()[3], 0b0000_0100);
        assert!(buffer.pixel(3, 10));

        buffer.set_pixel(3, 10, Color::Inverse);
        assert!(!buffer.pixel(3, 10));
        buffer.set_pixel(3, 10, Color::Inverse);
        buffer.set_pixel(3, 10, Color::Background);
        assert!(buffer.bytes().all(|b| b == 0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut buffer = PageBuffer::<16, 2>::new();
        buffer.set_pixel(-1, 0, Color::Foreground);
        buffer.set_pixel(16, 0, Color::Foreground);
        buffer.set_pixel(0, 16, Color::Foreground);
        buffer.set_pixel(0, -8, Color::Foreground);
        assert!(buffer.bytes().all(|b| b == 0));
        assert!(!buffer.pixel(100, 100));
    }

    #[test]
    fn fill_and_clear() {
        let mut buffer = PageBuffer::<4, 1>::new();
        buffer.fill(0xAA);
        assert_eq!(buffer.page(0), Some(&[0xAA; 4]));
        buffer.clear();
        assert_eq!(buffer.page(0), Some(&[0x00; 4]));
        assert_eq!(buffer.page(1), None);
    }
}
