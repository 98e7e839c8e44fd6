//! Built-in fonts
//!
//! Six 8 pixel high text fonts and two large digit fonts for clocks and
//! frequency readouts. Select one with [`Text::set_font`](crate::Text::set_font).
//!
//! Text fonts store one byte per column, bit 0 being the top row. The digit
//! fonts are taller than a byte and store every column as a stack of
//! `height / 8` bytes instead, see [`GlyphLayout`].
mod tables;

use tables::*;

/// Identifier of a built-in font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontId {
    /// 5x8, full 7 bit ASCII including the control code symbols
    Default,
    /// 7x8, bold, upper case only
    Thick,
    /// 4x8, seven segment look
    SevenSeg,
    /// 8x8, upper case only
    Wide,
    /// 3x8
    Tiny,
    /// 7x8
    Homespun,
    /// 16x32 digits and ':'
    BigNum,
    /// 16x16 digits and ':'
    MedNum,
}

impl Default for FontId {
    fn default() -> Self {
        FontId::Default
    }
}

impl FontId {
    /// the glyph table and metrics of this font
    pub fn font(self) -> &'static Font {
        match self {
            FontId::Default => &DEFAULT,
            FontId::Thick => &THICK,
            FontId::SevenSeg => &SEVEN_SEG,
            FontId::Wide => &WIDE,
            FontId::Tiny => &TINY,
            FontId::Homespun => &HOMESPUN,
            FontId::BigNum => &BIG_NUM,
            FontId::MedNum => &MED_NUM,
        }
    }

    /// true for the large digit fonts
    pub fn is_numeric(self) -> bool {
        matches!(self, FontId::BigNum | FontId::MedNum)
    }
}

/// First character code stored in a font table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontOffset {
    /// starts at 0x00, includes the control code symbols
    Extended = 0x00,
    /// starts at ' '
    Space = 0x20,
    /// starts at '0'
    Digit = 0x30,
}

/// How the bytes of one glyph are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphLayout {
    /// one byte per column, bit 0 is the top row
    Columns,
    /// `height / 8` bytes per column from top to bottom, bit 7 is the top row
    /// of each byte
    StackedColumns,
}

/// A font table with its metrics
#[derive(Debug)]
pub struct Font {
    table: &'static [u8],
    width: u8,
    height: u8,
    offset: FontOffset,
    layout: GlyphLayout,
}

static DEFAULT: Font = Font::columns(&FONT_DEFAULT, 5, FontOffset::Extended);
static THICK: Font = Font::columns(&FONT_THICK, 7, FontOffset::Space);
static SEVEN_SEG: Font = Font::columns(&FONT_SEVEN_SEG, 4, FontOffset::Space);
static WIDE: Font = Font::columns(&FONT_WIDE, 8, FontOffset::Space);
static TINY: Font = Font::columns(&FONT_TINY, 3, FontOffset::Space);
static HOMESPUN: Font = Font::columns(&FONT_HOMESPUN, 7, FontOffset::Space);
static BIG_NUM: Font = Font::stacked(&FONT_BIG_NUM, 16, 32);
static MED_NUM: Font = Font::stacked(&FONT_MED_NUM, 16, 16);

impl Font {
    const fn columns(table: &'static [u8], width: u8, offset: FontOffset) -> Self {
        Font {
            table,
            width,
            height: 8,
            offset,
            layout: GlyphLayout::Columns,
        }
    }

    const fn stacked(table: &'static [u8], width: u8, height: u8) -> Self {
        Font {
            table,
            width,
            height,
            offset: FontOffset::Digit,
            layout: GlyphLayout::StackedColumns,
        }
    }

    /// glyph width in pixels, without the gap between characters
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn offset(&self) -> FontOffset {
        self.offset
    }

    pub fn layout(&self) -> GlyphLayout {
        self.layout
    }

    fn bytes_per_glyph(&self) -> usize {
        match self.layout {
            GlyphLayout::Columns => self.width as usize,
            GlyphLayout::StackedColumns => self.width as usize * (self.height as usize / 8),
        }
    }

    /// number of glyphs in the table
    pub fn len(&self) -> usize {
        self.table.len() / self.bytes_per_glyph()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// true if the font has a glyph for `c`
    pub fn contains(&self, c: char) -> bool {
        self.index(c).is_some()
    }

    fn index(&self, c: char) -> Option<usize> {
        let index = (c as u32).checked_sub(self.offset as u32)? as usize;
        if index < self.len() {
            Some(index)
        } else {
            None
        }
    }

    /// The glyph of `c`, or the placeholder (all pixels set) if the font
    /// doesn't have one.
    pub fn glyph(&self, c: char) -> Glyph<'_> {
        let data = self.index(c).map(|index| {
            let size = self.bytes_per_glyph();
            &self.table[index * size..(index + 1) * size]
        });
        Glyph { font: self, data }
    }
}

/// Pixel data of one character
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    font: &'a Font,
    data: Option<&'a [u8]>,
}

impl<'a> Glyph<'a> {
    /// true if the font had no glyph for the requested character
    pub fn is_placeholder(&self) -> bool {
        self.data.is_none()
    }

    pub fn width(&self) -> u8 {
        self.font.width
    }

    pub fn height(&self) -> u8 {
        self.font.height
    }

    /// Returns true if the pixel is set. Outside of the glyph nothing is set.
    pub fn pixel(&self, column: u8, row: u8) -> bool {
        if column >= self.font.width || row >= self.font.height {
            return false;
        }
        let data = match self.data {
            Some(data) => data,
            None => return true,
        };
        match self.font.layout {
            GlyphLayout::Columns => data[column as usize] & (1 << row) != 0,
            GlyphLayout::StackedColumns => {
                let stack = self.font.height as usize / 8;
                let byte = data[column as usize * stack + row as usize / 8];
                byte & (0x80 >> (row % 8)) != 0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FontId; 8] = [
        FontId::Default,
        FontId::Thick,
        FontId::SevenSeg,
        FontId::Wide,
        FontId::Tiny,
        FontId::Homespun,
        FontId::BigNum,
        FontId::MedNum,
    ];

    #[test]
    fn tables_hold_whole_glyphs() {
        for id in ALL.iter() {
            let font = id.font();
            assert_eq!(font.table.len() % font.bytes_per_glyph(), 0, "{:?}", id);
            assert!(!font.is_empty());
        }
    }

    #[test]
    fn coverage() {
        assert_eq!(FontId::Default.font().len(), 128);
        assert!(FontId::Default.font().contains('\x01'));
        assert!(FontId::Thick.font().contains('_'));
        assert!(!FontId::Thick.font().contains('a'));
        assert!(FontId::Tiny.font().contains('~'));
        assert!(FontId::BigNum.font().contains(':'));
        assert!(!FontId::BigNum.font().contains(';'));
        assert!(!FontId::MedNum.font().contains(' '));
        assert!(!FontId::Default.font().contains('é'));
    }

    #[test]
    fn column_glyph() {
        // '!' is a single column at x = 2, rows 0..=4 and 6
        let glyph = FontId::Default.font().glyph('!');
        assert!(!glyph.is_placeholder());
        assert!(glyph.pixel(2, 0));
        assert!(!glyph.pixel(2, 5));
        assert!(glyph.pixel(2, 6));
        assert!(!glyph.pixel(0, 0));
        assert!(!glyph.pixel(5, 0));
    }

    #[test]
    fn stacked_glyph() {
        // the '1' of the big font is a bar on the right side
        let glyph = FontId::BigNum.font().glyph('1');
        assert_eq!((glyph.width(), glyph.height()), (16, 32));
        assert!(!glyph.pixel(0, 16));
        assert!(glyph.pixel(12, 16));
        assert!(!glyph.pixel(12, 0));
    }

    #[test]
    fn placeholder_is_solid() {
        let glyph = FontId::Wide.font().glyph('z');
        assert!(glyph.is_placeholder());
        for column in 0..8 {
            for row in 0..8 {
                assert!(glyph.pixel(column, row));
            }
        }
        assert!(!glyph.pixel(8, 0));
    }
}
