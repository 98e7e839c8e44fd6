//! Monochrome rasterizer
//!
//! The [`Canvas`] trait draws lines, rectangles, circles, triangles, rounded
//! rectangles and bitmaps on top of a single `draw_pixel` function. A backend
//! (like the [`CH1115`](crate::CH1115) driver) only has to store the pixels and
//! give access to its [`CanvasState`]; everything else comes for free.
//!
//! All coordinates are signed and may lie outside of the canvas. Pixels outside
//! of the canvas are silently dropped, nothing here ever panics.
//!
//! The algorithms are the classic integer ones: Bresenham for lines, the
//! midpoint algorithm for circles and scanline interpolation for filled
//! triangles.
use core::convert::TryFrom;
use core::mem::swap;

use crate::font::FontId;

/// Color argument of every draw operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// pixel on
    Foreground,
    /// pixel off
    Background,
    /// toggle whatever is stored in the pixel
    Inverse,
}

/// Rotation of the canvas, in clockwise quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Rotate0
    }
}

impl From<u8> for Rotation {
    /// only the lowest two bits are used, so 4 is Rotate0 again
    fn from(quarter_turns: u8) -> Self {
        match quarter_turns & 0x03 {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }
}

impl Rotation {
    /// true if width and height are swapped in this rotation
    pub fn is_transposed(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

/// How the bytes of a bitmap passed to [`Canvas::draw_bitmap`] are packed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapMode {
    /// every byte is a column of 8 pixels (bit 0 on top), page after page.
    /// This is the layout of the display RAM.
    Vertical,
    /// every byte is a row of 8 pixels (bit 7 on the left), row after row.
    /// Every row starts at a new byte.
    Horizontal,
}

impl Default for BitmapMode {
    fn default() -> Self {
        BitmapMode::Horizontal
    }
}

/// Dimensions, rotation and text settings of a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasState {
    raw_width: i16,
    raw_height: i16,
    width: i16,
    height: i16,
    rotation: Rotation,
    bitmap_mode: BitmapMode,
    pub(crate) cursor_x: i16,
    pub(crate) cursor_y: i16,
    pub(crate) text_color: Color,
    pub(crate) text_background: Color,
    pub(crate) text_size: u8,
    pub(crate) wrap: bool,
    pub(crate) font: FontId,
}

impl CanvasState {
    /// State of an unrotated canvas with the physical size of the display
    pub fn new(width: i16, height: i16) -> Self {
        CanvasState {
            raw_width: width,
            raw_height: height,
            width,
            height,
            rotation: Rotation::Rotate0,
            bitmap_mode: BitmapMode::default(),
            cursor_x: 0,
            cursor_y: 0,
            text_color: Color::Foreground,
            text_background: Color::Background,
            text_size: 1,
            wrap: true,
            font: FontId::Default,
        }
    }

    /// width after rotation
    pub fn width(&self) -> i16 {
        self.width
    }

    /// height after rotation
    pub fn height(&self) -> i16 {
        self.height
    }

    /// physical width, independent of rotation
    pub fn raw_width(&self) -> i16 {
        self.raw_width
    }

    /// physical height, independent of rotation
    pub fn raw_height(&self) -> i16 {
        self.raw_height
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        if rotation.is_transposed() {
            self.width = self.raw_height;
            self.height = self.raw_width;
        } else {
            self.width = self.raw_width;
            self.height = self.raw_height;
        }
    }

    pub fn bitmap_mode(&self) -> BitmapMode {
        self.bitmap_mode
    }

    pub fn set_bitmap_mode(&mut self, mode: BitmapMode) {
        self.bitmap_mode = mode;
    }

    /// Maps a canvas coordinate to the physical pixel of the display.
    ///
    /// Returns `None` for coordinates outside of the (rotated) canvas.
    pub fn to_physical(&self, x: i16, y: i16) -> Option<(i16, i16)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (y, self.raw_height - 1 - x),
            Rotation::Rotate180 => (self.raw_width - 1 - x, self.raw_height - 1 - y),
            Rotation::Rotate270 => (self.raw_width - 1 - y, x),
        })
    }
}

/// draw a pixel given in wide coordinates, everything beyond `i16` is off canvas anyway
fn plot<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, color: Color) {
    if let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) {
        canvas.draw_pixel(x, y, color);
    }
}

fn vline<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, h: i32, color: Color) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    if h <= 0 || x < 0 || x >= width {
        return;
    }
    for y in y.max(0)..(y + h).min(height) {
        canvas.draw_pixel(x as i16, y as i16, color);
    }
}

fn hline<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, w: i32, color: Color) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    if w <= 0 || y < 0 || y >= height {
        return;
    }
    for x in x.max(0)..(x + w).min(width) {
        canvas.draw_pixel(x as i16, y as i16, color);
    }
}

fn line<C: Canvas + ?Sized>(
    canvas: &mut C,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: Color,
) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    // always walk left to right so both endpoint orders give the same pixels
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut err = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            plot(canvas, y, x, color);
        } else {
            plot(canvas, x, y, color);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}

fn fill_rect<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let width = canvas.width() as i32;
    if w <= 0 || h <= 0 {
        return;
    }
    for x in x.max(0)..(x + w).min(width) {
        vline(canvas, x, y, h, color);
    }
}

fn circle_helper<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    r: i32,
    corners: u8,
    color: Color,
) {
    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        if corners & 0x4 != 0 {
            plot(canvas, x0 + x, y0 + y, color);
            plot(canvas, x0 + y, y0 + x, color);
        }
        if corners & 0x2 != 0 {
            plot(canvas, x0 + x, y0 - y, color);
            plot(canvas, x0 + y, y0 - x, color);
        }
        if corners & 0x8 != 0 {
            plot(canvas, x0 - y, y0 + x, color);
            plot(canvas, x0 - x, y0 + y, color);
        }
        if corners & 0x1 != 0 {
            plot(canvas, x0 - y, y0 - x, color);
            plot(canvas, x0 - x, y0 - y, color);
        }
    }
}

fn fill_circle_helper<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    r: i32,
    corners: u8,
    delta: i32,
    color: Color,
) {
    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;
    let mut px = x;
    let mut py = y;
    let delta = delta + 1;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        // the checks skip columns that were already drawn, so Inverse works
        if x < y + 1 {
            if corners & 0x1 != 0 {
                vline(canvas, x0 + x, y0 - y, 2 * y + delta, color);
            }
            if corners & 0x2 != 0 {
                vline(canvas, x0 - x, y0 - y, 2 * y + delta, color);
            }
        }
        if y != py {
            if corners & 0x1 != 0 {
                vline(canvas, x0 + py, y0 - px, 2 * px + delta, color);
            }
            if corners & 0x2 != 0 {
                vline(canvas, x0 - py, y0 - px, 2 * px + delta, color);
            }
            py = y;
        }
        px = x;
    }
}

/// radius of rounded rectangle corners, at most half of the shorter side
fn corner_radius(w: i32, h: i32, r: i32) -> i32 {
    r.min(w.min(h) / 2).max(0)
}

/// Geometric primitives on top of `draw_pixel`.
///
/// Implementors provide the state and the pixel operation, the other methods
/// are provided.
pub trait Canvas {
    fn canvas_state(&self) -> &CanvasState;

    fn canvas_state_mut(&mut self) -> &mut CanvasState;

    /// Draw a single pixel at canvas coordinates (x, y).
    ///
    /// Implementations apply the rotation (see [`CanvasState::to_physical`])
    /// and ignore pixels outside of the canvas.
    fn draw_pixel(&mut self, x: i16, y: i16, color: Color);

    /// width of the canvas in the current rotation
    fn width(&self) -> i16 {
        self.canvas_state().width()
    }

    /// height of the canvas in the current rotation
    fn height(&self) -> i16 {
        self.canvas_state().height()
    }

    fn rotation(&self) -> Rotation {
        self.canvas_state().rotation()
    }

    /// Rotate the canvas. Only affects things drawn afterwards.
    fn set_rotation(&mut self, rotation: Rotation) {
        self.canvas_state_mut().set_rotation(rotation);
    }

    /// select the byte packing used by `draw_bitmap`
    fn set_bitmap_mode(&mut self, mode: BitmapMode) {
        self.canvas_state_mut().set_bitmap_mode(mode);
    }

    fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        line(self, x0.into(), y0.into(), x1.into(), y1.into(), color);
    }

    /// vertical line from (x, y) downwards, `h` pixels long
    fn draw_fast_vline(&mut self, x: i16, y: i16, h: i16, color: Color) {
        vline(self, x.into(), y.into(), h.into(), color);
    }

    /// horizontal line from (x, y) to the right, `w` pixels long
    fn draw_fast_hline(&mut self, x: i16, y: i16, w: i16, color: Color) {
        hline(self, x.into(), y.into(), w.into(), color);
    }

    fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        if w <= 0 || h <= 0 {
            return;
        }
        hline(self, x, y, w, color);
        if h > 1 {
            hline(self, x, y + h - 1, w, color);
        }
        // the corners belong to the horizontal lines
        vline(self, x, y + 1, h - 2, color);
        if w > 1 {
            vline(self, x + w - 1, y + 1, h - 2, color);
        }
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        fill_rect(self, x.into(), y.into(), w.into(), h.into(), color);
    }

    /// fill the whole (rotated) canvas
    fn fill_screen(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, color);
    }

    fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        plot(self, x0, y0 + r, color);
        if r == 0 {
            return;
        }
        plot(self, x0, y0 - r, color);
        plot(self, x0 + r, y0, color);
        plot(self, x0 - r, y0, color);

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            plot(self, x0 + x, y0 + y, color);
            plot(self, x0 - x, y0 + y, color);
            plot(self, x0 + x, y0 - y, color);
            plot(self, x0 - x, y0 - y, color);
            if x != y {
                plot(self, x0 + y, y0 + x, color);
                plot(self, x0 - y, y0 + x, color);
                plot(self, x0 + y, y0 - x, color);
                plot(self, x0 - y, y0 - x, color);
            }
        }
    }

    /// Quarter circle outlines, used for rounded corners.
    ///
    /// `corners` is a bit mask: 0x1 top left, 0x2 top right, 0x4 bottom right,
    /// 0x8 bottom left.
    fn draw_circle_helper(&mut self, x0: i16, y0: i16, r: i16, corners: u8, color: Color) {
        circle_helper(self, x0.into(), y0.into(), r.into(), corners, color);
    }

    fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (x0, y0, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        vline(self, x0, y0 - r, 2 * r + 1, color);
        fill_circle_helper(self, x0, y0, r, 0x3, 0, color);
    }

    /// Filled half circles, stretched vertically by `delta` pixels.
    ///
    /// `corners` is a bit mask: 0x1 right half, 0x2 left half. The center
    /// column is not drawn.
    fn fill_circle_helper(
        &mut self,
        x0: i16,
        y0: i16,
        r: i16,
        corners: u8,
        delta: i16,
        color: Color,
    ) {
        fill_circle_helper(
            self,
            x0.into(),
            y0.into(),
            r.into(),
            corners,
            delta.into(),
            color,
        );
    }

    fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        let (mut x0, mut y0) = (i32::from(x0), i32::from(y0));
        let (mut x1, mut y1) = (i32::from(x1), i32::from(y1));
        let (mut x2, mut y2) = (i32::from(x2), i32::from(y2));

        // sort by y: y0 <= y1 <= y2
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            // all points on one scanline
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            hline(self, a, y0, b - a + 1, color);
            return;
        }

        // the running sums outgrow i32 for triangles spanning the whole i16 range
        let (dx01, dy01) = (i64::from(x1 - x0), i64::from(y1 - y0));
        let (dx02, dy02) = (i64::from(x2 - x0), i64::from(y2 - y0));
        let (dx12, dy12) = (i64::from(x2 - x1), i64::from(y2 - y1));
        let mut sa: i64 = 0;
        let mut sb: i64 = 0;

        // upper part, edges 0-1 and 0-2. With a flat bottom (y1 == y2) the
        // scanline y1 is included here, otherwise it belongs to the lower part.
        let last = if y1 == y2 { y1 } else { y1 - 1 };
        let mut y = y0;
        while y <= last {
            let mut a = x0 + (sa / dy01) as i32;
            let mut b = x0 + (sb / dy02) as i32;
            sa += dx01;
            sb += dx02;
            if a > b {
                swap(&mut a, &mut b);
            }
            hline(self, a, y, b - a + 1, color);
            y += 1;
        }

        // lower part, edges 1-2 and 0-2
        sa = dx12 * i64::from(y - y1);
        sb = dx02 * i64::from(y - y0);
        while y <= y2 {
            let mut a = x1 + (sa / dy12) as i32;
            let mut b = x0 + (sb / dy02) as i32;
            sa += dx12;
            sb += dx02;
            if a > b {
                swap(&mut a, &mut b);
            }
            hline(self, a, y, b - a + 1, color);
            y += 1;
        }
    }

    /// Rectangle with rounded corners. The radius is clamped to half of the
    /// shorter side.
    fn draw_round_rect(&mut self, x: i16, y: i16, w: i16, h: i16, r: i16, color: Color) {
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        if w <= 0 || h <= 0 {
            return;
        }
        let r = corner_radius(w, h, r.into());
        hline(self, x + r, y, w - 2 * r, color);
        hline(self, x + r, y + h - 1, w - 2 * r, color);
        vline(self, x, y + r, h - 2 * r, color);
        vline(self, x + w - 1, y + r, h - 2 * r, color);
        circle_helper(self, x + r, y + r, r, 0x1, color);
        circle_helper(self, x + w - r - 1, y + r, r, 0x2, color);
        circle_helper(self, x + w - r - 1, y + h - r - 1, r, 0x4, color);
        circle_helper(self, x + r, y + h - r - 1, r, 0x8, color);
    }

    fn fill_round_rect(&mut self, x: i16, y: i16, w: i16, h: i16, r: i16, color: Color) {
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        if w <= 0 || h <= 0 {
            return;
        }
        let r = corner_radius(w, h, r.into());
        fill_rect(self, x + r, y, w - 2 * r, h, color);
        fill_circle_helper(self, x + w - r - 1, y + r, r, 0x1, h - 2 * r - 1, color);
        fill_circle_helper(self, x + r, y + r, r, 0x2, h - 2 * r - 1, color);
    }

    /// Draw a monochrome bitmap of `w` x `h` pixels.
    ///
    /// Set bits are drawn in `color`, clear bits in `bg`. The byte packing is
    /// selected with [`set_bitmap_mode`](Canvas::set_bitmap_mode). Drawing
    /// stops where `data` is too short.
    fn draw_bitmap(
        &mut self,
        x: i16,
        y: i16,
        data: &[u8],
        w: i16,
        h: i16,
        color: Color,
        bg: Color,
    ) {
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        if w <= 0 || h <= 0 {
            return;
        }
        match self.canvas_state().bitmap_mode() {
            BitmapMode::Vertical => {
                for page in 0..(h + 7) / 8 {
                    for i in 0..w {
                        let byte = match data.get((page * w + i) as usize) {
                            Some(byte) => *byte,
                            None => return,
                        };
                        for bit in 0..8 {
                            let j = page * 8 + bit;
                            if j >= h {
                                break;
                            }
                            let set = byte & (1 << bit) != 0;
                            plot(self, x + i, y + j, if set { color } else { bg });
                        }
                    }
                }
            }
            BitmapMode::Horizontal => {
                let byte_width = (w + 7) / 8;
                for j in 0..h {
                    for i in 0..w {
                        let byte = match data.get((j * byte_width + i / 8) as usize) {
                            Some(byte) => *byte,
                            None => return,
                        };
                        let set = byte & (0x80 >> (i & 7)) != 0;
                        plot(self, x + i, y + j, if set { color } else { bg });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::buffer::PageBuffer;

    /// in-memory canvas used by the unit tests
    pub(crate) struct TestCanvas {
        pub state: CanvasState,
        pub buffer: PageBuffer<128, 8>,
    }

    impl TestCanvas {
        pub fn new() -> Self {
            TestCanvas {
                state: CanvasState::new(128, 64),
                buffer: PageBuffer::new(),
            }
        }

        pub fn count(&self) -> usize {
            self.buffer.bytes().map(|b| b.count_ones() as usize).sum()
        }
    }

    impl Canvas for TestCanvas {
        fn canvas_state(&self) -> &CanvasState {
            &self.state
        }

        fn canvas_state_mut(&mut self) -> &mut CanvasState {
            &mut self.state
        }

        fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
            if let Some((x, y)) = self.state.to_physical(x, y) {
                self.buffer.set_pixel(x.into(), y.into(), color);
            }
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let mut canvas = TestCanvas::new();
        canvas.set_rotation(Rotation::Rotate90);
        assert_eq!((canvas.width(), canvas.height()), (64, 128));
        canvas.set_rotation(Rotation::from(6));
        assert_eq!(canvas.rotation(), Rotation::Rotate180);
        assert_eq!((canvas.width(), canvas.height()), (128, 64));
    }

    #[test]
    fn rotation_transform() {
        let mut state = CanvasState::new(128, 64);
        assert_eq!(state.to_physical(5, 5), Some((5, 5)));
        state.set_rotation(Rotation::Rotate180);
        assert_eq!(state.to_physical(5, 5), Some((122, 58)));
        state.set_rotation(Rotation::Rotate90);
        assert_eq!(state.to_physical(5, 5), Some((5, 58)));
        assert_eq!(state.to_physical(63, 127), Some((127, 0)));
        assert_eq!(state.to_physical(64, 0), None);
        state.set_rotation(Rotation::Rotate270);
        assert_eq!(state.to_physical(5, 5), Some((122, 5)));
        assert_eq!(state.to_physical(0, 127), Some((0, 0)));
    }

    #[test]
    fn fast_lines_match_general_line() {
        let mut a = TestCanvas::new();
        let mut b = TestCanvas::new();
        a.draw_fast_hline(-3, 10, 20, Color::Foreground);
        a.draw_fast_vline(40, 60, 10, Color::Foreground);
        b.draw_line(-3, 10, 16, 10, Color::Foreground);
        b.draw_line(40, 60, 40, 69, Color::Foreground);
        assert_eq!(a.buffer, b.buffer);
        assert_eq!(a.count(), 17 + 4);
    }

    #[test]
    fn zero_length_lines_draw_nothing() {
        let mut canvas = TestCanvas::new();
        canvas.draw_fast_hline(10, 10, 0, Color::Foreground);
        canvas.draw_fast_vline(10, 10, -4, Color::Foreground);
        assert_eq!(canvas.count(), 0);
    }

    #[test]
    fn rect_outline() {
        let mut canvas = TestCanvas::new();
        canvas.draw_rect(10, 10, 5, 4, Color::Foreground);
        assert_eq!(canvas.count(), 2 * 5 + 2 * 2);
        assert!(canvas.buffer.pixel(14, 13));
        assert!(!canvas.buffer.pixel(12, 12));
    }

    #[test]
    fn rect_outline_inverse_touches_every_pixel_once() {
        let mut canvas = TestCanvas::new();
        canvas.draw_rect(0, 0, 3, 3, Color::Inverse);
        assert_eq!(canvas.count(), 8);
    }

    #[test]
    fn fill_screen_follows_rotation() {
        let mut canvas = TestCanvas::new();
        canvas.set_rotation(Rotation::Rotate90);
        canvas.fill_screen(Color::Foreground);
        assert_eq!(canvas.count(), 128 * 64);
    }

    #[test]
    fn fill_circle_inverse_draws_each_pixel_once() {
        let mut fg = TestCanvas::new();
        let mut inv = TestCanvas::new();
        fg.fill_circle(30, 30, 9, Color::Foreground);
        inv.fill_circle(30, 30, 9, Color::Inverse);
        assert_eq!(fg.buffer, inv.buffer);
    }

    #[test]
    fn filled_triangle_degenerate_cases() {
        let mut canvas = TestCanvas::new();
        // all on one line
        canvas.fill_triangle(10, 5, 2, 5, 6, 5, Color::Foreground);
        assert_eq!(canvas.count(), 9);

        // flat top and flat bottom
        let mut canvas = TestCanvas::new();
        canvas.fill_triangle(0, 0, 10, 0, 5, 10, Color::Foreground);
        canvas.fill_triangle(0, 30, 10, 30, 5, 20, Color::Foreground);
        assert!(canvas.buffer.pixel(5, 10));
        assert!(canvas.buffer.pixel(5, 20));
        assert!(canvas.buffer.pixel(0, 0) && canvas.buffer.pixel(10, 30));
    }

    #[test]
    fn filled_triangle_spans() {
        // (first x, last x) of every scanline
        let spans = [
            (0, 0),
            (0, 2),
            (0, 4),
            (0, 6),
            (1, 8),
            (1, 7),
            (1, 5),
            (1, 4),
            (2, 2),
        ];
        let vertices = [(0, 0), (8, 4), (2, 8)];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders.iter() {
            let [a, b, c] = [vertices[order[0]], vertices[order[1]], vertices[order[2]]];
            let mut canvas = TestCanvas::new();
            canvas.fill_triangle(a.0, a.1, b.0, b.1, c.0, c.1, Color::Foreground);
            assert_eq!(canvas.count(), 41);
            for (y, &(first, last)) in spans.iter().enumerate() {
                let y = y as i32;
                for x in 0..12 {
                    let inside = x >= first && x <= last;
                    assert_eq!(canvas.buffer.pixel(x, y), inside, "({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn circle_helper_corners() {
        let corners: [(u8, [(i32, i32); 3]); 4] = [
            (0x1, [(7, 9), (9, 7), (8, 8)]),
            (0x2, [(11, 7), (13, 9), (12, 8)]),
            (0x4, [(11, 13), (13, 11), (12, 12)]),
            (0x8, [(7, 11), (9, 13), (8, 12)]),
        ];
        for (mask, pixels) in corners.iter() {
            let mut canvas = TestCanvas::new();
            canvas.draw_circle_helper(10, 10, 3, *mask, Color::Foreground);
            assert_eq!(canvas.count(), 3, "corner {:#x}", mask);
            for &(x, y) in pixels.iter() {
                assert!(canvas.buffer.pixel(x, y), "corner {:#x} at ({}, {})", mask, x, y);
            }
        }

        let mut canvas = TestCanvas::new();
        canvas.draw_circle_helper(10, 10, 3, 0xF, Color::Foreground);
        assert_eq!(canvas.count(), 12);
    }

    #[test]
    fn round_rect_radius_zero_is_a_rect() {
        let mut a = TestCanvas::new();
        let mut b = TestCanvas::new();
        a.draw_round_rect(3, 4, 20, 10, 0, Color::Foreground);
        b.draw_rect(3, 4, 20, 10, Color::Foreground);
        assert_eq!(a.buffer, b.buffer);

        let mut a = TestCanvas::new();
        let mut b = TestCanvas::new();
        a.fill_round_rect(3, 4, 20, 10, 0, Color::Foreground);
        b.fill_rect(3, 4, 20, 10, Color::Foreground);
        assert_eq!(a.buffer, b.buffer);
    }

    #[test]
    fn rounded_corners_are_cut() {
        let mut canvas = TestCanvas::new();
        canvas.fill_round_rect(0, 0, 20, 20, 5, Color::Foreground);
        assert!(!canvas.buffer.pixel(0, 0));
        assert!(!canvas.buffer.pixel(19, 19));
        assert!(canvas.buffer.pixel(10, 0));
        assert!(canvas.buffer.pixel(0, 10));
        assert!(canvas.buffer.pixel(10, 10));
    }

    #[test]
    fn bitmap_vertical_mode() {
        let mut canvas = TestCanvas::new();
        canvas.set_bitmap_mode(BitmapMode::Vertical);
        // 2 columns, 10 rows: two pages
        let data = [0b0000_0001, 0b1000_0000, 0b0000_0010, 0b0000_0000];
        canvas.draw_bitmap(4, 4, &data, 2, 10, Color::Foreground, Color::Background);
        assert!(canvas.buffer.pixel(4, 4));
        assert!(canvas.buffer.pixel(5, 11));
        assert!(canvas.buffer.pixel(4, 13));
        assert_eq!(canvas.count(), 3);
    }

    #[test]
    fn bitmap_horizontal_mode() {
        let mut canvas = TestCanvas::new();
        canvas.set_bitmap_mode(BitmapMode::Horizontal);
        // 10 pixels wide: 2 bytes per row
        let data = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b0000_0000];
        canvas.draw_bitmap(0, 0, &data, 10, 2, Color::Foreground, Color::Background);
        assert!(canvas.buffer.pixel(0, 0));
        assert!(canvas.buffer.pixel(9, 0));
        assert!(canvas.buffer.pixel(7, 1));
        assert_eq!(canvas.count(), 3);
    }

    #[test]
    fn bitmap_background_is_drawn() {
        let mut canvas = TestCanvas::new();
        canvas.fill_screen(Color::Foreground);
        canvas.draw_bitmap(0, 0, &[0x00], 8, 1, Color::Foreground, Color::Background);
        assert_eq!(canvas.count(), 128 * 64 - 8);
    }

    #[test]
    fn short_bitmap_data_stops_drawing() {
        let mut canvas = TestCanvas::new();
        canvas.draw_bitmap(0, 0, &[0xFF], 8, 8, Color::Foreground, Color::Background);
        assert_eq!(canvas.count(), 8);
    }

    #[test]
    fn far_out_of_range_coordinates_are_clipped() {
        let mut canvas = TestCanvas::new();
        canvas.draw_line(i16::MIN, i16::MIN, i16::MAX, i16::MAX, Color::Foreground);
        canvas.draw_circle(i16::MAX, 0, i16::MAX, Color::Foreground);
        canvas.fill_rect(i16::MAX - 1, i16::MAX - 1, i16::MAX, i16::MAX, Color::Foreground);
        canvas.fill_triangle(-1000, -1000, 30000, 5, -30000, 30000, Color::Foreground);
        assert!(canvas.count() > 0);
    }
}
