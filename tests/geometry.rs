//! Properties of the rasterizer, checked on the driver's own buffer.
use ch1115::{Canvas, Color, DisplayInterface, NoPin, Rotation, CH1115};
use proptest::prelude::*;

/// a display that is never started, drawing only touches the buffer
struct Offline;

impl DisplayInterface for Offline {
    type Error = ();

    fn send_commands(&mut self, _: &[u8]) -> Result<(), ()> {
        Ok(())
    }

    fn send_data(&mut self, _: &[u8]) -> Result<(), ()> {
        Ok(())
    }
}

fn display() -> CH1115<Offline, NoPin> {
    CH1115::new(Offline, NoPin)
}

fn lit(display: &CH1115<Offline, NoPin>) -> Vec<(i32, i32)> {
    let mut pixels = Vec::new();
    for y in 0..64 {
        for x in 0..128 {
            if display.buffer().pixel(x, y) {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

#[test]
fn rotated_pixel_lands_on_the_opposite_corner() {
    let mut d = display();
    d.set_rotation(Rotation::Rotate180);
    d.draw_pixel(5, 5, Color::Foreground);
    assert_eq!(lit(&d), vec![(122, 58)]);

    let mut d = display();
    d.draw_pixel(5, 5, Color::Foreground);
    assert_eq!(lit(&d), vec![(5, 5)]);
}

#[test]
fn round_rect_radius_is_clamped() {
    let mut a = display();
    let mut b = display();
    a.fill_round_rect(10, 10, 10, 10, 20, Color::Foreground);
    b.fill_round_rect(10, 10, 10, 10, 5, Color::Foreground);
    assert_eq!(a.buffer(), b.buffer());

    let mut a = display();
    let mut b = display();
    a.draw_round_rect(10, 10, 10, 10, 20, Color::Foreground);
    b.draw_round_rect(10, 10, 10, 10, 5, Color::Foreground);
    assert_eq!(a.buffer(), b.buffer());
}

proptest! {
    #[test]
    fn lines_are_symmetric(
        x0 in -200i16..200, y0 in -200i16..200,
        x1 in -200i16..200, y1 in -200i16..200,
    ) {
        let mut forward = display();
        let mut backward = display();
        forward.draw_line(x0, y0, x1, y1, Color::Foreground);
        backward.draw_line(x1, y1, x0, y0, Color::Foreground);
        prop_assert_eq!(forward.buffer(), backward.buffer());
    }

    #[test]
    fn fill_rect_is_undone_by_background(
        x in -50i16..150, y in -50i16..100,
        w in -10i16..150, h in -10i16..100,
    ) {
        let mut d = display();
        d.fill_rect(x, y, w, h, Color::Foreground);
        d.fill_rect(x, y, w, h, Color::Background);
        prop_assert!(d.buffer().bytes().all(|b| b == 0));
    }

    #[test]
    fn inverse_fill_rect_twice_is_a_no_op(
        x in -50i16..150, y in -50i16..100,
        w in 0i16..150, h in 0i16..100,
    ) {
        let mut d = display();
        d.fill_circle(64, 32, 20, Color::Foreground);
        let before = d.buffer().clone();
        d.fill_rect(x, y, w, h, Color::Inverse);
        d.fill_rect(x, y, w, h, Color::Inverse);
        prop_assert_eq!(d.buffer(), &before);
    }

    #[test]
    fn circles_are_symmetric_under_quarter_turns(
        cx in 30i16..98, cy in 30i16..34, r in 0i16..28,
    ) {
        let mut d = display();
        d.draw_circle(cx, cy, r, Color::Foreground);
        let (cx, cy) = (i32::from(cx), i32::from(cy));
        for (x, y) in lit(&d) {
            let (dx, dy) = (x - cx, y - cy);
            prop_assert!(d.buffer().pixel(cx - dy, cy + dx));
        }
    }

    #[test]
    fn filled_circle_covers_the_outline(
        cx in -20i16..150, cy in -20i16..80, r in 0i16..40,
    ) {
        let mut outline = display();
        let mut filled = display();
        outline.draw_circle(cx, cy, r, Color::Foreground);
        filled.fill_circle(cx, cy, r, Color::Foreground);
        for (x, y) in lit(&outline) {
            prop_assert!(filled.buffer().pixel(x, y));
        }
    }

    #[test]
    fn rotation_keeps_pixel_count(
        x in 0i16..64, y in 0i16..64, quarter_turns in 0u8..4,
    ) {
        let mut d = display();
        d.set_rotation(Rotation::from(quarter_turns));
        d.draw_pixel(x, y, Color::Foreground);
        prop_assert_eq!(lit(&d).len(), 1);
    }
}
