use sdl3::pixels::Color;
use sdl3::rect::Rect;
use sdl3::render::{Canvas, FPoint};
use sdl3::video::Window;

use crate::rect::{OrientedRect, Overlap};
use crate::segment::Segment;
use crate::vec2::Vec2f;

impl From<Vec2f> for FPoint {
    fn from(vec: Vec2f) -> FPoint {
        FPoint { x: vec.0, y: vec.1 }
    }
}

/// Draws the outline of a rotated rectangle.
pub fn outline(canvas: &mut Canvas<Window>, rect: &OrientedRect, color: Color) {
    canvas.set_draw_color(color);

    let points = rect.corners().points();
    for (i, point) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        let _ = canvas.draw_line(*point, next);
    }
}

/// Fills a rotated rectangle.
///
/// Rectangles sitting at a quarter turn use a plain rectangle fill; anything
/// else is filled row by row between the rotated edges.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fill(canvas: &mut Canvas<Window>, rect: &OrientedRect, color: Color) {
    canvas.set_draw_color(color);

    let turns = rect.rotation.round() as i32;
    if turns % 90 != 0 {
        scanline_fill(canvas, rect);
    } else if turns % 180 == 0 {
        let _ = canvas.fill_rect(Rect::new(
            rect.x.round() as i32,
            rect.y.round() as i32,
            rect.width.round() as u32,
            rect.height.round() as u32,
        ));
    } else {
        // Odd quarter turn: width and height trade places about the center.
        let center = rect.center();
        let _ = canvas.fill_rect(Rect::new(
            (center.0 - rect.height / 2.0).round() as i32,
            (center.1 - rect.width / 2.0).round() as i32,
            rect.height.round() as u32,
            rect.width.round() as u32,
        ));
    }
}

/// Fills a rotated rectangle by drawing one horizontal line per row between
/// the crossings of that row with the rectangle's edges.
#[allow(clippy::cast_possible_truncation)]
fn scanline_fill(canvas: &mut Canvas<Window>, rect: &OrientedRect) {
    let edges = rect.corners().edges();
    let extremes = rect.extreme_points();

    // Rows are swept horizontally just past the silhouette on both sides.
    let left = extremes.leftmost.0 - 1.0;
    let right = extremes.rightmost.0 + 1.0;
    let top = extremes.topmost.1.ceil() as i32;
    let bottom = extremes.bottommost.1.floor() as i32;

    for y in top..=bottom {
        #[allow(clippy::cast_precision_loss)]
        let row_y = y as f32;
        let row = Segment::new(Vec2f(left, row_y), Vec2f(right, row_y));

        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for edge in &edges {
            if let Some(hit) = row.intersection(*edge) {
                min_x = min_x.min(hit.0);
                max_x = max_x.max(hit.0);
            }
        }

        if min_x <= max_x {
            let _ = canvas.draw_line(Vec2f(min_x, row_y), Vec2f(max_x, row_y));
        }
    }
}

/// Draws the boundary of an overlap polygon.
pub fn overlap_lines(canvas: &mut Canvas<Window>, overlap: &Overlap, color: Color) {
    if overlap.len() < 2 {
        return;
    }

    canvas.set_draw_color(color);

    let points = overlap.points();
    for (i, point) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        let _ = canvas.draw_line(*point, next);
    }
}
