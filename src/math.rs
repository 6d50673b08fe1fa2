use crate::rect::Rect;
use nalgebra as na;

/// Rounds to the nearest integer, ties to even
#[inline]
pub fn round_to_i32(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// Center with integer half-extents, `x + width / 2`
#[inline]
pub fn int_center(r: &Rect) -> na::Point2<i32> {
    na::Point2::new(r.x + r.width / 2, r.y + r.height / 2)
}

/// Sub-rectangle of `trunc(width * coeff) x trunc(height * coeff)` centered inside `r`
pub fn core_region(r: &Rect, coeff: f32) -> Rect {
    let w = (r.width as f32 * coeff) as i32;
    let h = (r.height as f32 * coeff) as i32;

    Rect::new(r.x + (r.width - w) / 2, r.y + (r.height - h) / 2, w, h)
}

/// Two rectangles collide when their core regions overlap or touch.
pub fn is_collide_by_rectangle(a: &Rect, b: &Rect, coeff: f32) -> bool {
    let a = core_region(a, coeff);
    let b = core_region(b, coeff);

    a.x as i64 <= b.right()
        && a.right() >= b.x as i64
        && a.y as i64 <= b.bottom()
        && a.bottom() >= b.y as i64
}

/// Collision plus a non-empty raw intersection; yields the intersection area.
#[inline]
pub fn overlap_area(a: &Rect, b: &Rect, coeff: f32) -> Option<i64> {
    if !is_collide_by_rectangle(a, b, coeff) {
        return None;
    }

    let r = a.intersect(b);
    if r.width > 0 && r.height > 0 {
        Some(r.area())
    } else {
        None
    }
}
