use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Axis-aligned integer rectangle: left-top corner and width-height
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its left-top and right-bottom corners
    #[inline]
    pub fn from_corners(tl: na::Point2<i32>, br: na::Point2<i32>) -> Self {
        Self::new(tl.x, tl.y, br.x - tl.x, br.y - tl.y)
    }

    #[inline(always)]
    pub fn tl(&self) -> na::Point2<i32> {
        na::Point2::new(self.x, self.y)
    }

    /// Right-bottom corner, saturating at the `i32` range
    #[inline(always)]
    pub fn br(&self) -> na::Point2<i32> {
        na::Point2::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    /// Computed in `i64`, a 50000x50000 detection does not overflow
    #[inline(always)]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    #[inline(always)]
    pub(crate) fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    #[inline(always)]
    pub(crate) fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exact center, as the midpoint of `tl` and `br`
    #[inline]
    pub fn center(&self) -> na::Point2<f64> {
        na::Point2::new(
            self.x as f64 + self.width as f64 * 0.5,
            self.y as f64 + self.height as f64 * 0.5,
        )
    }

    /// Intersection of both rectangles, an empty default rect if they do not overlap
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 <= x1 as i64 || y2 <= y1 as i64 {
            return Rect::default();
        }

        // bounded by the narrower width and height, so it fits back into i32
        Rect::new(x1, y1, (x2 - x1 as i64) as i32, (y2 - y1 as i64) as i32)
    }

    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl From<[i32; 4]> for Rect {
    #[inline]
    fn from(v: [i32; 4]) -> Self {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rect> for [i32; 4] {
    #[inline]
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.width, r.height]
    }
}
