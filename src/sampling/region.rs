//! Sample regions in image pixel coordinates
//!
//! Regions are requested with floating-point coordinates (they usually come
//! from a keypoint plus an offset) and may hang off any edge of the image.
//! Clamping turns them into integer pixel bounds that are always safe to
//! index.

use serde::{Deserialize, Serialize};

use crate::constants::regions;

/// A point in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Requested sample rectangle; may be partially or fully outside the image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Integer pixel bounds `[x0, x1) × [y0, y1)` inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedRegion {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl ClampedRegion {
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

impl Region {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Region anchored at `point + offset` with the given size
    pub fn around(point: Point, offset: (f64, f64), size: (f64, f64)) -> Self {
        Self::new(point.x + offset.0, point.y + offset.1, size.0, size.1)
    }

    /// Centered square covering a fraction of the smaller image side
    ///
    /// Used as the face region when no keypoints are available. The left/top
    /// edge never goes below zero and the size never runs past the image.
    pub fn centered(image_width: u32, image_height: u32, fraction: f64) -> Self {
        let (w, h) = (image_width as f64, image_height as f64);
        let center_x = (image_width / 2) as f64;
        let center_y = (image_height / 2) as f64;
        let size = w.min(h) * fraction;

        let left = (center_x - size / 2.0).max(0.0);
        let top = (center_y - size / 2.0).max(0.0);

        Self::new(left, top, size.min(w - left), size.min(h - top))
    }

    /// Centered fallback face region with the default fraction
    pub fn center_face(image_width: u32, image_height: u32) -> Self {
        Self::centered(image_width, image_height, regions::CENTER_FRACTION)
    }

    /// Clamp to `[0, image_width) × [0, image_height)`
    ///
    /// Start coordinates are floored and lower-bounded at 0, end coordinates
    /// are floored and upper-bounded at the image size. A region that misses
    /// the image entirely clamps to an empty region.
    pub fn clamp(&self, image_width: u32, image_height: u32) -> ClampedRegion {
        let x0 = floor_to_pixel(self.x).clamp(0, image_width as i64);
        let y0 = floor_to_pixel(self.y).clamp(0, image_height as i64);
        let x1 = floor_to_pixel(self.x + self.width).clamp(0, image_width as i64);
        let y1 = floor_to_pixel(self.y + self.height).clamp(0, image_height as i64);

        ClampedRegion {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        }
    }
}

/// Saturating floor; NaN maps to 0
fn floor_to_pixel(v: f64) -> i64 {
    v.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside() {
        let c = Region::new(2.0, 3.0, 4.0, 5.0).clamp(10, 10);
        assert_eq!(c, ClampedRegion { x0: 2, y0: 3, x1: 6, y1: 8 });
        assert_eq!((c.width(), c.height()), (4, 5));
    }

    #[test]
    fn test_clamp_floors_fractional_coordinates() {
        let c = Region::new(1.7, 2.2, 3.6, 3.9).clamp(10, 10);
        // end = floor(1.7 + 3.6) = 5, floor(2.2 + 3.9) = 6
        assert_eq!(c, ClampedRegion { x0: 1, y0: 2, x1: 5, y1: 6 });
    }

    #[test]
    fn test_clamp_negative_origin() {
        let c = Region::new(-5.0, -5.0, 10.0, 10.0).clamp(20, 20);
        assert_eq!(c, ClampedRegion { x0: 0, y0: 0, x1: 5, y1: 5 });
    }

    #[test]
    fn test_clamp_past_far_edge() {
        let c = Region::new(15.0, 15.0, 10.0, 10.0).clamp(20, 18);
        assert_eq!(c, ClampedRegion { x0: 15, y0: 15, x1: 20, y1: 18 });
    }

    #[test]
    fn test_clamp_fully_outside_is_empty() {
        assert!(Region::new(30.0, 0.0, 5.0, 5.0).clamp(20, 20).is_empty());
        assert!(Region::new(-10.0, -10.0, 5.0, 5.0).clamp(20, 20).is_empty());
        assert!(Region::new(0.0, 0.0, 0.0, 5.0).clamp(20, 20).is_empty());
        assert!(Region::new(5.0, 5.0, -3.0, 5.0).clamp(20, 20).is_empty());
    }

    #[test]
    fn test_clamp_nan_is_empty() {
        assert!(Region::new(f64::NAN, 0.0, f64::NAN, 5.0).clamp(20, 20).is_empty());
    }

    #[test]
    fn test_centered_region() {
        let r = Region::centered(100, 200, 0.3);
        assert_eq!(r, Region::new(35.0, 85.0, 30.0, 30.0));
    }

    #[test]
    fn test_centered_region_odd_size() {
        // center = (floor(11/2), floor(11/2)) = (5, 5), size = 3.3
        let r = Region::center_face(11, 11);
        assert!((r.x - 3.35).abs() < 1e-9);
        assert!((r.width - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_around_and_midpoint() {
        let mid = Point::new(10.0, 20.0).midpoint(&Point::new(30.0, 40.0));
        assert_eq!(mid, Point::new(20.0, 30.0));
        let r = Region::around(mid, (-20.0, -15.0), (40.0, 30.0));
        assert_eq!(r, Region::new(0.0, 15.0, 40.0, 30.0));
    }
}
