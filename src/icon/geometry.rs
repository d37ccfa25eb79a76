//! Ray geometry for the sun glyph
//!
//! All math is in canvas coordinates (y down). Ray 0 points along the
//! positive x axis; the remaining rays are spaced evenly around the disc
//! with no overlap and no gap in the angular partition.

use std::f64::consts::TAU;

use super::config::IconConfig;

/// A 2D point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A single triangular ray, pointing radially outward
#[derive(Debug, Clone, Copy)]
pub struct RayTriangle {
    /// Base vertex offset to one side of the ray axis
    pub base_a: Point,
    /// Base vertex offset to the other side
    pub base_b: Point,
    /// Outer tip of the ray
    pub apex: Point,
}

impl RayTriangle {
    pub fn vertices(&self) -> [Point; 3] {
        [self.base_a, self.base_b, self.apex]
    }
}

/// Angles of `count` rays, evenly spaced over the full circle
pub fn ray_angles(count: u32) -> Vec<f64> {
    (0..count)
        .map(|i| TAU * f64::from(i) / f64::from(count))
        .collect()
}

/// Compute the triangle for the ray at `angle`
///
/// The two base vertices sit at the base distance from `center`, offset
/// half the ray width to either side of the ray axis; the apex extends
/// `ray_length` further out along the axis.
pub fn ray_triangle(center: Point, angle: f64, config: &IconConfig) -> RayTriangle {
    let (sin, cos) = angle.sin_cos();
    let base = config.ray_base_distance();
    let half_width = config.ray_width / 2.0;

    let base_x = center.x + cos * base;
    let base_y = center.y + sin * base;
    // Perpendicular to the ray axis: the direction rotated a quarter turn
    let offset_x = -sin * half_width;
    let offset_y = cos * half_width;

    let tip = base + config.ray_length;

    RayTriangle {
        base_a: Point::new(base_x + offset_x, base_y + offset_y),
        base_b: Point::new(base_x - offset_x, base_y - offset_y),
        apex: Point::new(center.x + cos * tip, center.y + sin * tip),
    }
}
