//! Per-variant icon parameters

use super::geometry::Point;

/// Canvas background mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Opaque canvas filled with the brand surface color
    Opaque,
    /// Fully transparent canvas (adaptive-icon foreground)
    Transparent,
}

/// Parameters for one icon variant
///
/// Both shipped variants share the drawing routine; only these numbers
/// differ.
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Canvas width and height in pixels
    pub size: u32,
    /// Canvas background mode
    pub background: Background,
    /// Radius of the sun disc
    pub sun_radius: f64,
    /// Number of rays around the disc
    pub ray_count: u32,
    /// Radial length of each ray
    pub ray_length: f64,
    /// Width of each ray at its base
    pub ray_width: f64,
    /// Gap between the disc edge and the ray bases
    pub ray_gap: f64,
}

impl IconConfig {
    /// Launcher icon: opaque background, 180px sun
    pub fn app_icon() -> Self {
        Self {
            size: 1024,
            background: Background::Opaque,
            sun_radius: 180.0,
            ray_count: 12,
            ray_length: 120.0,
            ray_width: 40.0,
            ray_gap: 30.0,
        }
    }

    /// Adaptive-icon foreground: transparent background, slightly larger
    /// sun so the glyph survives the launcher mask
    pub fn adaptive_foreground() -> Self {
        Self {
            size: 1024,
            background: Background::Transparent,
            sun_radius: 200.0,
            ray_count: 12,
            ray_length: 140.0,
            ray_width: 45.0,
            ray_gap: 30.0,
        }
    }

    /// Distance from the canvas center to a ray's base edge
    pub fn ray_base_distance(&self) -> f64 {
        self.sun_radius + self.ray_gap
    }

    /// Canvas center point
    pub fn center(&self) -> Point {
        let mid = f64::from(self.size) / 2.0;
        Point::new(mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_icon_constants() {
        let config = IconConfig::app_icon();
        assert_eq!(config.size, 1024);
        assert_eq!(config.background, Background::Opaque);
        assert_eq!(config.sun_radius, 180.0);
        assert_eq!(config.ray_count, 12);
        assert_eq!(config.ray_base_distance(), 210.0);
    }

    #[test]
    fn test_adaptive_foreground_constants() {
        let config = IconConfig::adaptive_foreground();
        assert_eq!(config.background, Background::Transparent);
        assert_eq!(config.sun_radius, 200.0);
        assert_eq!(config.ray_length, 140.0);
        assert_eq!(config.ray_width, 45.0);
        assert_eq!(config.ray_base_distance(), 230.0);
    }

    #[test]
    fn test_center_is_canvas_midpoint() {
        let config = IconConfig::app_icon();
        assert_eq!(config.center(), Point::new(512.0, 512.0));
    }
}
