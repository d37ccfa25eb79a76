//! Rasterizes the sun glyph with tiny-skia

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::brand::Palette;

use super::config::{Background, IconConfig};
use super::geometry;
use super::IconError;

/// Draw one icon variant into a fresh pixmap
///
/// The canvas starts fully transparent; the opaque variant fills it with
/// the brand surface color first. Disc and rays are all filled with the
/// primary color, anti-aliased.
pub fn rasterize(config: &IconConfig, palette: &Palette) -> Result<Pixmap, IconError> {
    let mut pixmap = Pixmap::new(config.size, config.size)
        .ok_or(IconError::Canvas { size: config.size })?;

    if config.background == Background::Opaque {
        let (r, g, b) = palette.rgb_or_default("surface");
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    let (r, g, b) = palette.rgb_or_default("primary");
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;

    let center = config.center();

    let sun = PathBuilder::from_circle(
        center.x as f32,
        center.y as f32,
        config.sun_radius as f32,
    )
    .ok_or(IconError::Geometry)?;
    pixmap.fill_path(&sun, &paint, FillRule::Winding, Transform::identity(), None);

    for angle in geometry::ray_angles(config.ray_count) {
        let tri = geometry::ray_triangle(center, angle, config);
        let mut pb = PathBuilder::new();
        pb.move_to(tri.base_a.x as f32, tri.base_a.y as f32);
        pb.line_to(tri.base_b.x as f32, tri.base_b.y as f32);
        pb.line_to(tri.apex.x as f32, tri.apex.y as f32);
        pb.close();
        let ray = pb.finish().ok_or(IconError::Geometry)?;
        pixmap.fill_path(&ray, &paint, FillRule::Winding, Transform::identity(), None);
    }

    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_matches_configured_size() {
        let pixmap = rasterize(&IconConfig::app_icon(), &Palette::default()).unwrap();
        assert_eq!(pixmap.width(), 1024);
        assert_eq!(pixmap.height(), 1024);
    }

    #[test]
    fn test_opaque_background_is_surface_color() {
        let pixmap = rasterize(&IconConfig::app_icon(), &Palette::default()).unwrap();
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(
            (corner.red(), corner.green(), corner.blue(), corner.alpha()),
            (255, 255, 255, 255)
        );
    }

    #[test]
    fn test_transparent_background_stays_clear() {
        let pixmap = rasterize(&IconConfig::adaptive_foreground(), &Palette::default()).unwrap();
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn test_sun_fill_is_primary_color() {
        let pixmap = rasterize(&IconConfig::adaptive_foreground(), &Palette::default()).unwrap();
        let center = pixmap.pixel(512, 512).unwrap();
        assert_eq!(
            (center.red(), center.green(), center.blue(), center.alpha()),
            (255, 184, 0, 255)
        );
    }
}
