//! Launcher icon generation
//!
//! Draws the BrightSide sun (a filled disc ringed by twelve triangular
//! rays) and writes it as a PNG at launcher resolution. Two variants share
//! one drawing routine: the opaque launcher icon and the transparent
//! adaptive-icon foreground.

mod config;
mod geometry;
mod raster;

pub use config::{Background, IconConfig};
pub use geometry::{ray_angles, ray_triangle, Point, RayTriangle};
pub use raster::rasterize;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::brand::Palette;

/// Errors that can occur while generating an icon
#[derive(Debug, Error)]
pub enum IconError {
    /// Pixmap allocation failed
    #[error("could not allocate a {size}x{size} canvas")]
    Canvas { size: u32 },

    /// Disc or ray path construction failed
    #[error("degenerate sun geometry")]
    Geometry,

    /// PNG encoding failed
    #[error("failed to encode PNG: {0}")]
    Encode(String),

    /// Output directory could not be created
    #[error("failed to create icon directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// Output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Rasterize one variant and write it as a PNG file
///
/// The target directory is created if absent. The file is either fully
/// written or not written at all; encoding happens before anything touches
/// the filesystem.
pub fn generate(config: &IconConfig, palette: &Palette, path: &Path) -> Result<(), IconError> {
    let pixmap = raster::rasterize(config, palette)?;
    let png = pixmap
        .encode_png()
        .map_err(|e| IconError::Encode(e.to_string()))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, png).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })
}
