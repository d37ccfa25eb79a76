//! Legal document rendering
//!
//! Converts the markdown legal documents into self-contained, styled HTML
//! pages ready for static hosting. The markdown conversion and the page
//! shell live in submodules; this module owns the file pipeline.

mod markdown;
mod template;

pub use markdown::to_fragment;
pub use template::render_page;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::brand::Palette;

/// Errors that can occur while converting a document
#[derive(Debug, Error)]
pub enum DocError {
    /// Source markdown missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Destination directory could not be created
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// Destination file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Render a full HTML page from markdown source
///
/// Pure string transformation: converts the markdown to an HTML fragment
/// and substitutes it into the page shell together with the title and the
/// brand colors.
pub fn render_document(source: &str, title: &str, palette: &Palette) -> String {
    let fragment = markdown::to_fragment(source);
    template::render_page(title, &fragment, palette)
}

/// Convert a markdown file into a styled HTML page on disk
///
/// Reads `md_path` as UTF-8, renders it, and writes the result to
/// `html_path`, creating the destination directory if absent. Nothing is
/// written when the source cannot be read.
pub fn convert_document(
    md_path: &Path,
    html_path: &Path,
    title: &str,
    palette: &Palette,
) -> Result<(), DocError> {
    let source = fs::read_to_string(md_path).map_err(|source| DocError::Read {
        path: md_path.to_path_buf(),
        source,
    })?;

    let page = render_document(&source, title, palette);

    if let Some(dir) = html_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| DocError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(html_path, page).map_err(|source| DocError::Write {
        path: html_path.to_path_buf(),
        source,
    })
}
