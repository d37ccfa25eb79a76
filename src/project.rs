//! Project layout and root inference
//!
//! The tool crate lives in `tool/` of the BrightSide checkout, so the app
//! root is the parent of the crate manifest directory. All input and output
//! paths are fixed relative to that root; nothing is read from the
//! environment.

use std::path::{Path, PathBuf};

/// Root of the app checkout
pub fn project_root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().unwrap_or(manifest).to_path_buf()
}

/// Markdown sources for the legal documents
pub fn legal_source_dir() -> PathBuf {
    project_root().join("docs").join("legal")
}

/// Destination for the generated legal pages
pub fn legal_web_dir() -> PathBuf {
    project_root().join("legal-web")
}

/// Destination for the generated launcher icons
pub fn icon_dir() -> PathBuf {
    project_root().join("assets").join("icon")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_hang_off_project_root() {
        let root = project_root();
        assert!(legal_source_dir().starts_with(&root));
        assert!(legal_web_dir().starts_with(&root));
        assert!(icon_dir().starts_with(&root));
    }

    #[test]
    fn test_fixed_layout() {
        assert!(legal_source_dir().ends_with("docs/legal"));
        assert!(legal_web_dir().ends_with("legal-web"));
        assert!(icon_dir().ends_with("assets/icon"));
    }
}
