//! Build-support tools for the BrightSide app
//!
//! Two standalone generators share this crate: `gen-legal-html` converts the
//! legal markdown documents into styled static HTML pages, and `gen-app-icon`
//! draws the launcher sun icon at 1024x1024. Both read nothing but fixed
//! paths under the app checkout and hard-coded brand constants.
//!
//! # Example
//!
//! ```rust
//! use brightside_tools::brand::Palette;
//! use brightside_tools::docs;
//!
//! let page = docs::render_document("# Hello", "Privacy Policy", &Palette::default());
//! assert!(page.contains("<h1>Hello</h1>"));
//! assert!(page.contains("<title>Privacy Policy - BrightSide</title>"));
//! ```

pub mod brand;
pub mod docs;
pub mod icon;
pub mod project;

pub use brand::Palette;
pub use docs::{convert_document, render_document, DocError};
pub use icon::{generate, rasterize, IconConfig, IconError};
