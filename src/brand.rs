//! Brand palette shared by the document and icon generators
//!
//! Symbolic color tokens resolve to concrete hex values from an embedded
//! TOML table, so both generators agree on the BrightSide colors without
//! scattering hex literals. The palette is a process-local constant; there
//! is no palette file loading.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing a palette
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to parse palette TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A palette mapping symbolic tokens to hex colors
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// BrightSide brand colors
const BRAND_PALETTE: &str = r##"
[metadata]
name = "BrightSide"

[colors]
# Accent (the sun)
primary = "#FFB800"

# Text
ink = "#212121"
muted = "#757575"

# Surfaces
canvas = "#fafafa"
surface = "#ffffff"
border = "#e0e0e0"
row-alt = "#f5f5f5"
"##;

impl Palette {
    /// Parse a palette from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the brand palette
    ///
    /// Unknown tokens fall back to the `ink` text color so a typo never
    /// produces invalid CSS.
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let brand = Self::default();
        if let Some(color) = brand.resolve(token) {
            return color.to_string();
        }

        "#212121".to_string()
    }

    /// Resolve a token to RGB channels for the rasterizer
    pub fn rgb_or_default(&self, token: &str) -> (u8, u8, u8) {
        parse_hex_rgb(&self.resolve_or_default(token)).unwrap_or((0x21, 0x21, 0x21))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(BRAND_PALETTE).expect("embedded brand palette should be valid TOML")
    }
}

/// Parse a `#rgb` or `#rrggbb` color into channels
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let n = u16::from_str_radix(digits, 16).ok()?;
            let r = ((n >> 8) & 0xf) as u8;
            let g = ((n >> 4) & 0xf) as u8;
            let b = (n & 0xf) as u8;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let n = u32::from_str_radix(digits, 16).ok()?;
            Some((
                ((n >> 16) & 0xff) as u8,
                ((n >> 8) & 0xff) as u8,
                (n & 0xff) as u8,
            ))
        }
        _ => None,
    }
}
