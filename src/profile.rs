//! Serializable generation settings.
//!
//! An [`IconSpec`] captures every input to the generator in a format that can
//! be stored or exchanged as JSON. All inputs are constants with defaults
//! equal to the stock favicon: a white "K" at 24 px, centered on a 32×32
//! `#1890ff` square, written to `./src/favicon-32x32.png` and
//! `./src/favicon.ico`.
//!
//! # Example
//!
//! ```
//! use favigen::IconSpec;
//!
//! let spec = IconSpec::default()
//!     .with_glyph('R')
//!     .with_background("#d4380d");
//!
//! let json = spec.to_json().unwrap();
//! let restored = IconSpec::from_json(&json).unwrap();
//! assert_eq!(spec, restored);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::font::FontCandidate;

/// Default canvas side length in pixels.
pub const DEFAULT_SIZE: u32 = 32;

/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#1890ff";

/// Default glyph color.
pub const DEFAULT_FOREGROUND: &str = "#ffffff";

/// Default glyph.
pub const DEFAULT_GLYPH: char = 'K';

/// Default nominal font size in pixels.
pub const DEFAULT_FONT_PX: f32 = 24.0;

/// Default manual correction applied to the vertical centering offset.
pub const DEFAULT_VERTICAL_NUDGE: i32 = -2;

/// Complete set of inputs for one generation run.
///
/// Serializes with camelCase field names. Every field has a default, so a
/// partial JSON document fills in the stock favicon settings for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconSpec {
    /// Canvas side length in pixels.
    pub size: u32,

    /// Background color as a hex string, e.g. `"#1890ff"`.
    pub background: String,

    /// Glyph color as a hex string.
    pub foreground: String,

    /// The character to draw.
    pub glyph: char,

    /// Nominal font size in pixels.
    pub font_px: f32,

    /// Manual correction applied to the vertical centering offset.
    pub vertical_nudge: i32,

    /// Corner radius for a rounded-corner mask; 0 keeps square corners.
    pub corner_radius: u32,

    /// Ordered font fallback chain; first candidate that loads wins.
    pub font_candidates: Vec<FontCandidate>,

    /// Where the PNG is written.
    pub png_path: PathBuf,

    /// Where the ICO is written.
    pub ico_path: PathBuf,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            glyph: DEFAULT_GLYPH,
            font_px: DEFAULT_FONT_PX,
            vertical_nudge: DEFAULT_VERTICAL_NUDGE,
            corner_radius: 0,
            font_candidates: vec![
                FontCandidate::new("/System/Library/Fonts/Helvetica.ttc"),
                FontCandidate::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            ],
            png_path: PathBuf::from("./src/favicon-32x32.png"),
            ico_path: PathBuf::from("./src/favicon.ico"),
        }
    }
}

impl IconSpec {
    /// Creates a spec with the stock favicon settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph to draw.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Sets the background color from a hex string.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the foreground color from a hex string.
    pub fn with_foreground(mut self, foreground: impl Into<String>) -> Self {
        self.foreground = foreground.into();
        self
    }

    /// Sets the corner radius for the rounded-corner mask.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Redirects both outputs into the given directory, keeping the stock
    /// file names.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.png_path = dir.join("favicon-32x32.png");
        self.ico_path = dir.join("favicon.ico");
        self
    }

    /// Serializes to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
