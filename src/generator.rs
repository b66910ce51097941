//! The favicon generation pipeline.
//!
//! [`IconGenerator`] runs a strictly linear, single-pass procedure:
//! capability check, canvas allocation, font resolution, text layout,
//! rendering, then PNG and ICO persistence. The two failure points — missing
//! PNG capability and an ICO save error — are modeled as normal outcomes
//! rather than process errors, so a caller can always finish cleanly.
//!
//! # Example
//!
//! ```no_run
//! use favigen::{IconGenerator, IconSpec, Outcome};
//!
//! let generator = IconGenerator::new(IconSpec::default());
//! match generator.run().unwrap() {
//!     Outcome::Generated(report) => println!("wrote {}", report.png_path.display()),
//!     Outcome::CapabilityUnavailable => println!("PNG encoding not available"),
//! }
//! ```

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::codecs::ico::IcoEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgba, RgbaImage};
use palette::Srgb;

use crate::canvas::Canvas;
use crate::error::GenerateError;
use crate::font::FontHandle;
use crate::layout;
use crate::profile::IconSpec;

// ============================================================================
// Outcomes
// ============================================================================

/// The result of a generation run.
///
/// A missing encoding capability is an expected, explicitly modeled outcome,
/// not an error: the run is considered successful either way.
#[derive(Debug)]
pub enum Outcome {
    /// PNG encoding support is not compiled into this build; no files were
    /// written.
    CapabilityUnavailable,

    /// The canvas was rendered and persistence was attempted.
    Generated(Report),
}

/// What a completed run produced.
#[derive(Debug)]
pub struct Report {
    /// Path of the PNG that was written.
    pub png_path: PathBuf,

    /// Result of the independently fallible ICO save step.
    pub ico: IcoOutcome,
}

/// Result of the ICO save step.
///
/// An ICO failure never affects the PNG already written, and never changes
/// the process outcome.
#[derive(Debug)]
pub enum IcoOutcome {
    /// The ICO was written to the given path.
    Saved(PathBuf),

    /// The ICO could not be written; the error is carried for reporting.
    Failed {
        path: PathBuf,
        error: GenerateError,
    },
}

impl IcoOutcome {
    /// Returns `true` if the ICO was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Renders a single-letter icon and persists it as PNG and ICO.
pub struct IconGenerator {
    spec: IconSpec,
    png_support: bool,
}

impl IconGenerator {
    /// Creates a generator for the given spec, probing the `image` crate for
    /// PNG encoding support.
    pub fn new(spec: IconSpec) -> Self {
        Self {
            spec,
            png_support: ImageFormat::Png.writing_enabled(),
        }
    }

    /// Overrides the capability probe. Primarily for tests that simulate an
    /// absent image-encoding capability.
    pub fn with_png_support(mut self, available: bool) -> Self {
        self.png_support = available;
        self
    }

    /// Borrows the spec this generator runs with.
    pub fn spec(&self) -> &IconSpec {
        &self.spec
    }

    /// Runs the full pipeline.
    ///
    /// Returns `Ok` for both expected outcomes. The only `Err` sources are a
    /// malformed color string in the spec and a failed PNG save; a failed
    /// ICO save is caught into [`IcoOutcome::Failed`].
    pub fn run(&self) -> Result<Outcome, GenerateError> {
        if !self.png_support {
            return Ok(Outcome::CapabilityUnavailable);
        }

        let image = self.render()?.into_image();
        self.save_png(&image)?;

        let ico = match self.save_ico(&image) {
            Ok(()) => IcoOutcome::Saved(self.spec.ico_path.clone()),
            Err(error) => IcoOutcome::Failed {
                path: self.spec.ico_path.clone(),
                error,
            },
        };

        Ok(Outcome::Generated(Report {
            png_path: self.spec.png_path.clone(),
            ico,
        }))
    }

    /// Renders the canvas without touching the filesystem: allocation, font
    /// resolution, layout, glyph drawing, and the optional corner mask.
    pub fn render(&self) -> Result<Canvas, GenerateError> {
        let background = parse_color(&self.spec.background)?;
        let foreground = parse_color(&self.spec.foreground)?;

        let mut canvas = Canvas::filled(self.spec.size, background);

        // Selected exactly once, before any drawing.
        let font = FontHandle::resolve(&self.spec.font_candidates);

        let bounds = font.measure(self.spec.glyph, self.spec.font_px);
        let (origin_x, origin_y) =
            layout::centered_origin(self.spec.size, bounds, self.spec.vertical_nudge);

        font.rasterize(self.spec.glyph, self.spec.font_px, |x, y, coverage| {
            canvas.blend(origin_x + x as i32, origin_y + y as i32, foreground, coverage);
        });

        canvas.round_corners(self.spec.corner_radius);
        Ok(canvas)
    }

    fn save_png(&self, image: &RgbaImage) -> Result<(), GenerateError> {
        image
            .save_with_format(&self.spec.png_path, ImageFormat::Png)
            .map_err(|source| GenerateError::PngSave {
                path: self.spec.png_path.clone(),
                source,
            })
    }

    fn save_ico(&self, image: &RgbaImage) -> Result<(), GenerateError> {
        let mut cursor = Cursor::new(Vec::new());
        IcoEncoder::new(&mut cursor)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| GenerateError::IcoEncode {
                path: self.spec.ico_path.clone(),
                source,
            })?;

        fs::write(&self.spec.ico_path, cursor.into_inner()).map_err(|source| {
            GenerateError::IcoWrite {
                path: self.spec.ico_path.clone(),
                source,
            }
        })
    }
}

/// Parses a hex color string like `"#1890ff"` into an opaque RGBA pixel.
fn parse_color(value: &str) -> Result<Rgba<u8>, GenerateError> {
    let rgb: Srgb<u8> = value
        .trim()
        .parse()
        .map_err(|source| GenerateError::InvalidColor {
            value: value.to_string(),
            source,
        })?;
    Ok(Rgba([rgb.red, rgb.green, rgb.blue, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_accepts_hex_with_hash() {
        assert_eq!(parse_color("#1890ff").unwrap(), Rgba([0x18, 0x90, 0xff, 255]));
        assert_eq!(parse_color("#ffffff").unwrap(), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn parse_color_rejects_garbage() {
        let err = parse_color("bluish").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidColor { .. }));
    }

    #[test]
    fn render_fills_background() {
        let generator = IconGenerator::new(IconSpec::default());
        let canvas = generator.render().unwrap();
        assert_eq!(canvas.size(), 32);
        assert_eq!(canvas.pixel(0, 0), Rgba([0x18, 0x90, 0xff, 255]));
        assert_eq!(canvas.pixel(31, 31), Rgba([0x18, 0x90, 0xff, 255]));
    }

    #[test]
    fn render_draws_some_foreground() {
        let generator = IconGenerator::new(IconSpec::default());
        let canvas = generator.render().unwrap();
        let inked = (0..32)
            .flat_map(|y| (0..32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Rgba([0x18, 0x90, 0xff, 255]))
            .count();
        assert!(inked > 0, "glyph left no mark on the canvas");
    }

    #[test]
    fn render_is_deterministic() {
        let generator = IconGenerator::new(IconSpec::default());
        let first = generator.render().unwrap();
        let second = generator.render().unwrap();
        assert_eq!(first.image(), second.image());
    }

    #[test]
    fn missing_capability_short_circuits() {
        let spec = IconSpec::default().with_output_dir("/nonexistent/should-not-be-touched");
        let generator = IconGenerator::new(spec).with_png_support(false);
        let outcome = generator.run().unwrap();
        assert!(matches!(outcome, Outcome::CapabilityUnavailable));
    }

    #[test]
    fn invalid_background_surfaces_before_any_io() {
        let spec = IconSpec::default().with_background("not-a-color");
        let generator = IconGenerator::new(spec);
        assert!(matches!(
            generator.render(),
            Err(GenerateError::InvalidColor { .. })
        ));
    }
}
