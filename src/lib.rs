//! favigen: Single-letter favicon generation
//!
//! This crate renders a single letter centered on a small square canvas and
//! persists it as a favicon in PNG and ICO form. The pipeline is a strictly
//! linear, single-pass procedure with two expected degradation points, both
//! modeled as values rather than process failures:
//!
//! - If PNG encoding support is unavailable, the run finishes cleanly with
//!   [`Outcome::CapabilityUnavailable`] and writes nothing.
//! - If the ICO save step fails, the error is caught into
//!   [`IcoOutcome::Failed`] and the PNG already written is unaffected.
//!
//! # Example
//!
//! ```no_run
//! use favigen::{IconGenerator, IconSpec, IcoOutcome, Outcome};
//!
//! let spec = IconSpec::default().with_output_dir("assets");
//! match IconGenerator::new(spec).run().unwrap() {
//!     Outcome::Generated(report) => {
//!         println!("PNG at {}", report.png_path.display());
//!         if let IcoOutcome::Failed { error, .. } = report.ico {
//!             eprintln!("ICO skipped: {error}");
//!         }
//!     }
//!     Outcome::CapabilityUnavailable => {
//!         eprintln!("PNG encoding not available in this build");
//!     }
//! }
//! ```
//!
//! # Custom Specs
//!
//! All inputs are captured in a serializable [`IconSpec`] whose defaults
//! equal the stock favicon: a white "K" at 24 px on a 32×32 `#1890ff`
//! square, written to `./src/favicon-32x32.png` and `./src/favicon.ico`.
//!
//! ```
//! use favigen::IconSpec;
//!
//! let spec = IconSpec::default()
//!     .with_glyph('R')
//!     .with_background("#d4380d")
//!     .with_corner_radius(4);
//! let json = spec.to_json().unwrap();
//! ```

mod canvas;
mod error;
mod font;
mod generator;
mod layout;
mod profile;

pub use canvas::Canvas;
pub use error::GenerateError;
pub use font::{BitmapFont, FontCandidate, FontHandle};
pub use generator::{IconGenerator, IcoOutcome, Outcome, Report};
pub use layout::{centered_origin, GlyphBounds};
pub use profile::{
    IconSpec, DEFAULT_BACKGROUND, DEFAULT_FONT_PX, DEFAULT_FOREGROUND, DEFAULT_GLYPH,
    DEFAULT_SIZE, DEFAULT_VERTICAL_NUDGE,
};
