//! Font resolution and glyph rasterization.
//!
//! The generator picks one font at startup by walking an ordered list of
//! candidate system font paths; the first one that loads wins. If none load,
//! the built-in [`BitmapFont`] takes over. Resolution always succeeds in some
//! form and no failure along the chain is ever surfaced.

pub mod builtin;

use std::fs;
use std::path::PathBuf;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use serde::{Deserialize, Serialize};

use crate::layout::GlyphBounds;

pub use builtin::BitmapFont;

// ============================================================================
// Font Candidates
// ============================================================================

/// One entry on the font fallback chain.
///
/// The `index` selects a face inside a font collection (`.ttc`); plain
/// `.ttf`/`.otf` files use index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCandidate {
    /// Filesystem path to the font resource.
    pub path: PathBuf,

    /// Face index within a collection file.
    #[serde(default)]
    pub index: u32,
}

impl FontCandidate {
    /// Creates a candidate for the given path at face index 0.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: 0,
        }
    }
}

// ============================================================================
// FontHandle
// ============================================================================

/// The glyph-rendering resource selected at startup. Immutable once resolved.
pub enum FontHandle {
    /// An outline font loaded from a candidate path, rasterized via ab_glyph.
    Outline(FontVec),

    /// The built-in 5×7 bitmap fallback.
    Builtin,
}

impl FontHandle {
    /// Walks the candidate list and returns the first font that loads,
    /// falling back to the built-in bitmap face.
    ///
    /// Load failures (missing file, unreadable file, unparsable font) fall
    /// through to the next candidate without being surfaced.
    pub fn resolve(candidates: &[FontCandidate]) -> Self {
        for candidate in candidates {
            let Ok(data) = fs::read(&candidate.path) else {
                continue;
            };
            if let Ok(font) = FontVec::try_from_vec_and_index(data, candidate.index) {
                return Self::Outline(font);
            }
        }
        Self::Builtin
    }

    /// Returns `true` if resolution fell through to the bitmap fallback.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Measures the inked bounding box of `c` at the given nominal pixel
    /// size. Characters with no glyph measure as empty.
    pub fn measure(&self, c: char, px: f32) -> GlyphBounds {
        match self {
            Self::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(px));
                let glyph = scaled.scaled_glyph(c);
                match scaled.outline_glyph(glyph) {
                    Some(outlined) => {
                        let b = outlined.px_bounds();
                        GlyphBounds::from_edges(
                            b.min.x.floor() as i32,
                            b.min.y.floor() as i32,
                            b.max.x.ceil() as i32,
                            b.max.y.ceil() as i32,
                        )
                    }
                    None => GlyphBounds::EMPTY,
                }
            }
            Self::Builtin => {
                if BitmapFont::glyph(c).is_none() {
                    return GlyphBounds::EMPTY;
                }
                let scale = BitmapFont::scale_for(px);
                GlyphBounds::new(
                    builtin::GLYPH_WIDTH * scale,
                    builtin::GLYPH_HEIGHT * scale,
                )
            }
        }
    }

    /// Rasterizes `c` at the given nominal pixel size, invoking `draw` with
    /// `(x, y, coverage)` for each inked pixel relative to the glyph's
    /// bounding box origin.
    pub fn rasterize(&self, c: char, px: f32, mut draw: impl FnMut(u32, u32, f32)) {
        match self {
            Self::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(px));
                let glyph = scaled.scaled_glyph(c);
                if let Some(outlined) = scaled.outline_glyph(glyph) {
                    outlined.draw(|x, y, coverage| draw(x, y, coverage));
                }
            }
            Self::Builtin => {
                let Some(rows) = BitmapFont::glyph(c) else {
                    return;
                };
                let scale = BitmapFont::scale_for(px);
                for (row_idx, row) in rows.iter().enumerate() {
                    for col in 0..builtin::GLYPH_WIDTH {
                        if row & (1 << (builtin::GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        for dy in 0..scale {
                            for dx in 0..scale {
                                draw(
                                    col * scale + dx,
                                    row_idx as u32 * scale + dy,
                                    1.0,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline(_) => f.write_str("FontHandle::Outline(..)"),
            Self::Builtin => f.write_str("FontHandle::Builtin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_list_resolves_to_builtin() {
        let font = FontHandle::resolve(&[]);
        assert!(font.is_builtin());
    }

    #[test]
    fn unavailable_candidates_fall_through_to_builtin() {
        let candidates = [
            FontCandidate::new("/nonexistent/fonts/First.ttc"),
            FontCandidate::new("/nonexistent/fonts/Second-Bold.ttf"),
        ];
        let font = FontHandle::resolve(&candidates);
        assert!(font.is_builtin());
    }

    #[test]
    fn garbage_font_file_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not sfnt data").unwrap();
        let font = FontHandle::resolve(&[FontCandidate::new(&path)]);
        assert!(font.is_builtin());
    }

    #[test]
    fn builtin_measure_scales_glyph_cell() {
        let font = FontHandle::Builtin;
        let bounds = font.measure('K', 24.0);
        assert_eq!(bounds.width, 15);
        assert_eq!(bounds.height, 21);
    }

    #[test]
    fn builtin_measure_of_unknown_char_is_empty() {
        let font = FontHandle::Builtin;
        assert!(font.measure('!', 24.0).is_empty());
    }

    #[test]
    fn builtin_rasterize_covers_set_bits() {
        let font = FontHandle::Builtin;
        let mut count = 0u32;
        font.rasterize('K', 24.0, |_, _, coverage| {
            assert_eq!(coverage, 1.0);
            count += 1;
        });
        // The K bitmap has 14 set bits; scale factor 3 gives 9 pixels each.
        assert_eq!(count, 14 * 9);
    }

    #[test]
    fn builtin_rasterize_stays_inside_measured_bounds() {
        let font = FontHandle::Builtin;
        let bounds = font.measure('K', 24.0);
        font.rasterize('K', 24.0, |x, y, _| {
            assert!(x < bounds.width);
            assert!(y < bounds.height);
        });
    }
}
