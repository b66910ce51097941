//! Glyph measurement and centering math.
//!
//! The generator measures the rendered extent of the glyph once, computes a
//! centered origin from canvas size minus text extent, applies a small fixed
//! vertical correction, and discards the measurement.

/// The measured pixel extent of a rendered glyph.
///
/// Only the extent matters: glyphs are rasterized relative to their own
/// bounding box origin, so centering needs width and height alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBounds {
    /// Width of the inked area in pixels.
    pub width: u32,
    /// Height of the inked area in pixels.
    pub height: u32,
}

impl GlyphBounds {
    /// An empty bounding box. Centering an empty box draws nothing.
    pub const EMPTY: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a bounding box from the given extent.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a bounding box from edge offsets, in the manner of a text
    /// `bbox` tuple: `(min_x, min_y, max_x, max_y)`.
    pub fn from_edges(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            width: (max_x - min_x).max(0) as u32,
            height: (max_y - min_y).max(0) as u32,
        }
    }

    /// Returns `true` if the box covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Computes the top-left origin that centers `bounds` on a `size`×`size`
/// canvas.
///
/// `vertical_nudge` is a fixed manual correction applied to the vertical
/// offset; glyph metrics tend to sit a couple of pixels low for a lone
/// capital letter, so the default spec uses −2.
pub fn centered_origin(size: u32, bounds: GlyphBounds, vertical_nudge: i32) -> (i32, i32) {
    let x = (size as i32 - bounds.width as i32) / 2;
    let y = (size as i32 - bounds.height as i32) / 2 + vertical_nudge;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_computes_extent() {
        let bounds = GlyphBounds::from_edges(1, 5, 17, 23);
        assert_eq!(bounds, GlyphBounds::new(16, 18));
        assert!(!bounds.is_empty());
    }

    #[test]
    fn edge_offsets_do_not_affect_centering() {
        // Rasterization is bbox-relative, so two boxes with the same extent
        // but different edge offsets center identically.
        let at_origin = GlyphBounds::from_edges(0, 0, 16, 18);
        let offset = GlyphBounds::from_edges(2, -17, 18, 1);
        assert_eq!(at_origin, offset);
        assert_eq!(
            centered_origin(32, at_origin, -2),
            centered_origin(32, offset, -2),
        );
    }

    #[test]
    fn inverted_edges_clamp_to_empty() {
        let bounds = GlyphBounds::from_edges(10, 10, 4, 4);
        assert!(bounds.is_empty());
    }

    #[test]
    fn even_glyph_centers_exactly() {
        let bounds = GlyphBounds::from_edges(0, 0, 16, 18);
        let (x, y) = centered_origin(32, bounds, 0);
        assert_eq!((x, y), (8, 7));
    }

    #[test]
    fn vertical_nudge_shifts_up() {
        let bounds = GlyphBounds::from_edges(0, 0, 16, 18);
        let (_, y) = centered_origin(32, bounds, -2);
        assert_eq!(y, 5);
    }

    #[test]
    fn odd_remainder_rounds_toward_zero() {
        // 32 - 15 = 17, so the glyph sits at 8 with 9 pixels of slack on
        // the other side, matching integer-division centering.
        let bounds = GlyphBounds::from_edges(0, 0, 15, 15);
        let (x, y) = centered_origin(32, bounds, 0);
        assert_eq!((x, y), (8, 8));
    }

    #[test]
    fn glyph_larger_than_canvas_goes_negative() {
        let bounds = GlyphBounds::from_edges(0, 0, 40, 40);
        let (x, _) = centered_origin(32, bounds, 0);
        assert_eq!(x, -4);
    }
}
