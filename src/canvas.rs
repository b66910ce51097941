//! The in-memory pixel grid that glyphs are drawn onto.
//!
//! A [`Canvas`] is a fixed-size square RGBA buffer initialized to a solid
//! background color. Drawing happens through [`Canvas::blend`], which
//! alpha-blends anti-aliased glyph coverage into the buffer and silently
//! clips writes that land outside the canvas.

use image::{Rgba, RgbaImage};

/// A square pixel grid with a solid background.
///
/// The canvas is owned by the generation routine for its entire lifetime:
/// allocated once, drawn onto, then consumed by the save steps.
///
/// # Example
///
/// ```
/// use favigen::Canvas;
/// use image::Rgba;
///
/// let mut canvas = Canvas::filled(32, Rgba([0x18, 0x90, 0xff, 0xff]));
/// canvas.blend(16, 16, Rgba([255, 255, 255, 255]), 0.5);
/// assert_eq!(canvas.size(), 32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a `size`×`size` canvas filled with the background color.
    pub fn filled(size: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, background),
        }
    }

    /// Returns the side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Blends `color` into the pixel at `(x, y)` with the given coverage.
    ///
    /// Coverage is the anti-aliasing weight in `0.0..=1.0` produced by the
    /// rasterizer. Writes outside the canvas bounds are discarded, so glyphs
    /// that overhang the edge simply get clipped.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let alpha = (coverage * color.0[3] as f32 / 255.0).clamp(0.0, 1.0);
        let inv_alpha = 1.0 - alpha;
        let bg = self.image.get_pixel(x, y);
        let blended = Rgba([
            (color.0[0] as f32 * alpha + bg.0[0] as f32 * inv_alpha) as u8,
            (color.0[1] as f32 * alpha + bg.0[1] as f32 * inv_alpha) as u8,
            (color.0[2] as f32 * alpha + bg.0[2] as f32 * inv_alpha) as u8,
            255,
        ]);
        self.image.put_pixel(x, y, blended);
    }

    /// Makes the four corners transparent outside a quarter-circle of the
    /// given radius, giving the icon rounded corners.
    ///
    /// A radius of zero leaves the canvas untouched.
    pub fn round_corners(&mut self, radius: u32) {
        if radius == 0 {
            return;
        }
        let size = self.size() as i32;
        let r = radius as i32;

        for y in 0..size {
            for x in 0..size {
                // Only pixels inside one of the four r×r corner cells can be
                // outside the rounded outline.
                let cx = if x < r {
                    Some(r - 1)
                } else if x >= size - r {
                    Some(size - r)
                } else {
                    None
                };
                let cy = if y < r {
                    Some(r - 1)
                } else if y >= size - r {
                    Some(size - r)
                } else {
                    None
                };
                if let (Some(cx), Some(cy)) = (cx, cy) {
                    let dx = x - cx;
                    let dy = y - cy;
                    if dx * dx + dy * dy > r * r {
                        self.image.put_pixel(x as u32, y as u32, Rgba([0, 0, 0, 0]));
                    }
                }
            }
        }
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Borrows the underlying image buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas, returning the underlying image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
