//! Built-in minimal fallback font.
//!
//! A 5×7 bitmap face covering ASCII uppercase letters and digits. It exists
//! so that font resolution can never fail: when no system font on the
//! candidate list loads, the generator still renders something legible.

/// Width of a bitmap glyph cell in font units.
pub const GLYPH_WIDTH: u32 = 5;

/// Height of a bitmap glyph cell in font units.
pub const GLYPH_HEIGHT: u32 = 7;

/// The built-in 5×7 bitmap face.
///
/// Each glyph is seven rows of five bits, most significant bit leftmost.
/// Lowercase letters map onto their uppercase forms; characters outside the
/// table render as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// Returns the glyph rows for `c`, or `None` if the face has no glyph.
    pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
        let c = c.to_ascii_uppercase();
        match c {
            'A'..='Z' => Some(&LETTERS[(c as u8 - b'A') as usize]),
            '0'..='9' => Some(&DIGITS[(c as u8 - b'0') as usize]),
            _ => None,
        }
    }

    /// Integer upscale factor that best matches a nominal pixel size.
    ///
    /// The bitmap face only scales by whole factors; a 24 px request maps to
    /// factor 3 (a 15×21 glyph cell).
    pub fn scale_for(px: f32) -> u32 {
        (px / GLYPH_HEIGHT as f32).round().max(1.0) as u32
    }
}

#[rustfmt::skip]
const LETTERS: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_letters_have_glyphs() {
        for c in 'A'..='Z' {
            assert!(BitmapFont::glyph(c).is_some(), "missing glyph for {c}");
        }
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(BitmapFont::glyph('k'), BitmapFont::glyph('K'));
    }

    #[test]
    fn digits_have_glyphs() {
        for c in '0'..='9' {
            assert!(BitmapFont::glyph(c).is_some(), "missing glyph for {c}");
        }
    }

    #[test]
    fn unknown_characters_have_none() {
        assert_eq!(BitmapFont::glyph('!'), None);
        assert_eq!(BitmapFont::glyph('é'), None);
        assert_eq!(BitmapFont::glyph(' '), None);
    }

    #[test]
    fn k_has_expected_shape() {
        let rows = BitmapFont::glyph('K').unwrap();
        // Vertical stem down the left edge.
        for row in rows {
            assert_ne!(row & 0b10000, 0);
        }
        // Arms meet the stem at the middle row.
        assert_eq!(rows[3], 0b11000);
    }

    #[test]
    fn scale_rounds_to_nearest_factor() {
        assert_eq!(BitmapFont::scale_for(24.0), 3);
        assert_eq!(BitmapFont::scale_for(7.0), 1);
        assert_eq!(BitmapFont::scale_for(3.0), 1);
        assert_eq!(BitmapFont::scale_for(14.0), 2);
    }
}
