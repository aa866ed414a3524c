//! Default values for stave layout
//!
//! Pixel sizes mirror the constants the notation front end uses when it
//! draws a single stave.

/// Horizontal space taken by the clef glyph
pub const CLEF_WIDTH_PX: f32 = 40.0;

/// Horizontal space per key-signature accidental
pub const KEY_SIGNATURE_GLYPH_WIDTH_PX: f32 = 10.0;

/// Horizontal space per note, accidental included
pub const NOTE_SPACING_PX: f32 = 40.0;

/// Padding after the last note
pub const STAVE_PADDING_PX: f32 = 20.0;

/// Narrowest stave drawn, so a lone note does not look cramped
pub const MIN_STAVE_WIDTH_PX: f32 = 150.0;

/// Octave notes are drawn in unless the caller picks another (C4 = middle C)
pub const DEFAULT_OCTAVE: i32 = 4;

/// Stave width for a given number of key-signature glyphs and notes
pub fn stave_width(key_signature_glyphs: usize, notes: usize) -> f32 {
    let width = CLEF_WIDTH_PX
        + key_signature_glyphs as f32 * KEY_SIGNATURE_GLYPH_WIDTH_PX
        + notes as f32 * NOTE_SPACING_PX
        + STAVE_PADDING_PX;
    width.max(MIN_STAVE_WIDTH_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_note_uses_minimum() {
        assert_eq!(stave_width(0, 1), MIN_STAVE_WIDTH_PX);
    }

    #[test]
    fn test_scale_width() {
        // 40 + 3*10 + 8*40 + 20
        assert_eq!(stave_width(3, 8), 410.0);
    }
}
