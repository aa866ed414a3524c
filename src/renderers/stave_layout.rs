//! Stave layout instructions
//!
//! This module turns spelled notes, key signatures and clef choices into a
//! renderer-agnostic description of one stave. The front end passes the
//! result straight to the notation library; no layout math happens in
//! JavaScript.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::defaults::stave_width;
use crate::models::{Accidental, Clef, ClefPosition, Key, Letter, Scale, SpelledNote};

/// Top-level layout for a single stave
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaveLayout {
    /// Total stave width in pixels
    pub width: f32,

    pub clef: Clef,

    /// Key signature accidentals in writing order
    pub key_signature: Vec<KeySignatureGlyph>,

    /// Notes left to right
    pub notes: Vec<StaveNote>,
}

/// One accidental of the key signature
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeySignatureGlyph {
    /// Letter position within the octave (0=C ... 6=B)
    pub staff_position: u8,

    /// Accidental code ("#", "b", "##", "bb")
    pub glyph: String,
}

/// A single notehead
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaveNote {
    /// Renderer key, letter/octave form ("f#/4")
    pub key: String,

    /// Absolute diatonic position as drawn (C4 = 28)
    pub staff_position: i32,

    /// Accidental glyph to draw next to the note, if any ("n" for natural)
    pub accidental: Option<String>,
}

/// A spelled note placed in a given octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedNote {
    pub note: SpelledNote,
    pub octave: i32,
}

impl PlacedNote {
    pub fn new(note: SpelledNote, octave: i32) -> Self {
        PlacedNote { note, octave }
    }

    /// Absolute diatonic position (octave * 7 + letter)
    pub fn staff_position(&self) -> i32 {
        self.octave * 7 + self.note.letter.staff_position() as i32
    }
}

/// Renderer key for a note drawn at `position` (absolute diatonic)
///
/// The accidental is part of the key so the renderer plays back the right
/// pitch; whether a glyph is drawn is decided separately.
pub fn note_key(accidental: Accidental, position: i32) -> String {
    let letter = Letter::wrapping(position);
    let octave = position.div_euclid(7);
    format!(
        "{}{}/{}",
        letter.as_str().to_lowercase(),
        accidental.ascii(),
        octave
    )
}

/// Key signature glyphs in writing order
pub fn key_signature_glyphs(key: &Key) -> Vec<KeySignatureGlyph> {
    let Some(alteration) = key.alteration else {
        return Vec::new();
    };

    let singles = key.altered_notes.iter().map(|&position| KeySignatureGlyph {
        staff_position: position,
        glyph: alteration.accidental().ascii().to_string(),
    });
    let doubles = key.double_altered_notes.iter().map(|&position| KeySignatureGlyph {
        staff_position: position,
        glyph: alteration.double_accidental().ascii().to_string(),
    });

    singles.chain(doubles).collect()
}

/// Lay out notes on a stave with a key signature and clef
///
/// Accidental glyphs follow the usual rule within a bar: a glyph is drawn
/// when the note's accidental differs from what is currently in force on
/// that line, either from the key signature or from an earlier glyph.
pub fn layout_notes(notes: &[PlacedNote], key: &Key, clef: ClefPosition) -> StaveLayout {
    let mut in_force: HashMap<i32, Accidental> = HashMap::new();

    let stave_notes = notes
        .iter()
        .map(|placed| {
            let written = placed.staff_position();
            let current = in_force
                .get(&written)
                .copied()
                .unwrap_or_else(|| key.accidental_for(placed.note.letter));
            let accidental = placed.note.accidental;

            let glyph = if accidental == current {
                None
            } else if accidental.is_natural() {
                Some("n".to_string())
            } else {
                Some(accidental.ascii().to_string())
            };
            in_force.insert(written, accidental);

            let drawn = written + clef.position_offset;
            StaveNote {
                key: note_key(accidental, drawn),
                staff_position: drawn,
                accidental: glyph,
            }
        })
        .collect::<Vec<_>>();

    let key_signature = key_signature_glyphs(key);

    StaveLayout {
        width: stave_width(key_signature.len(), stave_notes.len()),
        clef: clef.clef,
        key_signature,
        notes: stave_notes,
    }
}

/// Lay out a built scale ascending from `octave`
pub fn layout_scale(scale: &Scale, octave: i32, clef: ClefPosition) -> StaveLayout {
    let start = PlacedNote::new(scale.notes_in_scale[0], octave).staff_position();
    let placed = scale
        .notes_in_scale
        .iter()
        .enumerate()
        .map(|(degree, &note)| {
            let position = start + degree as i32;
            PlacedNote::new(note, position.div_euclid(7))
        })
        .collect::<Vec<_>>();

    layout_notes(&placed, &scale.key, clef)
}

/// Lay out a single note with no key signature
pub fn layout_single_note(note: SpelledNote, octave: i32, clef: ClefPosition) -> StaveLayout {
    layout_notes(&[PlacedNote::new(note, octave)], &Key::default(), clef)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, Tonic};
    use crate::renderers::defaults::MIN_STAVE_WIDTH_PX;
    use crate::transposition::build_scale;

    #[test]
    fn test_note_key() {
        assert_eq!(note_key(Accidental::None, 28), "c/4");
        assert_eq!(note_key(Accidental::Sharp, 31), "f#/4");
        assert_eq!(note_key(Accidental::Flat, 27), "bb/3");
    }

    #[test]
    fn test_c_major_has_no_glyphs() {
        let scale = build_scale(Tonic::C, Mode::Major);
        let layout = layout_scale(&scale, 4, ClefPosition::TREBLE);
        assert!(layout.key_signature.is_empty());
        assert_eq!(layout.notes.len(), 8);
        assert!(layout.notes.iter().all(|n| n.accidental.is_none()));
        assert_eq!(layout.notes[0].key, "c/4");
        assert_eq!(layout.notes[7].key, "c/5");
    }

    #[test]
    fn test_scale_crossing_octave() {
        let scale = build_scale(Tonic::A, Mode::Minor);
        let layout = layout_scale(&scale, 4, ClefPosition::TREBLE);
        let keys: Vec<&str> = layout.notes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, ["a/4", "b/4", "c/5", "d/5", "e/5", "f/5", "g/5", "a/5"]);
    }

    #[test]
    fn test_key_signature_suppresses_glyphs() {
        let scale = build_scale(Tonic::D, Mode::Major);
        let layout = layout_scale(&scale, 4, ClefPosition::TREBLE);
        assert_eq!(layout.key_signature.len(), 2);
        assert_eq!(layout.key_signature[0].staff_position, 3);
        assert_eq!(layout.key_signature[0].glyph, "#");
        assert!(layout.notes.iter().all(|n| n.accidental.is_none()));
        assert_eq!(layout.notes[2].key, "f#/4");
    }

    #[test]
    fn test_natural_against_key_signature() {
        let key = Key::from_fifths(1);
        let notes = [
            PlacedNote::new(SpelledNote::natural(Letter::F), 4),
            PlacedNote::new(SpelledNote::natural(Letter::F), 4),
            PlacedNote::new(SpelledNote::new(Letter::F, Accidental::Sharp), 4),
        ];
        let layout = layout_notes(&notes, &key, ClefPosition::TREBLE);
        assert_eq!(layout.notes[0].accidental.as_deref(), Some("n"));
        assert_eq!(layout.notes[1].accidental, None);
        assert_eq!(layout.notes[2].accidental.as_deref(), Some("#"));
    }

    #[test]
    fn test_clef_offset_moves_drawn_position() {
        let tenor = ClefPosition { clef: Clef::Tenor, position_offset: -8 };
        let layout = layout_single_note(SpelledNote::natural(Letter::D), 5, tenor);
        // D5 in treble sits on the line of C4 in tenor clef
        assert_eq!(layout.notes[0].key, "c/4");
        assert_eq!(layout.clef, Clef::Tenor);
        assert_eq!(layout.width, MIN_STAVE_WIDTH_PX);
    }

    #[test]
    fn test_double_sharp_signature_glyphs() {
        let scale = build_scale(Tonic::Gs, Mode::Major);
        let glyphs = key_signature_glyphs(&scale.key);
        assert_eq!(glyphs.len(), 8);
        assert_eq!(glyphs[7].glyph, "##");
    }
}
