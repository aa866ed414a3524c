//! Diatonic scale construction
//!
//! Given a SCALES root and a mode, produce the eight degrees of the scale
//! with their chromatic values, staff positions, spellings and the key
//! signature. Every call builds its values from scratch; no template table
//! is shared between calls.
//!
//! The key signature is counted on the line of fifths from the spelled root,
//! so enharmonic roots get their own signature: G♭ major has six flats while
//! F♯ major has six sharps, even though both sit at position 6 on the
//! twelve-step circle.

use crate::models::scale::SCALE_DEGREES;
use crate::models::{Key, Letter, Mode, PitchClass, Scale, SpelledNote, Tonic};

/// Signed line-of-fifths position of a root's key signature in a mode
///
/// Positive values count sharps, negative values count flats.
pub fn signature_fifths(root: Tonic, mode: Mode) -> i32 {
    root.spelling().fifths() + mode.circle_shift()
}

/// Build the scale of `root` in `mode`
pub fn build_scale(root: Tonic, mode: Mode) -> Scale {
    let spelling = root.spelling();
    let start = spelling.letter.staff_position() as i32;
    let key = Key::from_fifths(signature_fifths(root, mode));

    let mut notes = [PitchClass::C; SCALE_DEGREES];
    let mut reduced_notes = [0u8; SCALE_DEGREES];
    let mut notes_in_scale = [spelling; SCALE_DEGREES];

    let mut chromatic = root.pitch_class();
    let intervals = mode.intervals();

    for degree in 0..SCALE_DEGREES {
        if degree > 0 {
            chromatic = chromatic.shifted(intervals[degree - 1] as i32);
        }
        let letter = Letter::wrapping(start + degree as i32);

        notes[degree] = chromatic;
        reduced_notes[degree] = letter.staff_position();
        notes_in_scale[degree] = SpelledNote::new(letter, key.accidental_for(letter));
    }

    log::trace!(
        "Built {} {}: {:?} ({} accidentals)",
        root,
        mode,
        notes_in_scale.iter().map(|n| n.ascii_name()).collect::<Vec<_>>(),
        key.accidental_count()
    );

    Scale {
        root,
        mode,
        notes,
        notes_in_scale,
        reduced_notes,
        key,
    }
}
