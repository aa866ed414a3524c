//! Clef selection for transposed notation
//!
//! A transposing player can read concert notation by imagining a different
//! clef: reading a treble part in tenor clef moves every note down a ninth.
//! This module picks that clef for a pair of instrument keys, together with
//! the staff-position offset the layout needs to keep notes on their lines.

use crate::models::clef::CLEFS;
use crate::models::{ClefPosition, Direction, InstrumentKey};

/// Diatonic steps spanned by each chromatic interval (0-11 semitones)
const CHROMATIC_TO_DIATONIC: [u8; 12] = [0, 1, 1, 2, 2, 3, 3, 4, 5, 5, 6, 6];

/// Resolve the clef and position offset for reading `from_key` notation as `to_key`
///
/// # Algorithm
/// 1. Direction is "down" when the target key is numerically higher, else "up"
/// 2. The absolute key difference (mod 12) is converted to diatonic steps
/// 3. A downward shift is negated mod 7
/// 4. The shift indexes the clef table (and its treble offset)
///
/// # Arguments
/// * `from_key` - Key the notation is written for
/// * `to_key` - Key the reader plays in
///
/// # Returns
/// One of the seven clefs, with its offset in staff positions
///
/// # Examples
/// ```
/// use transposer_wasm::models::{Clef, InstrumentKey};
/// use transposer_wasm::renderers::clef::resolve_clef;
///
/// // B♭ part read in concert pitch: tenor clef
/// let pos = resolve_clef(InstrumentKey::B_FLAT, InstrumentKey::C);
/// assert_eq!(pos.clef, Clef::Tenor);
/// assert_eq!(pos.position_offset, -8);
/// ```
pub fn resolve_clef(from_key: InstrumentKey, to_key: InstrumentKey) -> ClefPosition {
    let from = from_key.value() as i32;
    let to = to_key.value() as i32;

    let direction = if to > from { Direction::Down } else { Direction::Up };
    let interval = (from - to).unsigned_abs() as usize % 12;
    let steps = CHROMATIC_TO_DIATONIC[interval] as i32;

    let shift = match direction {
        Direction::Up => steps,
        Direction::Down => (7 - steps).rem_euclid(7),
    };

    let clef = CLEFS[shift as usize];
    ClefPosition {
        clef,
        position_offset: clef.treble_offset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Clef;

    fn key(value: u8) -> InstrumentKey {
        InstrumentKey::new(value).unwrap()
    }

    #[test]
    fn test_b_flat_to_c() {
        assert_eq!(
            resolve_clef(key(10), key(0)),
            ClefPosition { clef: Clef::Tenor, position_offset: -8 }
        );
    }

    #[test]
    fn test_c_to_b_flat() {
        assert_eq!(
            resolve_clef(key(0), key(10)),
            ClefPosition { clef: Clef::Alto, position_offset: -6 }
        );
    }

    #[test]
    fn test_identity_is_treble() {
        for k in InstrumentKey::all() {
            assert_eq!(resolve_clef(k, k), ClefPosition::TREBLE);
        }
    }

    #[test]
    fn test_e_flat_to_c() {
        // E♭ alto: written A sounds C, down a sixth → up a third mod octave → bass
        let pos = resolve_clef(key(3), key(0));
        assert_eq!(pos.clef, Clef::Bass);
    }

    #[test]
    fn test_f_horn_to_c() {
        // F horn: written G sounds C, down a fifth → mezzo-soprano
        let pos = resolve_clef(key(5), key(0));
        assert_eq!(pos.clef, Clef::MezzoSoprano);
    }

    #[test]
    fn test_shift_agrees_with_note_transposition() {
        use crate::models::{Letter, PitchClass, SpelledNote};
        use crate::transposition::transpose_note;

        // A transposed C must be spellable on the letter the clef moves C to
        for from in InstrumentKey::all() {
            for to in InstrumentKey::all() {
                let pos = resolve_clef(from, to);
                let letter = Letter::wrapping(pos.position_offset);
                let moved = transpose_note(PitchClass::C, from, to);
                assert!(
                    SpelledNote::on_letter(letter, moved).is_some(),
                    "{} -> {} gives {:?}",
                    from,
                    to,
                    pos
                );
            }
        }
    }
}
