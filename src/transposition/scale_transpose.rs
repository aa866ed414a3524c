//! Scale root transposition with enharmonic spelling choice
//!
//! The root is collapsed to its pitch class, shifted like a single note, and
//! expanded back to its SCALES spellings. When two spellings exist the one
//! whose key signature (in the given mode) needs fewer accidentals wins;
//! ties keep the first spelling in table order.

use super::note_transpose::{transpose_by_interval, transpose_note};
use super::scale_builder::signature_fifths;
use crate::models::{
    enharmonic_candidates, Direction, InstrumentKey, Interval, Mode, PitchClass, Tonic,
    Transposition,
};

/// Transpose a scale root from one instrument key to another
pub fn transpose_scale_by_keys(
    root: Tonic,
    from_key: InstrumentKey,
    to_key: InstrumentKey,
    mode: Mode,
) -> Tonic {
    let target = transpose_note(root.pitch_class(), from_key, to_key);
    choose_spelling(target, mode)
}

/// Transpose a scale root by an interval
pub fn transpose_scale_by_interval(
    root: Tonic,
    interval: Interval,
    mode: Mode,
    direction: Direction,
) -> Tonic {
    let (_, candidates) = transpose_by_interval(root.pitch_class(), interval, direction);
    pick_simplest(candidates, mode)
}

/// Apply any transposition to a scale root
pub fn transpose_scale(root: Tonic, transposition: &Transposition, mode: Mode) -> Tonic {
    match *transposition {
        Transposition::Keys { from, to } => transpose_scale_by_keys(root, from, to, mode),
        Transposition::Interval { interval, direction } => {
            transpose_scale_by_interval(root, interval, mode, direction)
        }
    }
}

/// Spelling of a pitch class as a scale root with the simplest key signature
pub fn choose_spelling(pitch_class: PitchClass, mode: Mode) -> Tonic {
    pick_simplest(enharmonic_candidates(pitch_class), mode)
}

/// Accidentals in the key signature of `root` in `mode`
pub fn signature_cost(root: Tonic, mode: Mode) -> u32 {
    signature_fifths(root, mode).unsigned_abs()
}

fn pick_simplest(candidates: &[Tonic], mode: Mode) -> Tonic {
    match candidates {
        [only] => *only,
        [first, second] => {
            let first_cost = signature_cost(*first, mode);
            let second_cost = signature_cost(*second, mode);
            log::trace!(
                "Enharmonic choice in {}: {} ({}) vs {} ({})",
                mode,
                first,
                first_cost,
                second,
                second_cost
            );
            if second_cost < first_cost {
                *second
            } else {
                *first
            }
        }
        // The enharmonic table holds one or two spellings per class
        _ => unreachable!("pitch class with {} spellings", candidates.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mode::MODES;
    use crate::models::tonic::TONICS;

    fn key(value: u8) -> InstrumentKey {
        InstrumentKey::new(value).unwrap()
    }

    #[test]
    fn test_unambiguous_result() {
        // C major for B♭ instrument → D major
        assert_eq!(
            transpose_scale_by_keys(Tonic::C, key(0), key(10), Mode::Major),
            Tonic::D
        );
    }

    #[test]
    fn test_prefers_fewer_accidentals() {
        // B major up a whole step: C♯ (7 sharps) vs D♭ (5 flats)
        assert_eq!(
            transpose_scale_by_interval(Tonic::B, Interval::new(2).unwrap(), Mode::Major, Direction::Up),
            Tonic::Db
        );
        // In minor: C♯ minor (4 sharps) beats D♭ minor (8 flats)
        assert_eq!(
            transpose_scale_by_interval(Tonic::B, Interval::new(2).unwrap(), Mode::Minor, Direction::Up),
            Tonic::Cs
        );
    }

    #[test]
    fn test_tie_keeps_table_order() {
        // F♯ major and G♭ major both have six accidentals
        assert_eq!(choose_spelling(PitchClass::new(6).unwrap(), Mode::Major), Tonic::Fs);
    }

    #[test]
    fn test_e_flat_major_over_d_sharp() {
        assert_eq!(choose_spelling(PitchClass::new(3).unwrap(), Mode::Major), Tonic::Eb);
        // D♯ minor and E♭ minor both have six accidentals: table order wins
        assert_eq!(choose_spelling(PitchClass::new(3).unwrap(), Mode::Minor), Tonic::Ds);
    }

    #[test]
    fn test_octave_preserves_enharmonic_group() {
        for root in TONICS {
            for mode in MODES {
                for direction in [Direction::Up, Direction::Down] {
                    let result = transpose_scale_by_interval(root, Interval::OCTAVE, mode, direction);
                    assert_eq!(
                        result.pitch_class(),
                        root.pitch_class(),
                        "{} {} octave {:?}",
                        root,
                        mode,
                        direction
                    );
                }
            }
        }
    }

    #[test]
    fn test_descending_octave_c_sharp() {
        // Regression: descending octave from C♯/D♭ must stay in the same group
        for root in [Tonic::Cs, Tonic::Db] {
            let result =
                transpose_scale_by_interval(root, Interval::OCTAVE, Mode::Major, Direction::Down);
            assert_eq!(result.pitch_class().value(), 1);
        }
    }

    #[test]
    fn test_result_always_valid_spelling() {
        for root in TONICS {
            for mode in MODES {
                for from in InstrumentKey::all() {
                    for to in InstrumentKey::all() {
                        let result = transpose_scale_by_keys(root, from, to, mode);
                        let expected = transpose_note(root.pitch_class(), from, to);
                        assert_eq!(result.pitch_class(), expected);
                    }
                }
            }
        }
    }
}
