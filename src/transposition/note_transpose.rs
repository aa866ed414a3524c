//! Chromatic note transposition
//!
//! Pure mod-12 arithmetic on pitch classes. Spelling is not decided here:
//! interval transposition hands back the SCALES candidates so display code
//! can choose one.

use crate::models::{
    enharmonic_candidates, Direction, InstrumentKey, Interval, PitchClass, Tonic, Transposition,
};

/// Transpose a note written for `from_key` so it reads the same for `to_key`
///
/// e.g. a written D (2) for a B♭ instrument (10) is a concert C (0):
/// 2 + (10 - 0) = 12 → 0.
pub fn transpose_note(note: PitchClass, from_key: InstrumentKey, to_key: InstrumentKey) -> PitchClass {
    let key_difference = from_key.value() as i32 - to_key.value() as i32;
    note.shifted(key_difference)
}

/// Transpose a note by an interval, returning the SCALES spellings of the result
pub fn transpose_by_interval(
    note: PitchClass,
    interval: Interval,
    direction: Direction,
) -> (PitchClass, &'static [Tonic]) {
    let result = note.shifted(direction.sign() * interval.semitones() as i32);
    (result, enharmonic_candidates(result))
}

/// Apply any transposition to a note
pub fn transpose(note: PitchClass, transposition: &Transposition) -> PitchClass {
    match *transposition {
        Transposition::Keys { from, to } => transpose_note(note, from, to),
        Transposition::Interval { interval, direction } => {
            transpose_by_interval(note, interval, direction).0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(value: u8) -> PitchClass {
        PitchClass::new(value).unwrap()
    }

    fn key(value: u8) -> InstrumentKey {
        InstrumentKey::new(value).unwrap()
    }

    #[test]
    fn test_same_key_is_identity() {
        for note in PitchClass::all() {
            for k in InstrumentKey::all() {
                assert_eq!(transpose_note(note, k, k), note);
            }
        }
    }

    #[test]
    fn test_b_flat_to_concert() {
        // Written D for B♭ clarinet sounds C
        assert_eq!(transpose_note(pc(2), key(10), key(0)), pc(0));
        // Concert C is written D for B♭ clarinet
        assert_eq!(transpose_note(pc(0), key(0), key(10)), pc(2));
    }

    #[test]
    fn test_e_flat_alto_sax() {
        // Written A for E♭ alto sounds C
        assert_eq!(transpose_note(pc(9), key(3), key(0)), pc(0));
    }

    #[test]
    fn test_negative_difference_wraps() {
        // 0 + (0 - 11) must land on 1, never on -11
        assert_eq!(transpose_note(pc(0), key(0), key(11)), pc(1));
    }

    #[test]
    fn test_interval_up_and_down() {
        let fifth = Interval::new(7).unwrap();
        let (up, _) = transpose_by_interval(pc(0), fifth, Direction::Up);
        assert_eq!(up, pc(7));
        let (down, _) = transpose_by_interval(pc(0), fifth, Direction::Down);
        assert_eq!(down, pc(5));
    }

    #[test]
    fn test_interval_candidates() {
        let (result, candidates) =
            transpose_by_interval(pc(4), Interval::new(2).unwrap(), Direction::Up);
        assert_eq!(result, pc(6));
        assert_eq!(candidates, &[Tonic::Fs, Tonic::Gb]);

        let (_, candidates) = transpose_by_interval(pc(0), Interval::new(2).unwrap(), Direction::Up);
        assert_eq!(candidates, &[Tonic::D]);
    }

    #[test]
    fn test_octave_returns_to_same_note() {
        for note in PitchClass::all() {
            for direction in [Direction::Up, Direction::Down] {
                let (result, _) = transpose_by_interval(note, Interval::OCTAVE, direction);
                assert_eq!(result, note);
            }
        }
    }

    #[test]
    fn test_dispatch() {
        let by_keys = Transposition::Keys { from: key(10), to: key(0) };
        assert_eq!(transpose(pc(2), &by_keys), pc(0));

        let by_interval = Transposition::Interval {
            interval: Interval::new(3).unwrap(),
            direction: Direction::Down,
        };
        assert_eq!(transpose(pc(1), &by_interval), pc(10));
    }
}
