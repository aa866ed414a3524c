// Roundtrip and boundary checks for note and scale transposition

use transposer_wasm::models::{
    enharmonic_candidates, Direction, InstrumentKey, Interval, Mode, PitchClass, Tonic, Transposition, TONICS,
};
use transposer_wasm::resolver::{reverse_note_from_target, reverse_scale_from_target};
use transposer_wasm::transposition::{
    transpose_by_interval, transpose_note, transpose_scale, transpose_scale_by_interval, transpose_scale_by_keys,
};

const DIRECTIONS: [Direction; 2] = [Direction::Up, Direction::Down];

fn all_modes() -> impl Iterator<Item = Mode> {
    (0..7).map(|i| Mode::from_index(i).unwrap())
}

#[test]
fn test_enharmonic_pairs_share_a_group() {
    assert_eq!(Tonic::Cs.pitch_class(), Tonic::Db.pitch_class());
    assert_eq!(Tonic::Cs.pitch_class().value(), 1);

    for pc in PitchClass::all() {
        let candidates = enharmonic_candidates(pc);
        assert!(!candidates.is_empty() && candidates.len() <= 2, "{:?}", pc);
        for tonic in candidates {
            assert_eq!(tonic.pitch_class(), pc, "{} should belong to {}", tonic, pc.value());
        }
    }
}

#[test]
fn test_key_roundtrip_all_pairs() {
    for note in PitchClass::all() {
        for from in InstrumentKey::all() {
            for to in InstrumentKey::all() {
                let target = transpose_note(note, from, to);
                let t = Transposition::Keys { from, to };
                assert_eq!(
                    reverse_note_from_target(target, &t),
                    note,
                    "note {} from {} to {}",
                    note.value(),
                    from,
                    to
                );
            }
        }
    }
}

#[test]
fn test_interval_roundtrip_all_combinations() {
    for note in PitchClass::all() {
        for interval in Interval::all() {
            for direction in DIRECTIONS {
                let (target, _) = transpose_by_interval(note, interval, direction);
                let t = Transposition::Interval { interval, direction };
                assert_eq!(reverse_note_from_target(target, &t), note);
            }
        }
    }
}

#[test]
fn test_interval_candidates_match_result() {
    for note in PitchClass::all() {
        for interval in Interval::all() {
            for direction in DIRECTIONS {
                let (target, candidates) = transpose_by_interval(note, interval, direction);
                assert!(candidates.iter().all(|t| t.pitch_class() == target));
            }
        }
    }
}

#[test]
fn test_octave_returns_to_same_group() {
    for mode in all_modes() {
        for root in TONICS {
            for direction in DIRECTIONS {
                let result = transpose_scale_by_interval(root, Interval::OCTAVE, mode, direction);
                assert_eq!(
                    result.pitch_class(),
                    root.pitch_class(),
                    "{} {} an octave {}",
                    root,
                    mode,
                    direction.as_str()
                );
            }
        }
    }
}

#[test]
fn test_descending_octave_from_c_sharp() {
    let down = transpose_scale_by_interval(Tonic::Cs, Interval::OCTAVE, Mode::Major, Direction::Down);
    assert_eq!(down.pitch_class().value(), 1);

    let down = transpose_scale_by_interval(Tonic::Db, Interval::OCTAVE, Mode::Major, Direction::Down);
    assert_eq!(down.pitch_class().value(), 1);
}

#[test]
fn test_scale_roundtrip_preserves_group() {
    for mode in all_modes() {
        for root in TONICS {
            for from in InstrumentKey::all() {
                for to in InstrumentKey::all() {
                    let t = Transposition::Keys { from, to };
                    let target = transpose_scale(root, &t, mode);
                    let origin = reverse_scale_from_target(target, &t, mode);
                    assert_eq!(origin.pitch_class(), root.pitch_class());
                }
            }
        }
    }
}

#[test]
fn test_b_flat_instrument_reads_a_tone_up() {
    // Concert C major for a B♭ clarinet is written in D major
    let written = transpose_scale_by_keys(Tonic::C, InstrumentKey::C, InstrumentKey::B_FLAT, Mode::Major);
    assert_eq!(written, Tonic::D);

    // Concert F major for an E♭ alto sax is written in D major
    let written = transpose_scale_by_keys(Tonic::F, InstrumentKey::C, InstrumentKey::E_FLAT, Mode::Major);
    assert_eq!(written, Tonic::D);
}

#[test]
fn test_ambiguous_results_prefer_fewer_accidentals() {
    // Up a semitone from C major: D♭ (5 flats) beats C♯ (7 sharps)
    let up = transpose_scale_by_interval(Tonic::C, Interval::new(1).unwrap(), Mode::Major, Direction::Up);
    assert_eq!(up, Tonic::Db);

    // The same pitch in minor: C♯ minor (4 sharps) beats D♭ minor (8 flats)
    let up = transpose_scale_by_interval(Tonic::C, Interval::new(1).unwrap(), Mode::Minor, Direction::Up);
    assert_eq!(up, Tonic::Cs);
}
