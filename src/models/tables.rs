//! Fixed music-theory tables
//!
//! The enharmonic mapping between the 17 SCALES spellings and the 12 pitch
//! classes lives here and only here. `Tonic::pitch_class` is the forward
//! direction; `enharmonic_candidates` is the reverse.

use super::pitch::PitchClass;
use super::spelled_note::Letter;
use super::tonic::Tonic;

/// Pitch classes ordered by ascending fifths (the major circle of fifths)
pub const CIRCLE_OF_FIFTHS: [u8; 12] = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];

/// Order in which sharps enter a key signature
pub const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// Order in which flats enter a key signature
pub const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// SCALES candidates per pitch class, in table order
const ENHARMONIC_CANDIDATES: [&[Tonic]; 12] = [
    &[Tonic::C],
    &[Tonic::Cs, Tonic::Db],
    &[Tonic::D],
    &[Tonic::Ds, Tonic::Eb],
    &[Tonic::E],
    &[Tonic::F],
    &[Tonic::Fs, Tonic::Gb],
    &[Tonic::G],
    &[Tonic::Gs, Tonic::Ab],
    &[Tonic::A],
    &[Tonic::As, Tonic::Bb],
    &[Tonic::B],
];

/// Every SCALES spelling of a pitch class (one or two entries)
pub fn enharmonic_candidates(pitch_class: PitchClass) -> &'static [Tonic] {
    ENHARMONIC_CANDIDATES[pitch_class.value() as usize]
}

/// Position of a pitch class on the major circle of fifths (C=0, G=1 ... F=11)
pub fn circle_position(pitch_class: PitchClass) -> u8 {
    // Each fifth is 7 semitones, and 7 is its own inverse mod 12
    ((pitch_class.value() as u32 * 7) % 12) as u8
}
