/// Enumeration of all scale roots (the SCALES table)
///
/// Represents the 17 commonly used tonics in Western music:
/// - 7 natural tonics (C, D, E, F, G, A, B)
/// - 5 sharp tonics (C#, D#, F#, G#, A#)
/// - 5 flat tonics (Db, Eb, Gb, Ab, Bb)
///
/// Enharmonic equivalents are listed separately (e.g., C# and Db)
/// because they result in different key signatures and pitch spellings.
/// The declaration order is the SCALES index (0-16) used across the API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::accidental::Accidental;
use super::pitch::PitchClass;
use super::spelled_note::{Letter, SpelledNote};
use crate::error::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

/// All tonics in SCALES index order
pub const TONICS: [Tonic; 17] = [
    Tonic::C,
    Tonic::Cs,
    Tonic::Db,
    Tonic::D,
    Tonic::Ds,
    Tonic::Eb,
    Tonic::E,
    Tonic::F,
    Tonic::Fs,
    Tonic::Gb,
    Tonic::G,
    Tonic::Gs,
    Tonic::Ab,
    Tonic::A,
    Tonic::As,
    Tonic::Bb,
    Tonic::B,
];

impl Tonic {
    /// SCALES index (0-16)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a tonic by SCALES index, failing outside 0-16
    pub fn from_index(index: u8) -> Result<Tonic, TransposeError> {
        TONICS
            .get(index as usize)
            .copied()
            .ok_or(TransposeError::ScaleIndexOutOfRange(index as i32))
    }

    /// Letter and accidental of this tonic
    pub fn spelling(self) -> SpelledNote {
        let (letter, accidental) = match self {
            Tonic::C => (Letter::C, Accidental::None),
            Tonic::Cs => (Letter::C, Accidental::Sharp),
            Tonic::Db => (Letter::D, Accidental::Flat),
            Tonic::D => (Letter::D, Accidental::None),
            Tonic::Ds => (Letter::D, Accidental::Sharp),
            Tonic::Eb => (Letter::E, Accidental::Flat),
            Tonic::E => (Letter::E, Accidental::None),
            Tonic::F => (Letter::F, Accidental::None),
            Tonic::Fs => (Letter::F, Accidental::Sharp),
            Tonic::Gb => (Letter::G, Accidental::Flat),
            Tonic::G => (Letter::G, Accidental::None),
            Tonic::Gs => (Letter::G, Accidental::Sharp),
            Tonic::Ab => (Letter::A, Accidental::Flat),
            Tonic::A => (Letter::A, Accidental::None),
            Tonic::As => (Letter::A, Accidental::Sharp),
            Tonic::Bb => (Letter::B, Accidental::Flat),
            Tonic::B => (Letter::B, Accidental::None),
        };
        SpelledNote::new(letter, accidental)
    }

    /// Enharmonic group of this tonic (its chromatic class)
    pub fn pitch_class(self) -> PitchClass {
        self.spelling().pitch_class()
    }

    /// Convert tonic to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
        }
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = TransposeError;

    /// Accepts ASCII ("Bb", "f#") and display ("B♭", "F♯") spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TONICS
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s) || t.spelling().display_name() == s)
            .ok_or_else(|| TransposeError::UnknownTonic(s.to_string()))
    }
}
