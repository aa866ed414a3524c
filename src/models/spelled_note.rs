//! Natural letters and spelled notes
//!
//! A spelled note is a natural letter plus an accidental: F♯ and G♭ are two
//! different spelled notes sharing one pitch class. Letters double as staff
//! positions within an octave (C=0 ... B=6).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accidental::Accidental;
use super::pitch::PitchClass;
use crate::error::{Result, TransposeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Natural letters in staff order
pub const LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Staff position within the octave (C=0 ... B=6)
    pub fn staff_position(self) -> u8 {
        self as u8
    }

    pub fn from_staff_position(position: u8) -> Result<Letter> {
        LETTERS
            .get(position as usize)
            .copied()
            .ok_or(TransposeError::StavePositionOutOfRange(position as i32))
    }

    /// Letter at any staff position, wrapping every 7 steps
    pub fn wrapping(position: i32) -> Letter {
        LETTERS[position.rem_euclid(7) as usize]
    }

    /// Pitch class of the natural letter
    pub fn natural_pitch_class(self) -> PitchClass {
        PitchClass::wrapping(match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        })
    }

    /// Position on the line of fifths, F=-1 C=0 G=1 ... B=5
    pub fn fifths(self) -> i32 {
        match self {
            Letter::F => -1,
            Letter::C => 0,
            Letter::G => 1,
            Letter::D => 2,
            Letter::A => 3,
            Letter::E => 4,
            Letter::B => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

/// A natural letter with an accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpelledNote {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl SpelledNote {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        SpelledNote { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        SpelledNote::new(letter, Accidental::None)
    }

    /// Spell `pitch_class` on `letter`
    ///
    /// Returns None when the two are more than a double accidental apart.
    pub fn on_letter(letter: Letter, pitch_class: PitchClass) -> Option<SpelledNote> {
        let mut offset = pitch_class.value() as i32 - letter.natural_pitch_class().value() as i32;
        if offset > 6 {
            offset -= 12;
        } else if offset < -6 {
            offset += 12;
        }
        Accidental::from_offset(offset).map(|accidental| SpelledNote::new(letter, accidental))
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.letter.natural_pitch_class().shifted(self.accidental.offset())
    }

    /// Line-of-fifths position of this spelling (C=0, G=1, F=-1, F♯=6, G♭=-6)
    pub fn fifths(&self) -> i32 {
        self.letter.fifths() + 7 * self.accidental.offset()
    }

    /// Display form with ♯/♭ symbols: "F♯", "B♭", "C"
    pub fn display_name(&self) -> String {
        format!("{}{}", self.letter.as_str(), self.accidental.symbol())
    }

    /// ASCII form: "F#", "Bb", "C"
    pub fn ascii_name(&self) -> String {
        format!("{}{}", self.letter.as_str(), self.accidental.ascii())
    }

    /// German note name: "Fis", "Es", "As", "B" (B♭), "H" (B natural)
    pub fn german_name(&self) -> String {
        let flats = -self.accidental.offset();
        let sharps = self.accidental.offset();

        match (self.letter, self.accidental) {
            (Letter::B, Accidental::None) => return "H".to_string(),
            (Letter::B, Accidental::Flat) => return "B".to_string(),
            (Letter::B, Accidental::DoubleFlat) => return "Heses".to_string(),
            _ => {}
        }

        let base = match self.letter {
            Letter::B => "H",
            other => other.as_str(),
        };

        if sharps > 0 {
            format!("{}{}", base, "is".repeat(sharps as usize))
        } else if flats > 0 {
            // E and A drop the vowel: Es, As, Eses, Ases
            let first = if matches!(self.letter, Letter::E | Letter::A) { "s" } else { "es" };
            format!("{}{}{}", base, first, "es".repeat(flats as usize - 1))
        } else {
            base.to_string()
        }
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
