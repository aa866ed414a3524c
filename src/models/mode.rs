//! Diatonic modes
//!
//! One closed enumeration, indexed 0-6 in the order the mode selector shows
//! them. Each mode carries its step pattern and its shift on the circle of
//! fifths relative to major (A minor shares C major's signature, so Minor
//! shifts by -3).

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

use crate::error::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Mode {
    Major = 0,
    Minor = 1,
    Dorian = 2,
    Phrygian = 3,
    Lydian = 4,
    Mixolydian = 5,
    Locrian = 6,
}

/// Static description of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    pub name: &'static str,
    /// Semitone steps between consecutive degrees, summing to 12
    pub intervals: [u8; 7],
    /// Offset on the circle of fifths relative to the major mode
    pub circle_shift: i8,
}

pub const MODES: [Mode; 7] = [
    Mode::Major,
    Mode::Minor,
    Mode::Dorian,
    Mode::Phrygian,
    Mode::Lydian,
    Mode::Mixolydian,
    Mode::Locrian,
];

const MODE_INFO: [ModeInfo; 7] = [
    ModeInfo { name: "Major", intervals: [2, 2, 1, 2, 2, 2, 1], circle_shift: 0 },
    ModeInfo { name: "Minor", intervals: [2, 1, 2, 2, 1, 2, 2], circle_shift: -3 },
    ModeInfo { name: "Dorian", intervals: [2, 1, 2, 2, 2, 1, 2], circle_shift: -2 },
    ModeInfo { name: "Phrygian", intervals: [1, 2, 2, 2, 1, 2, 2], circle_shift: -4 },
    ModeInfo { name: "Lydian", intervals: [2, 2, 2, 1, 2, 2, 1], circle_shift: 1 },
    ModeInfo { name: "Mixolydian", intervals: [2, 2, 1, 2, 2, 1, 2], circle_shift: -1 },
    ModeInfo { name: "Locrian", intervals: [1, 2, 2, 1, 2, 2, 2], circle_shift: -5 },
];

impl Mode {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Mode, TransposeError> {
        MODES
            .get(index as usize)
            .copied()
            .ok_or(TransposeError::ModeOutOfRange(index as i32))
    }

    pub fn info(self) -> &'static ModeInfo {
        &MODE_INFO[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn intervals(self) -> [u8; 7] {
        self.info().intervals
    }

    pub fn circle_shift(self) -> i32 {
        self.info().circle_shift as i32
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
