//! Chromatic pitch classes, instrument keys and transposition targets
//!
//! A `PitchClass` is a bare 12-TET identity (0=C). It carries no spelling:
//! spelling lives in `Tonic` and `SpelledNote`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransposeError};

/// One of the 12 equal-tempered pitch classes, 0=C ... 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from a raw index, failing outside 0-11
    pub fn new(value: u8) -> Result<Self> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(TransposeError::PitchClassOutOfRange(value as i32))
        }
    }

    /// Wrap any signed semitone count into 0-11
    ///
    /// Uses Euclidean remainder: -1 wraps to 11, never to -1.
    pub fn wrapping(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift by a signed number of semitones, wrapping at the octave
    pub fn shifted(self, semitones: i32) -> Self {
        Self::wrapping(self.0 as i32 + semitones)
    }

    /// All 12 pitch classes in ascending order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = TransposeError;

    fn try_from(value: u8) -> Result<Self> {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}

/// Canonical spelling of each instrument key, one per pitch class
const INSTRUMENT_PITCH_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "F♯", "G", "A♭", "A", "B♭", "B",
];

/// Transposition key of an instrument (e.g. B♭ for a B♭ clarinet)
///
/// Index 0-11 into the instrument pitch table. Numerically the same as the
/// pitch class the instrument sounds when it reads a written C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct InstrumentKey(u8);

impl InstrumentKey {
    pub const C: InstrumentKey = InstrumentKey(0);
    pub const B_FLAT: InstrumentKey = InstrumentKey(10);
    pub const E_FLAT: InstrumentKey = InstrumentKey(3);
    pub const F: InstrumentKey = InstrumentKey(5);

    pub fn new(value: u8) -> Result<Self> {
        if value < 12 {
            Ok(InstrumentKey(value))
        } else {
            Err(TransposeError::InstrumentKeyOutOfRange(value as i32))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass(self.0)
    }

    pub fn name(self) -> &'static str {
        INSTRUMENT_PITCH_NAMES[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = InstrumentKey> {
        (0..12).map(InstrumentKey)
    }
}

impl TryFrom<u8> for InstrumentKey {
    type Error = TransposeError;

    fn try_from(value: u8) -> Result<Self> {
        InstrumentKey::new(value)
    }
}

impl From<InstrumentKey> for u8 {
    fn from(key: InstrumentKey) -> u8 {
        key.0
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transposition interval in semitones, 0 (unison) to 12 (octave)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Interval(u8);

impl Interval {
    pub const UNISON: Interval = Interval(0);
    pub const OCTAVE: Interval = Interval(12);

    pub fn new(semitones: u8) -> Result<Self> {
        if semitones <= 12 {
            Ok(Interval(semitones))
        } else {
            Err(TransposeError::IntervalOutOfRange(semitones as i32))
        }
    }

    pub fn semitones(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Interval> {
        (0..=12).map(Interval)
    }
}

impl TryFrom<u8> for Interval {
    type Error = TransposeError;

    fn try_from(value: u8) -> Result<Self> {
        Interval::new(value)
    }
}

impl From<Interval> for u8 {
    fn from(interval: Interval) -> u8 {
        interval.0
    }
}

/// Direction of an interval transposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// +1 for up, -1 for down
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(TransposeError::UnknownDirection(s.to_string())),
        }
    }
}

/// What a note or scale is transposed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Transposition {
    /// From one instrument key to another
    #[serde(rename = "key")]
    Keys { from: InstrumentKey, to: InstrumentKey },
    /// By an interval in a direction
    Interval { interval: Interval, direction: Direction },
}

impl Transposition {
    /// The transposition that undoes this one
    pub fn inverse(self) -> Transposition {
        match self {
            Transposition::Keys { from, to } => Transposition::Keys { from: to, to: from },
            Transposition::Interval { interval, direction } => Transposition::Interval {
                interval,
                direction: direction.flipped(),
            },
        }
    }

    /// Signed semitone shift applied to a pitch class
    pub fn semitones(self) -> i32 {
        match self {
            Transposition::Keys { from, to } => from.value() as i32 - to.value() as i32,
            Transposition::Interval { interval, direction } => {
                direction.sign() * interval.semitones() as i32
            }
        }
    }
}
