//! Error types for transposition lookups
//!
//! Every core computation is total over its typed inputs. The only failures
//! happen when a raw index coming from JavaScript is turned into one of those
//! types, so each variant names the table that was indexed out of range.

use thiserror::Error;

/// Out-of-domain input to one of the fixed lookup tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Chromatic pitch class outside 0-11
    #[error("Pitch class {0} out of range (expected 0-11)")]
    PitchClassOutOfRange(i32),

    /// Instrument key outside 0-11
    #[error("Instrument key {0} out of range (expected 0-11)")]
    InstrumentKeyOutOfRange(i32),

    /// SCALES index outside 0-16
    #[error("Scale index {0} out of range (expected 0-16)")]
    ScaleIndexOutOfRange(i32),

    /// Mode index outside 0-6
    #[error("Mode index {0} out of range (expected 0-6)")]
    ModeOutOfRange(i32),

    /// Interval outside 0-12 semitones
    #[error("Interval {0} out of range (expected 0-12 semitones)")]
    IntervalOutOfRange(i32),

    /// Stave position outside 0-6
    #[error("Stave position {0} out of range (expected 0-6)")]
    StavePositionOutOfRange(i32),

    /// Click counts are 1-indexed
    #[error("Click count must be at least 1")]
    ClickCountZero,

    /// Tonic name outside the SCALES table
    #[error("Unknown tonic: '{0}'")]
    UnknownTonic(String),

    /// Direction string other than "up"/"down"
    #[error("Unknown direction: '{0}' (expected 'up' or 'down')")]
    UnknownDirection(String),

    /// Transposition method other than "key"/"interval"
    #[error("Unknown transposition method: '{0}' (expected 'key' or 'interval')")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, TransposeError>;
