//! Models module for the transposition engine
//!
//! Pitch model: pitch classes, the SCALES spellings, instrument keys,
//! modes, key signatures, clefs and the fixed tables that relate them.

pub mod accidental;
pub mod clef;
pub mod key;
pub mod mode;
pub mod pitch;
pub mod scale;
pub mod spelled_note;
pub mod tables;
pub mod tonic;

// Re-export commonly used types
pub use accidental::Accidental;
pub use clef::{Clef, ClefPosition};
pub use key::{Alteration, Key};
pub use mode::Mode;
pub use pitch::{Direction, InstrumentKey, Interval, PitchClass, Transposition};
pub use scale::Scale;
pub use spelled_note::{Letter, SpelledNote};
pub use tables::enharmonic_candidates;
pub use tonic::{Tonic, TONICS};
