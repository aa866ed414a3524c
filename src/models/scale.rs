//! Built diatonic scale
//!
//! Produced by `transposition::scale_builder::build_scale`. Eight degrees,
//! the root repeated an octave up as degree 7.

use serde::Serialize;

use super::key::Key;
use super::mode::Mode;
use super::pitch::PitchClass;
use super::spelled_note::SpelledNote;
use super::tables::circle_position;
use super::tonic::Tonic;

pub const SCALE_DEGREES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    /// SCALES root the scale was built from
    pub root: Tonic,
    pub mode: Mode,
    /// Chromatic value of each degree, wrapped into 0-11
    pub notes: [PitchClass; SCALE_DEGREES],
    /// Spelling of each degree
    pub notes_in_scale: [SpelledNote; SCALE_DEGREES],
    /// Staff position of each degree within the octave (0=C ... 6=B)
    pub reduced_notes: [u8; SCALE_DEGREES],
    pub key: Key,
}

impl Scale {
    /// Root position on the circle of fifths, shifted by the mode, in 0-11
    pub fn circle_position(&self) -> u8 {
        let major_position = circle_position(self.root.pitch_class()) as i32;
        (major_position + self.mode.circle_shift()).rem_euclid(12) as u8
    }

    /// Display names of every degree ("F♯", "B♭", ...)
    pub fn display_names(&self) -> Vec<String> {
        self.notes_in_scale.iter().map(|n| n.display_name()).collect()
    }

    /// German names of every degree ("Fis", "B", "H", ...)
    pub fn german_names(&self) -> Vec<String> {
        self.notes_in_scale.iter().map(|n| n.german_name()).collect()
    }
}
