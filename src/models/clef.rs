//! Clef names understood by the notation renderer

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Clef {
    Treble,
    Alto,
    Bass,
    MezzoSoprano,
    #[serde(rename = "baritone-c")]
    BaritoneC,
    Soprano,
    Tenor,
}

pub const CLEFS: [Clef; 7] = [
    Clef::Treble,
    Clef::Alto,
    Clef::Bass,
    Clef::MezzoSoprano,
    Clef::BaritoneC,
    Clef::Soprano,
    Clef::Tenor,
];

impl Clef {
    pub fn as_str(&self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Alto => "alto",
            Clef::Bass => "bass",
            Clef::MezzoSoprano => "mezzo-soprano",
            Clef::BaritoneC => "baritone-c",
            Clef::Soprano => "soprano",
            Clef::Tenor => "tenor",
        }
    }

    /// Diatonic steps from a treble-clef line to the same line in this clef
    ///
    /// Reading treble notation in tenor clef sounds a ninth lower, so a note
    /// drawn with this offset applied lands on the line it had in treble.
    pub fn treble_offset(&self) -> i32 {
        match self {
            Clef::Treble => 0,
            Clef::Alto => -6,
            Clef::Bass => -12,
            Clef::MezzoSoprano => -4,
            Clef::BaritoneC => -10,
            Clef::Soprano => -2,
            Clef::Tenor => -8,
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clef to draw with, and the staff-position offset that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClefPosition {
    pub clef: Clef,
    pub position_offset: i32,
}

impl ClefPosition {
    pub const TREBLE: ClefPosition = ClefPosition {
        clef: Clef::Treble,
        position_offset: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_as_str() {
        for clef in CLEFS {
            let json = serde_json::to_string(&clef).unwrap();
            assert_eq!(json, format!("\"{}\"", clef.as_str()));
        }
    }

    #[test]
    fn test_offsets_are_distinct_mod_seven() {
        let mut seen = [false; 7];
        for clef in CLEFS {
            let slot = clef.treble_offset().rem_euclid(7) as usize;
            assert!(!seen[slot], "{} shares a diatonic shift", clef);
            seen[slot] = true;
        }
    }

    #[test]
    fn test_position_serialization() {
        let pos = ClefPosition { clef: Clef::Tenor, position_offset: -8 };
        assert_eq!(
            serde_json::to_string(&pos).unwrap(),
            r#"{"clef":"tenor","positionOffset":-8}"#
        );
    }
}
