// Accidental - alteration applied to a natural letter

use serde::{Deserialize, Serialize};

/// Represents the type of accidental applied to a pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    None,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Build from a semitone offset (-2..=2)
    ///
    /// Returns None for offsets no single accidental can express.
    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::None),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Semitone offset from the natural letter
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::None => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Accidental::None)
    }

    /// Unicode symbol for display (empty for natural)
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::None => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        }
    }

    /// ASCII symbol, also the accidental code notation renderers expect
    pub fn ascii(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::None => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }
}
