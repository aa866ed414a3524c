//! Key signature descriptor
//!
//! A key signature is an alteration type plus the staff positions (0=C ...
//! 6=B) it applies to. Positions are listed in the order the accidentals are
//! written (F C G D A E B for sharps, B E A D G C F for flats).

use serde::{Deserialize, Serialize};

use super::accidental::Accidental;
use super::spelled_note::Letter;
use super::tables::{FLAT_ORDER, SHARP_ORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alteration {
    Sharp,
    Flat,
}

impl Alteration {
    pub fn accidental(self) -> Accidental {
        match self {
            Alteration::Sharp => Accidental::Sharp,
            Alteration::Flat => Accidental::Flat,
        }
    }

    pub fn double_accidental(self) -> Accidental {
        match self {
            Alteration::Sharp => Accidental::DoubleSharp,
            Alteration::Flat => Accidental::DoubleFlat,
        }
    }

    fn order(self) -> &'static [Letter; 7] {
        match self {
            Alteration::Sharp => &SHARP_ORDER,
            Alteration::Flat => &FLAT_ORDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub alteration: Option<Alteration>,
    pub altered_notes: Vec<u8>,
    pub double_altered_notes: Vec<u8>,
}

impl Key {
    /// Key signature for a signed position on the line of fifths
    ///
    /// Positive counts are sharps, negative counts flats. Beyond seven the
    /// accidentals double, starting over from the head of the same order.
    pub fn from_fifths(fifths: i32) -> Key {
        if fifths == 0 {
            return Key::default();
        }

        let alteration = if fifths > 0 { Alteration::Sharp } else { Alteration::Flat };
        let count = fifths.unsigned_abs().min(14) as usize;
        let order = alteration.order();

        let altered_notes = order
            .iter()
            .take(count.min(7))
            .map(|letter| letter.staff_position())
            .collect();
        let double_altered_notes = order
            .iter()
            .take(count.saturating_sub(7))
            .map(|letter| letter.staff_position())
            .collect();

        Key {
            alteration: Some(alteration),
            altered_notes,
            double_altered_notes,
        }
    }

    /// Number of single plus double accidentals written in the signature
    pub fn accidental_count(&self) -> usize {
        self.altered_notes.len() + self.double_altered_notes.len()
    }

    /// Accidental the signature applies to a letter
    pub fn accidental_for(&self, letter: Letter) -> Accidental {
        let Some(alteration) = self.alteration else {
            return Accidental::None;
        };
        let position = letter.staff_position();
        if self.double_altered_notes.contains(&position) {
            alteration.double_accidental()
        } else if self.altered_notes.contains(&position) {
            alteration.accidental()
        } else {
            Accidental::None
        }
    }

    /// Alteration is absent exactly when no note is altered
    pub fn is_consistent(&self) -> bool {
        let empty = self.altered_notes.is_empty() && self.double_altered_notes.is_empty();
        self.alteration.is_none() == empty
            && self.altered_notes.len() <= 7
            && self.double_altered_notes.len() <= 7
    }
}
