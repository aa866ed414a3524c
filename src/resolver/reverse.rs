//! Reverse transposition
//!
//! Given a target the user picked on the result staff, work out which
//! origin note or scale would have produced it. Key transpositions swap
//! their keys; interval transpositions flip their direction.

use crate::models::{Mode, PitchClass, Tonic, Transposition};
use crate::transposition::{transpose, transpose_scale};

/// Origin note that `transposition` maps onto `target`
pub fn reverse_note_from_target(target: PitchClass, transposition: &Transposition) -> PitchClass {
    transpose(target, &transposition.inverse())
}

/// Origin scale root that `transposition` maps onto `target`
///
/// Only the enharmonic group is guaranteed to roundtrip: the origin is
/// respelled with the simplest key signature for `mode`.
pub fn reverse_scale_from_target(target: Tonic, transposition: &Transposition, mode: Mode) -> Tonic {
    transpose_scale(target, &transposition.inverse(), mode)
}
