//! Staff click cycling
//!
//! Clicking a staff position repeatedly walks through the pitches that can
//! be written there: the natural first, then its sharp, then its flat where
//! that spelling is not already a natural of a neighbouring position. The
//! click count is 1-indexed and wraps around the cycle.

use crate::error::{Result, TransposeError};
use crate::models::{PitchClass, Tonic};

/// Chromatic candidates per staff position (C ... B)
///
/// E and B have a single candidate: E♯/B♯ and F♭/C♭ are naturals of the
/// neighbouring position.
const CHROMATIC_CYCLES: [&[u8]; 7] = [
    &[0, 1],     // C, C♯
    &[2, 3, 1],  // D, D♯, D♭
    &[4],        // E
    &[5, 6],     // F, F♯
    &[7, 8, 6],  // G, G♯, G♭
    &[9, 10, 8], // A, A♯, A♭
    &[11],       // B
];

/// SCALES candidates per staff position (C ... B)
const SCALE_CYCLES: [&[Tonic]; 7] = [
    &[Tonic::C, Tonic::Cs],
    &[Tonic::D, Tonic::Ds, Tonic::Db],
    &[Tonic::E, Tonic::Eb],
    &[Tonic::F, Tonic::Fs],
    &[Tonic::G, Tonic::Gs, Tonic::Gb],
    &[Tonic::A, Tonic::As, Tonic::Ab],
    &[Tonic::B, Tonic::Bb],
];

fn select<T: Copy>(cycles: &[&[T]; 7], stave_position: u8, click_count: u32) -> Result<T> {
    let cycle = cycles
        .get(stave_position as usize)
        .ok_or(TransposeError::StavePositionOutOfRange(stave_position as i32))?;
    if click_count == 0 {
        return Err(TransposeError::ClickCountZero);
    }
    Ok(cycle[(click_count as usize - 1) % cycle.len()])
}

/// Chromatic note selected after `click_count` clicks on `stave_position`
pub fn resolve_chromatic_click(stave_position: u8, click_count: u32) -> Result<PitchClass> {
    let value = select(&CHROMATIC_CYCLES, stave_position, click_count)?;
    PitchClass::new(value)
}

/// Scale root selected after `click_count` clicks on `stave_position`
pub fn resolve_scale_click(stave_position: u8, click_count: u32) -> Result<Tonic> {
    select(&SCALE_CYCLES, stave_position, click_count)
}
