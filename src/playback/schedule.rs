//! Tone scheduling for note/scale playback
//!
//! Playback itself (oscillators, gain ramps) lives in the host. This module
//! computes what to play and when, and gives the host a handle it can cancel
//! from any callback without double-stopping.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::defaults::{
    A4_FREQUENCY_HZ, A_PITCH_CLASS, FADE_OUT_SECONDS, NOTE_GATE, REFERENCE_OCTAVE,
};
use crate::models::PitchClass;

/// Frequency of a pitch class in an octave, A4 = 440 Hz
pub fn note_frequency(note: PitchClass, octave: i32) -> f64 {
    let semitones = (note.value() as i32 - A_PITCH_CLASS) as f64 / 12.0;
    let octaves = (octave - REFERENCE_OCTAVE) as f64;
    A4_FREQUENCY_HZ * 2f64.powf(semitones + octaves)
}

/// One tone of a planned sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTone {
    /// Position in the input sequence (reported through onNoteAdvance)
    pub index: usize,
    pub frequency: f64,
    /// Seconds from the start of playback
    pub start: f64,
    /// Seconds from the start of playback at which the fade begins
    pub stop: f64,
    pub fade_out: f64,
}

/// Plan a sequence of pitches, one per beat at `tempo_bpm`
///
/// The first pitch sounds in `octave`. Each later pitch takes the octave
/// nearest to its predecessor: repeats stay put, a step down goes down, and
/// an ascending scale keeps rising past B. A tritone leap goes up.
pub fn plan_sequence(pitches: &[PitchClass], tempo_bpm: f64, octave: i32) -> Vec<ScheduledTone> {
    let beat = 60.0 / tempo_bpm.max(1.0);
    let mut previous: Option<i32> = None;

    pitches
        .iter()
        .enumerate()
        .map(|(index, &pitch)| {
            let semitone = match previous {
                None => octave * 12 + pitch.value() as i32,
                Some(prev) => prev + nearest_step(prev, pitch),
            };
            previous = Some(semitone);

            let start = index as f64 * beat;
            ScheduledTone {
                index,
                frequency: note_frequency(pitch, semitone.div_euclid(12)),
                start,
                stop: start + beat * NOTE_GATE,
                fade_out: FADE_OUT_SECONDS,
            }
        })
        .collect()
}

/// Signed step in -5..=6 from an absolute semitone to the nearest `pitch`
fn nearest_step(from: i32, pitch: PitchClass) -> i32 {
    let up = (pitch.value() as i32 - from).rem_euclid(12);
    if up > 6 {
        up - 12
    } else {
        up
    }
}

/// Cancellation handle shared between the scheduler and its callbacks
#[derive(Debug, Clone, Default)]
pub struct PlaybackHandle {
    cancelled: Arc<AtomicBool>,
}

impl PlaybackHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns true only for the call that cancelled.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A planned sequence together with its cancellation handle
#[derive(Debug, Clone)]
pub struct PlaybackSequence {
    tones: Vec<ScheduledTone>,
    handle: PlaybackHandle,
}

impl PlaybackSequence {
    pub fn new(pitches: &[PitchClass], tempo_bpm: f64, octave: i32) -> Self {
        PlaybackSequence {
            tones: plan_sequence(pitches, tempo_bpm, octave),
            handle: PlaybackHandle::new(),
        }
    }

    pub fn tones(&self) -> &[ScheduledTone] {
        &self.tones
    }

    pub fn handle(&self) -> PlaybackHandle {
        self.handle.clone()
    }

    /// Tones that have started by `elapsed` seconds; empty once cancelled
    ///
    /// The host calls onNoteAdvance with the index of the last tone returned.
    pub fn tones_due(&self, elapsed: f64) -> &[ScheduledTone] {
        if self.handle.is_cancelled() {
            return &[];
        }
        let due = self.tones.iter().take_while(|t| t.start <= elapsed).count();
        &self.tones[..due]
    }

    /// Whether every tone has finished fading by `elapsed` seconds
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.handle.is_cancelled()
            || self
                .tones
                .last()
                .map_or(true, |t| elapsed >= t.stop + t.fade_out)
    }
}
