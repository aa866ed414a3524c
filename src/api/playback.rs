//! Playback API
//!
//! Frequencies and tone schedules for the Web Audio scheduler on the
//! JavaScript side.

use wasm_bindgen::prelude::*;

use super::helpers::{self, js_error, serialize};
use crate::models::PitchClass;
use crate::playback::{self, defaults::DEFAULT_TEMPO_BPM, PlaybackSequence};
use crate::{wasm_error, wasm_log};

/// Frequency in Hz of a chromatic note in an octave (A4 = 440 Hz)
#[wasm_bindgen(js_name = noteFrequency)]
pub fn note_frequency(note: u8, octave: i32) -> Result<f64, JsValue> {
    let note = helpers::pitch_class(note).map_err(js_error)?;
    Ok(playback::note_frequency(note, octave))
}

/// Tone schedule for a sequence of chromatic notes
///
/// `tempo_bpm` of 0 or less uses the default tempo.
#[wasm_bindgen(js_name = planPlayback)]
pub fn plan_playback(notes: Vec<u8>, tempo_bpm: f64, octave: i32) -> Result<JsValue, JsValue> {
    let pitches = pitch_classes(notes)?;
    let tempo = effective_tempo(tempo_bpm);

    let tones = playback::plan_sequence(&pitches, tempo, octave);
    wasm_log!("planPlayback: {} tones at {} bpm", tones.len(), tempo);
    serialize(&tones, "Failed to serialize playback plan")
}

/// Start a cancellable playback of a note sequence
///
/// The host runs its own clock and calls `advance` with the elapsed time;
/// `cancel` may be called any number of times.
#[wasm_bindgen(js_name = playSequence)]
pub fn play_sequence(notes: Vec<u8>, tempo_bpm: f64, octave: i32) -> Result<PlaybackSession, JsValue> {
    let pitches = pitch_classes(notes)?;
    let tempo = effective_tempo(tempo_bpm);
    wasm_log!("playSequence: {} notes at {} bpm", pitches.len(), tempo);

    Ok(PlaybackSession {
        sequence: PlaybackSequence::new(&pitches, tempo, octave),
        advanced: 0,
    })
}

/// Playback of one planned sequence, driven by the host's clock
#[wasm_bindgen]
pub struct PlaybackSession {
    sequence: PlaybackSequence,
    advanced: usize,
}

#[wasm_bindgen]
impl PlaybackSession {
    /// Full tone plan
    pub fn tones(&self) -> Result<JsValue, JsValue> {
        serialize(&self.sequence.tones(), "Failed to serialize playback plan")
    }

    /// Stop playback. True only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self.sequence.handle().cancel();
        if cancelled {
            wasm_log!("Playback cancelled");
        }
        cancelled
    }

    #[wasm_bindgen(js_name = isCancelled)]
    pub fn is_cancelled(&self) -> bool {
        self.sequence.handle().is_cancelled()
    }

    /// Tones started by `elapsed` seconds (empty once cancelled)
    #[wasm_bindgen(js_name = tonesDue)]
    pub fn tones_due(&self, elapsed: f64) -> Result<JsValue, JsValue> {
        serialize(&self.sequence.tones_due(elapsed), "Failed to serialize due tones")
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.sequence.is_finished(elapsed)
    }

    /// Call `on_note_advance(index)` for every tone that started since the
    /// previous call. Returns how many tones were reported.
    pub fn advance(&mut self, elapsed: f64, on_note_advance: &js_sys::Function) -> Result<u32, JsValue> {
        let due = self.sequence.tones_due(elapsed);
        let fresh = due.get(self.advanced..).unwrap_or(&[]);

        for tone in fresh {
            on_note_advance
                .call1(&JsValue::NULL, &JsValue::from(tone.index as u32))
                .map_err(|e| {
                    wasm_error!("onNoteAdvance({}) threw: {:?}", tone.index, e);
                    e
                })?;
        }

        let count = fresh.len() as u32;
        self.advanced = self.advanced.max(due.len());
        Ok(count)
    }
}

fn pitch_classes(notes: Vec<u8>) -> Result<Vec<PitchClass>, JsValue> {
    notes
        .into_iter()
        .map(helpers::pitch_class)
        .collect::<Result<Vec<PitchClass>, _>>()
        .map_err(js_error)
}

/// Tempo of 0 or less falls back to the default
fn effective_tempo(tempo_bpm: f64) -> f64 {
    if tempo_bpm > 0.0 {
        tempo_bpm
    } else {
        DEFAULT_TEMPO_BPM
    }
}
