//! Transposer WASM API
//!
//! This module provides the JavaScript-facing API for the transposer UI.
//! It includes shared utilities for serialization, validation, and error
//! handling, as well as the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `transpose`: Note and scale transposition, staff clicks, reverse lookups
//! - `notation`: Scale building, clef resolution and stave layouts
//! - `playback`: Frequencies, tone schedules and cancellable playback sessions

pub mod helpers;
pub mod notation;
pub mod playback;
pub mod transpose;

pub use notation::{build_scale_js, layout_note_js, layout_scale_js, resolve_clef, ScaleView};
pub use playback::{note_frequency, plan_playback, play_sequence, PlaybackSession};
pub use transpose::{
    resolve_chromatic_click, resolve_scale_click, reverse_note_from_target, reverse_scale_from_target,
    transpose_by_interval, transpose_note, transpose_scale_by_interval, transpose_scale_by_keys, IntervalResult,
};
