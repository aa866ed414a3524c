//! Playback planning
//!
//! Frequency mapping and tone scheduling for the audio collaborator. No
//! dependency on the transposition core beyond `PitchClass`.

pub mod defaults;
pub mod schedule;

pub use schedule::{note_frequency, plan_sequence, PlaybackHandle, PlaybackSequence, ScheduledTone};
