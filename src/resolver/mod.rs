//! Click/position resolution
//!
//! Maps staff interaction back to pitches: click cycling on a staff
//! position, and reverse transposition from a chosen target to its origin.

pub mod click;
pub mod reverse;

pub use click::{resolve_chromatic_click, resolve_scale_click};
pub use reverse::{reverse_note_from_target, reverse_scale_from_target};
