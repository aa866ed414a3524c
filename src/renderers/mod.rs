//! Notation output
//!
//! Clef resolution and renderer-agnostic stave layout. The notation library
//! on the JavaScript side consumes these structures as-is.

pub mod clef;
pub mod defaults;
pub mod stave_layout;

pub use clef::resolve_clef;
pub use stave_layout::{layout_notes, layout_scale, layout_single_note, PlacedNote, StaveLayout};
