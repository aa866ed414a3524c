//! Scale building and notation API
//!
//! Builds scales, resolves clefs and produces stave layouts for the
//! notation renderer.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{self, js_error, serialize};
use crate::models::{ClefPosition, Key, Scale};
use crate::renderers::{self, layout_scale, layout_single_note};
use crate::transposition::build_scale;
use crate::wasm_log;

/// One spelled degree as shown in the UI
#[derive(Debug, Clone, Serialize)]
pub struct DegreeName {
    /// Display spelling ("F♯")
    pub note: String,
    /// German spelling ("Fis")
    pub german: String,
}

/// Scale as handed to JavaScript
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleView {
    /// SCALES index of the root
    pub root: u8,
    pub mode: u8,
    pub notes: Vec<u8>,
    pub notes_in_scale: Vec<DegreeName>,
    pub reduced_notes: Vec<u8>,
    pub key: Key,
    pub circle_position: u8,
}

impl From<&Scale> for ScaleView {
    fn from(scale: &Scale) -> Self {
        ScaleView {
            root: scale.root.index(),
            mode: scale.mode.index(),
            notes: scale.notes.iter().map(|n| n.value()).collect(),
            notes_in_scale: scale
                .notes_in_scale
                .iter()
                .map(|n| DegreeName {
                    note: n.display_name(),
                    german: n.german_name(),
                })
                .collect(),
            reduced_notes: scale.reduced_notes.to_vec(),
            key: scale.key.clone(),
            circle_position: scale.circle_position(),
        }
    }
}

/// Build the scale for a SCALES root and mode index
#[wasm_bindgen(js_name = buildScale)]
pub fn build_scale_js(root: u8, mode: u8) -> Result<JsValue, JsValue> {
    wasm_log!("buildScale: root={}, mode={}", root, mode);

    let root = helpers::tonic(root).map_err(js_error)?;
    let mode = helpers::mode(mode).map_err(js_error)?;

    let scale = build_scale(root, mode);
    serialize(&ScaleView::from(&scale), "Failed to serialize scale")
}

/// Clef and position offset for reading `from_key` notation as `to_key`
#[wasm_bindgen(js_name = resolveClef)]
pub fn resolve_clef(from_key: u8, to_key: u8) -> Result<JsValue, JsValue> {
    let from = helpers::instrument_key(from_key).map_err(js_error)?;
    let to = helpers::instrument_key(to_key).map_err(js_error)?;

    let position = renderers::resolve_clef(from, to);
    wasm_log!("resolveClef: {} → {}: {:?}", from, to, position);
    serialize(&position, "Failed to serialize clef")
}

/// Stave layout for a scale, drawn in the clef resolved for the key pair
///
/// Pass the same key twice for a plain treble stave.
#[wasm_bindgen(js_name = layoutScale)]
pub fn layout_scale_js(
    root: u8,
    mode: u8,
    octave: i32,
    from_key: u8,
    to_key: u8,
) -> Result<JsValue, JsValue> {
    let root = helpers::tonic(root).map_err(js_error)?;
    let mode = helpers::mode(mode).map_err(js_error)?;
    let clef = clef_for(from_key, to_key)?;

    let scale = build_scale(root, mode);
    let layout = layout_scale(&scale, octave, clef);
    wasm_log!("layoutScale: {} {} → {} notes, width {}", root, mode, layout.notes.len(), layout.width);
    serialize(&layout, "Failed to serialize stave layout")
}

/// Stave layout for a single note given by its SCALES spelling
#[wasm_bindgen(js_name = layoutNote)]
pub fn layout_note_js(spelling: u8, octave: i32, from_key: u8, to_key: u8) -> Result<JsValue, JsValue> {
    let tonic = helpers::tonic(spelling).map_err(js_error)?;
    let clef = clef_for(from_key, to_key)?;

    let layout = layout_single_note(tonic.spelling(), octave, clef);
    serialize(&layout, "Failed to serialize stave layout")
}

fn clef_for(from_key: u8, to_key: u8) -> Result<ClefPosition, JsValue> {
    let from = helpers::instrument_key(from_key).map_err(js_error)?;
    let to = helpers::instrument_key(to_key).map_err(js_error)?;
    Ok(renderers::resolve_clef(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, Tonic};

    #[test]
    fn test_scale_view_shape() {
        let scale = build_scale(Tonic::Bb, Mode::Major);
        let view = ScaleView::from(&scale);
        assert_eq!(view.root, 15);
        assert_eq!(view.notes, vec![10, 0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(view.notes_in_scale[0].note, "B♭");
        assert_eq!(view.notes_in_scale[0].german, "B");
        assert_eq!(view.circle_position, 10);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("notesInScale").is_some());
        assert!(json.get("reducedNotes").is_some());
        assert_eq!(json["key"]["alteration"], "flat");
    }
}
