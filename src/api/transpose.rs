//! Transposition API
//!
//! JavaScript-facing wrappers for note and scale transposition, staff click
//! cycling and reverse transposition. Raw indices are validated here; the
//! core functions only ever see typed values.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{self, js_error, serialize};
use crate::resolver;
use crate::transposition;
use crate::{wasm_info, wasm_log};

/// Result of an interval transposition
#[derive(Debug, Clone, Serialize)]
pub struct IntervalResult {
    /// Resulting chromatic note (0-11)
    pub note: u8,
    /// SCALES indices spelling that note
    pub candidates: Vec<u8>,
}

/// Transpose a chromatic note between two instrument keys
#[wasm_bindgen(js_name = transposeNote)]
pub fn transpose_note(note: u8, from_key: u8, to_key: u8) -> Result<u8, JsValue> {
    wasm_log!("transposeNote: note={}, from={}, to={}", note, from_key, to_key);

    let note = helpers::pitch_class(note).map_err(js_error)?;
    let from = helpers::instrument_key(from_key).map_err(js_error)?;
    let to = helpers::instrument_key(to_key).map_err(js_error)?;

    Ok(transposition::transpose_note(note, from, to).value())
}

/// Transpose a chromatic note by an interval ("up" or "down")
///
/// Returns `{ note, candidates }` where candidates are SCALES indices.
#[wasm_bindgen(js_name = transposeByInterval)]
pub fn transpose_by_interval(note: u8, interval: u8, direction: &str) -> Result<JsValue, JsValue> {
    wasm_log!("transposeByInterval: note={}, interval={}, direction={}", note, interval, direction);

    let note = helpers::pitch_class(note).map_err(js_error)?;
    let interval = helpers::interval(interval).map_err(js_error)?;
    let direction = helpers::direction(direction).map_err(js_error)?;

    let (result, candidates) = transposition::transpose_by_interval(note, interval, direction);
    let result = IntervalResult {
        note: result.value(),
        candidates: candidates.iter().map(|t| t.index()).collect(),
    };
    serialize(&result, "Failed to serialize interval result")
}

/// Transpose a scale root (SCALES index) between two instrument keys
#[wasm_bindgen(js_name = transposeScaleByKeys)]
pub fn transpose_scale_by_keys(root: u8, from_key: u8, to_key: u8, mode: u8) -> Result<u8, JsValue> {
    wasm_log!("transposeScaleByKeys: root={}, from={}, to={}, mode={}", root, from_key, to_key, mode);

    let root = helpers::tonic(root).map_err(js_error)?;
    let from = helpers::instrument_key(from_key).map_err(js_error)?;
    let to = helpers::instrument_key(to_key).map_err(js_error)?;
    let mode = helpers::mode(mode).map_err(js_error)?;

    Ok(transposition::transpose_scale_by_keys(root, from, to, mode).index())
}

/// Transpose a scale root (SCALES index) by an interval
#[wasm_bindgen(js_name = transposeScaleByInterval)]
pub fn transpose_scale_by_interval(
    root: u8,
    interval: u8,
    mode: u8,
    direction: &str,
) -> Result<u8, JsValue> {
    wasm_log!(
        "transposeScaleByInterval: root={}, interval={}, mode={}, direction={}",
        root,
        interval,
        mode,
        direction
    );

    let root = helpers::tonic(root).map_err(js_error)?;
    let interval = helpers::interval(interval).map_err(js_error)?;
    let mode = helpers::mode(mode).map_err(js_error)?;
    let direction = helpers::direction(direction).map_err(js_error)?;

    Ok(transposition::transpose_scale_by_interval(root, interval, mode, direction).index())
}

/// Chromatic note selected by clicking a staff position `click_count` times
#[wasm_bindgen(js_name = resolveChromaticClick)]
pub fn resolve_chromatic_click(stave_position: u8, click_count: u32) -> Result<u8, JsValue> {
    resolver::resolve_chromatic_click(stave_position, click_count)
        .map(|note| note.value())
        .map_err(js_error)
}

/// Scale root (SCALES index) selected by clicking a staff position
#[wasm_bindgen(js_name = resolveScaleClick)]
pub fn resolve_scale_click(stave_position: u8, click_count: u32) -> Result<u8, JsValue> {
    resolver::resolve_scale_click(stave_position, click_count)
        .map(|tonic| tonic.index())
        .map_err(js_error)
}

/// Origin note that transposes onto `target`
///
/// `method` is "key" (uses the keys) or "interval" (uses interval and
/// direction).
#[wasm_bindgen(js_name = reverseNoteFromTarget)]
pub fn reverse_note_from_target(
    target: u8,
    method: &str,
    from_key: u8,
    to_key: u8,
    interval: u8,
    direction: &str,
) -> Result<u8, JsValue> {
    let target = helpers::pitch_class(target).map_err(js_error)?;
    let t = helpers::transposition(method, from_key, to_key, interval, direction).map_err(js_error)?;

    let origin = resolver::reverse_note_from_target(target, &t);
    wasm_info!("reverseNoteFromTarget: {} via {:?} ← {}", target.value(), t, origin.value());
    Ok(origin.value())
}

/// Origin scale root (SCALES index) that transposes onto `target`
#[wasm_bindgen(js_name = reverseScaleFromTarget)]
pub fn reverse_scale_from_target(
    target: u8,
    method: &str,
    from_key: u8,
    to_key: u8,
    interval: u8,
    direction: &str,
    mode: u8,
) -> Result<u8, JsValue> {
    let target = helpers::tonic(target).map_err(js_error)?;
    let t = helpers::transposition(method, from_key, to_key, interval, direction).map_err(js_error)?;
    let mode = helpers::mode(mode).map_err(js_error)?;

    let origin = resolver::reverse_scale_from_target(target, &t, mode);
    wasm_info!("reverseScaleFromTarget: {} {} via {:?} ← {}", target, mode, t, origin);
    Ok(origin.index())
}
