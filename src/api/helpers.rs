//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization, raw-index
//! validation, error conversion and logging across all API operations.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{Result, TransposeError};
use crate::models::{Direction, InstrumentKey, Interval, Mode, PitchClass, Tonic, Transposition};

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert a lookup error into a JsValue, logging it on the way out
pub fn js_error(err: TransposeError) -> JsValue {
    wasm_error!("{}", err);
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Raw Index Validation
// ============================================================================

pub fn pitch_class(value: u8) -> Result<PitchClass> {
    PitchClass::new(value)
}

pub fn instrument_key(value: u8) -> Result<InstrumentKey> {
    InstrumentKey::new(value)
}

pub fn tonic(index: u8) -> Result<Tonic> {
    Tonic::from_index(index)
}

pub fn mode(index: u8) -> Result<Mode> {
    Mode::from_index(index)
}

pub fn interval(semitones: u8) -> Result<Interval> {
    Interval::new(semitones)
}

pub fn direction(value: &str) -> Result<Direction> {
    value.parse()
}

/// Build a transposition from the flat argument list the UI sends
///
/// `method` is "key" or "interval"; the arguments belonging to the other
/// method are ignored.
pub fn transposition(
    method: &str,
    from_key: u8,
    to_key: u8,
    interval_semitones: u8,
    direction_name: &str,
) -> Result<Transposition> {
    match method.to_lowercase().as_str() {
        "key" | "keys" => Ok(Transposition::Keys {
            from: instrument_key(from_key)?,
            to: instrument_key(to_key)?,
        }),
        "interval" => Ok(Transposition::Interval {
            interval: interval(interval_semitones)?,
            direction: direction(direction_name)?,
        }),
        _ => Err(TransposeError::UnknownMethod(method.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_transposition_ignores_interval_args() {
        let t = transposition("key", 10, 0, 99, "nowhere").unwrap();
        assert_eq!(
            t,
            Transposition::Keys {
                from: InstrumentKey::B_FLAT,
                to: InstrumentKey::C
            }
        );
    }

    #[test]
    fn test_interval_transposition() {
        let t = transposition("interval", 0, 0, 7, "down").unwrap();
        assert_eq!(t.semitones(), -7);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            transposition("key", 12, 0, 0, "up"),
            Err(TransposeError::InstrumentKeyOutOfRange(12))
        );
        assert_eq!(
            transposition("interval", 0, 0, 13, "up"),
            Err(TransposeError::IntervalOutOfRange(13))
        );
        assert_eq!(
            transposition("diagonal", 0, 0, 0, "up"),
            Err(TransposeError::UnknownMethod("diagonal".to_string()))
        );
    }

    #[test]
    fn test_index_validation() {
        assert!(tonic(16).is_ok());
        assert!(tonic(17).is_err());
        assert!(mode(7).is_err());
        assert!(pitch_class(12).is_err());
    }
}
