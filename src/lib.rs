//! Transposer WASM Module
//!
//! Pitch transposition for transposing instruments: notes and scales
//! between instrument keys or by interval, key signatures, clef
//! substitution, staff click cycling and playback planning.

pub mod error;
pub mod models;
pub mod transposition;
pub mod resolver;
pub mod renderers;
pub mod playback;
pub mod api;

// Re-export commonly used types
pub use error::TransposeError;
pub use models::{InstrumentKey, Interval, Mode, PitchClass, Scale, Tonic, Transposition};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        console_warn(&format!("logger already initialized: {}", e));
    }

    log::info!("Transposer WASM module initialized");
}

#[cfg(feature = "console_log")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
}
