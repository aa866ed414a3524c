//! Default values for playback scheduling

/// Reference pitch of A4 in Hz
pub const A4_FREQUENCY_HZ: f64 = 440.0;

/// Pitch class of A
pub const A_PITCH_CLASS: i32 = 9;

/// Octave of the reference A
pub const REFERENCE_OCTAVE: i32 = 4;

/// Default tempo in beats per minute (one note per beat)
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Fade applied when a tone stops or playback is cancelled, in seconds
pub const FADE_OUT_SECONDS: f64 = 0.05;

/// Fraction of each beat the tone sounds before its fade starts
pub const NOTE_GATE: f64 = 0.9;
