//! Tone catalog
//!
//! Built-in tone presets, the fallback phrase table, and color assignment
//! for user-created tones. Everything here is compiled-in and immutable.

pub mod catalog;
pub mod colors;
pub mod phrases;

pub use catalog::{
    available_tones, built_in_tones, find_tone, is_built_in_id, BuiltInTone, Tone, BUILT_IN_TONES,
    EMOJI_OPTIONS,
};
pub use colors::{colors_for_custom_tone, ToneColors, CUSTOM_TONE_PALETTE};
pub use phrases::{fallback_phrases, phrases_or_default};
