//! Presentation colors for tones
//!
//! Custom tones draw from a small palette. The slot is derived from a
//! SHA-256 digest of the tone id so a tone keeps its color when other
//! custom tones are added or deleted.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Background, text and border colors for a tone chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneColors {
    pub color: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
}

impl ToneColors {
    pub const fn new(
        color: &'static str,
        text_color: &'static str,
        border_color: &'static str,
    ) -> Self {
        Self {
            color,
            text_color,
            border_color,
        }
    }
}

pub const CUSTOM_TONE_PALETTE: [ToneColors; 6] = [
    ToneColors::new("#dbeafe", "#1e40af", "#bfdbfe"),
    ToneColors::new("#f3e8ff", "#7c3aed", "#e9d5ff"),
    ToneColors::new("#fef3c7", "#d97706", "#fde68a"),
    ToneColors::new("#dcfce7", "#16a34a", "#bbf7d0"),
    ToneColors::new("#ffe4e6", "#e11d48", "#fecdd3"),
    ToneColors::new("#e0f2fe", "#0369a1", "#bae6fd"),
];

/// Pick the palette entry for a custom tone id
pub fn colors_for_custom_tone(id: &str) -> ToneColors {
    let digest = Sha256::digest(id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let slot = u64::from_be_bytes(prefix) % CUSTOM_TONE_PALETTE.len() as u64;
    CUSTOM_TONE_PALETTE[slot as usize]
}
