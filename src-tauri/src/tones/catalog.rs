//! Built-in tones and the combined catalog view

use super::colors::{colors_for_custom_tone, ToneColors};
use crate::config::RANDOM_TONE_ID;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A compiled-in tone preset
#[derive(Debug, Clone, Copy)]
pub struct BuiltInTone {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub colors: ToneColors,
}

pub const BUILT_IN_TONES: [BuiltInTone; 6] = [
    BuiltInTone {
        id: RANDOM_TONE_ID,
        label: "Random",
        emoji: "🎲",
        description: "Surprise me",
        colors: ToneColors::new("#e0f2fe", "#0369a1", "#bae6fd"),
    },
    BuiltInTone {
        id: "sarcastic",
        label: "Spicy",
        emoji: "🌶️",
        description: "Don't ask again",
        colors: ToneColors::new("#fef3c7", "#d97706", "#fde68a"),
    },
    BuiltInTone {
        id: "petty",
        label: "Petty",
        emoji: "💅",
        description: "Bless your heart",
        colors: ToneColors::new("#fed7aa", "#ea580c", "#fdba74"),
    },
    BuiltInTone {
        id: "genz",
        label: "Gen Z",
        emoji: "📱",
        description: "It's a flop",
        colors: ToneColors::new("#e9d5ff", "#9333ea", "#d8b4fe"),
    },
    BuiltInTone {
        id: "dramatic",
        label: "Drama",
        emoji: "✨",
        description: "The audacity!",
        colors: ToneColors::new("#fce7f3", "#c026d3", "#f3e8ff"),
    },
    BuiltInTone {
        id: "oldenglish",
        label: "Victorian",
        emoji: "🎩",
        description: "Good day sir",
        colors: ToneColors::new("#fef3c7", "#92400e", "#fde68a"),
    },
];

/// Glyphs offered when creating a custom tone
pub const EMOJI_OPTIONS: [&str; 48] = [
    "🔥", "💎", "🌟", "⚡", "💪", "🎯",
    "🎨", "🎭", "🎪", "🎬", "🎸", "🎤",
    "🌈", "☀️", "🌙", "⭐", "💫", "✨",
    "🦄", "🦋", "🐝", "🦁", "🐯", "🐺",
    "🍕", "🍔", "🌮", "🍜", "☕", "🍰",
    "🎮", "🎲", "🎰", "🏆", "👑", "💰",
    "🚀", "🛸", "🌊", "🏔️", "🗿", "🔮",
    "💖", "💜", "🧡", "💛", "💚", "💙",
];

/// A tone as presented to the frontend and consumed by the generator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub description: String,
    pub colors: ToneColors,
    pub is_custom: bool,
    /// Only set for custom tones
    pub created_at: Option<DateTime<Utc>>,
}

impl Tone {
    /// Build a custom tone; colors follow from the id
    pub fn custom(
        id: String,
        label: String,
        emoji: String,
        description: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let colors = colors_for_custom_tone(&id);
        Self {
            id,
            label,
            emoji,
            description,
            colors,
            is_custom: true,
            created_at: Some(created_at),
        }
    }

    pub fn is_random(&self) -> bool {
        self.id == RANDOM_TONE_ID
    }
}

impl From<&BuiltInTone> for Tone {
    fn from(tone: &BuiltInTone) -> Self {
        Self {
            id: tone.id.to_string(),
            label: tone.label.to_string(),
            emoji: tone.emoji.to_string(),
            description: tone.description.to_string(),
            colors: tone.colors,
            is_custom: false,
            created_at: None,
        }
    }
}

pub fn built_in_tones() -> Vec<Tone> {
    BUILT_IN_TONES.iter().map(Tone::from).collect()
}

/// Built-ins (with the random meta tone first) followed by custom tones
pub fn available_tones(custom: &[Tone]) -> Vec<Tone> {
    let mut tones = built_in_tones();
    tones.extend(custom.iter().cloned());
    tones
}

pub fn find_tone<'a>(tones: &'a [Tone], id: &str) -> Option<&'a Tone> {
    tones.iter().find(|t| t.id == id)
}

pub fn is_built_in_id(id: &str) -> bool {
    BUILT_IN_TONES.iter().any(|t| t.id == id)
}
