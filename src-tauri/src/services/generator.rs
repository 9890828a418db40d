//! Response generator
//!
//! Resolves the tone, builds the prompt, makes at most one remote call, and
//! falls back to a canned phrase whenever the remote path is unavailable or
//! fails. Every accepted request ends with a displayable line.

use super::completion::CompletionClient;
use super::prompt::{build_prompt, sanitize_completion};
use crate::config::{
    DEFAULT_TONE_ID, FALLBACK_ADVISORY_MESSAGE, FALLBACK_ADVISORY_TITLE, MIN_INPUT_CHARS,
    RANDOM_TONE_ID, SYSTEM_INSTRUCTION,
};
use crate::error::{AppError, Result};
use crate::tones::{find_tone, phrases_or_default, Tone};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// Soft notice shown when a built-in line replaced a failed generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub title: String,
    pub message: String,
}

impl Advisory {
    fn fallback_used() -> Self {
        Self {
            title: FALLBACK_ADVISORY_TITLE.to_string(),
            message: FALLBACK_ADVISORY_MESSAGE.to_string(),
        }
    }
}

/// Result of one generate action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationOutcome {
    /// Text came from the remote service
    #[serde(rename_all = "camelCase")]
    Generated { text: String, tone_id: String },
    /// Text came from the fallback table. `advisory` is set when a remote
    /// attempt failed, and absent in local-only mode.
    #[serde(rename_all = "camelCase")]
    Fallback {
        text: String,
        tone_id: String,
        advisory: Option<Advisory>,
    },
    /// Input too short; nothing was generated
    #[serde(rename_all = "camelCase")]
    Rejected { min_chars: usize },
}

impl GenerationOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated { text, .. } | Self::Fallback { text, .. } => Some(text),
            Self::Rejected { .. } => None,
        }
    }

    /// Concrete tone that produced the text
    pub fn tone_id(&self) -> Option<&str> {
        match self {
            Self::Generated { tone_id, .. } | Self::Fallback { tone_id, .. } => Some(tone_id),
            Self::Rejected { .. } => None,
        }
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        match self {
            Self::Fallback { advisory, .. } => advisory.as_ref(),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Produces decline messages for a context and tone
#[derive(Clone)]
pub struct ResponseGenerator {
    client: Option<Arc<dyn CompletionClient>>,
    min_input_chars: usize,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::local_only()
    }
}

impl ResponseGenerator {
    /// `client` is `None` when no credential is configured
    pub fn new(client: Option<Arc<dyn CompletionClient>>, min_input_chars: usize) -> Self {
        Self {
            client,
            min_input_chars,
        }
    }

    /// Generator that never calls out
    pub fn local_only() -> Self {
        Self::new(None, MIN_INPUT_CHARS)
    }

    pub fn with_min_input_chars(mut self, min_input_chars: usize) -> Self {
        self.min_input_chars = min_input_chars;
        self
    }

    pub fn min_input_chars(&self) -> usize {
        self.min_input_chars
    }

    pub fn has_remote(&self) -> bool {
        self.client.is_some()
    }

    /// Ok when the trimmed context is long enough to generate from
    pub fn check_input(&self, context: &str) -> Result<()> {
        if context.trim().chars().count() < self.min_input_chars {
            return Err(AppError::InputTooShort {
                min: self.min_input_chars,
            });
        }
        Ok(())
    }

    /// Generate for a user action; short input is rejected without any work
    pub async fn generate(
        &self,
        context: &str,
        selected_tone_id: &str,
        tones: &[Tone],
    ) -> GenerationOutcome {
        if self.check_input(context).is_err() {
            tracing::debug!("Generation blocked: input shorter than {}", self.min_input_chars);
            return GenerationOutcome::Rejected {
                min_chars: self.min_input_chars,
            };
        }

        self.compose(context, selected_tone_id, tones).await
    }

    /// Generate on initial load, without the length check
    pub async fn generate_starter(
        &self,
        context: &str,
        selected_tone_id: &str,
        tones: &[Tone],
    ) -> GenerationOutcome {
        self.compose(context, selected_tone_id, tones).await
    }

    async fn compose(
        &self,
        context: &str,
        selected_tone_id: &str,
        tones: &[Tone],
    ) -> GenerationOutcome {
        let tone_id = resolve_tone(selected_tone_id, tones);
        let phrases = phrases_or_default(&tone_id);

        let Some(client) = &self.client else {
            tracing::warn!("No API key configured; using local responses");
            return GenerationOutcome::Fallback {
                text: pick_phrase(phrases),
                tone_id,
                advisory: None,
            };
        };

        let (label, emoji) = match find_tone(tones, &tone_id) {
            Some(tone) => (tone.label.as_str(), tone.emoji.as_str()),
            None => (tone_id.as_str(), "✨"),
        };
        let prompt = build_prompt(label, emoji, phrases, context);

        let failure = match client.complete(SYSTEM_INSTRUCTION, &prompt).await {
            Ok(raw) => match sanitize_completion(&raw) {
                Some(text) => {
                    tracing::info!("Generated response with tone {}", tone_id);
                    return GenerationOutcome::Generated { text, tone_id };
                }
                None => "completion was empty after cleanup".to_string(),
            },
            Err(e) => e.to_string(),
        };

        tracing::error!("Error fetching completion, using built-in response: {}", failure);
        GenerationOutcome::Fallback {
            text: pick_phrase(phrases),
            tone_id,
            advisory: Some(Advisory::fallback_used()),
        }
    }
}

/// Resolve `random` to a concrete tone; other ids pass through
pub fn resolve_tone(selected_tone_id: &str, tones: &[Tone]) -> String {
    resolve_tone_with(selected_tone_id, tones, &mut rand::thread_rng())
}

pub fn resolve_tone_with<R: Rng + ?Sized>(
    selected_tone_id: &str,
    tones: &[Tone],
    rng: &mut R,
) -> String {
    if selected_tone_id != RANDOM_TONE_ID {
        return selected_tone_id.to_string();
    }

    let pool: Vec<&Tone> = tones.iter().filter(|t| !t.is_random()).collect();
    pool.choose(rng)
        .map(|t| t.id.clone())
        .unwrap_or_else(|| DEFAULT_TONE_ID.to_string())
}

fn pick_phrase(phrases: &[&str]) -> String {
    phrases
        .choose(&mut rand::thread_rng())
        .map(|p| p.to_string())
        .unwrap_or_default()
}
