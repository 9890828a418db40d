//! Session state
//!
//! The mutable state behind the main screen: what the user typed, which
//! tone is selected, the last result, and whether a generation is running.
//! Owned by `AppState` and only touched through these methods.

use crate::config::{DEFAULT_TONE_ID, MIN_INPUT_CHARS, RANDOM_TONE_ID};
use crate::services::GenerationOutcome;
use crate::tones::{available_tones, Tone};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub context: String,
    pub selected_tone: String,
    /// Concrete tone behind the last result (never `random`)
    pub tone_used: String,
    pub result: Option<String>,
    pub input_error: bool,
    pub in_flight: bool,
    pub custom_tones: Vec<Tone>,
    pub is_premium: bool,
    pub min_input_chars: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(MIN_INPUT_CHARS)
    }
}

impl SessionState {
    pub fn new(min_input_chars: usize) -> Self {
        Self {
            context: String::new(),
            selected_tone: DEFAULT_TONE_ID.to_string(),
            tone_used: DEFAULT_TONE_ID.to_string(),
            result: None,
            input_error: false,
            in_flight: false,
            custom_tones: Vec::new(),
            is_premium: false,
            min_input_chars,
        }
    }

    pub fn has_min_input(&self) -> bool {
        self.context.trim().chars().count() >= self.min_input_chars
    }

    /// Update the request text; a long-enough text clears a shown input error
    pub fn set_context(&mut self, context: String) {
        self.context = context;
        if self.input_error && self.has_min_input() {
            self.input_error = false;
        }
    }

    pub fn select_tone(&mut self, tone_id: &str) {
        self.selected_tone = tone_id.to_string();
        if tone_id != RANDOM_TONE_ID {
            self.tone_used = tone_id.to_string();
        }
    }

    /// Built-ins plus the loaded custom tones
    pub fn tones(&self) -> Vec<Tone> {
        available_tones(&self.custom_tones)
    }

    /// Mark a generation as running. Returns `false` if one already is.
    pub fn begin_generation(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.input_error = false;
        true
    }

    /// Record an outcome and clear the in-flight flag
    pub fn finish_generation(&mut self, outcome: &GenerationOutcome) {
        self.in_flight = false;
        match outcome {
            GenerationOutcome::Rejected { .. } => self.input_error = true,
            _ => {
                if let Some(tone_id) = outcome.tone_id() {
                    self.tone_used = tone_id.to_string();
                }
                self.result = outcome.text().map(str::to_string);
            }
        }
    }

    /// Reset the selection if the deleted tone was in use
    pub fn tone_deleted(&mut self, tone_id: &str) {
        self.custom_tones.retain(|t| t.id != tone_id);
        if self.selected_tone == tone_id {
            self.selected_tone = DEFAULT_TONE_ID.to_string();
            self.tone_used = DEFAULT_TONE_ID.to_string();
        }
    }

    /// Closing the result sheet also clears the request text
    pub fn clear_result(&mut self) {
        self.result = None;
        self.context.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionState::default();
        assert_eq!(session.selected_tone, "sarcastic");
        assert_eq!(session.tone_used, "sarcastic");
        assert!(!session.in_flight);
        assert_eq!(session.tones().len(), 6);
    }

    #[test]
    fn test_select_random_keeps_tone_used() {
        let mut session = SessionState::default();
        session.select_tone("petty");
        assert_eq!(session.tone_used, "petty");

        session.select_tone("random");
        assert_eq!(session.selected_tone, "random");
        assert_eq!(session.tone_used, "petty");
    }

    #[test]
    fn test_input_error_clears_once_long_enough() {
        let mut session = SessionState::default();
        session.finish_generation(&GenerationOutcome::Rejected { min_chars: 12 });
        assert!(session.input_error);

        session.set_context("hey".to_string());
        assert!(session.input_error);

        session.set_context("hey, can you help me move?".to_string());
        assert!(!session.input_error);
    }

    #[test]
    fn test_only_one_generation_in_flight() {
        let mut session = SessionState::default();
        assert!(session.begin_generation());
        assert!(!session.begin_generation());

        session.finish_generation(&GenerationOutcome::Fallback {
            text: "Naur.".to_string(),
            tone_id: "genz".to_string(),
            advisory: None,
        });
        assert!(!session.in_flight);
        assert_eq!(session.result.as_deref(), Some("Naur."));
        assert_eq!(session.tone_used, "genz");
        assert!(session.begin_generation());
    }

    #[test]
    fn test_deleting_selected_tone_resets_selection() {
        let mut session = SessionState::default();
        session.select_tone("custom_1_abcdefg");
        session.tone_deleted("custom_1_abcdefg");
        assert_eq!(session.selected_tone, "sarcastic");
        assert_eq!(session.tone_used, "sarcastic");

        session.select_tone("petty");
        session.tone_deleted("custom_2_abcdefg");
        assert_eq!(session.selected_tone, "petty");
    }

    #[test]
    fn test_clear_result_clears_context() {
        let mut session = SessionState::default();
        session.set_context("Can you cover my shift Saturday?".to_string());
        session.result = Some("No.".to_string());

        session.clear_result();
        assert!(session.result.is_none());
        assert!(session.context.is_empty());
    }
}
