//! Tone commands

use crate::app::AppState;
use crate::database::CustomToneDraft;
use crate::error::Result;
use crate::tones::{Tone, EMOJI_OPTIONS};
use tauri::State;

/// Built-in tones followed by custom tones
#[tauri::command]
pub async fn list_tones(state: State<'_, AppState>) -> Result<Vec<Tone>> {
    Ok(state.list_tones().await)
}

/// Glyphs offered by the tone creation form
#[tauri::command]
pub fn list_tone_emojis() -> Vec<&'static str> {
    EMOJI_OPTIONS.to_vec()
}

#[tauri::command]
pub async fn create_custom_tone(
    state: State<'_, AppState>,
    draft: CustomToneDraft,
) -> Result<Tone> {
    state.create_custom_tone(draft).await
}

#[tauri::command]
pub async fn delete_custom_tone(state: State<'_, AppState>, tone_id: String) -> Result<()> {
    state.delete_custom_tone(&tone_id).await
}
