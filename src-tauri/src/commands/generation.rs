//! Generation commands
//!
//! The main screen: request text, tone selection, generating, and acting on
//! the result (copy, share, close).

use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::services::GenerationOutcome;
use crate::session::SessionState;
use tauri::{AppHandle, State};
use tauri_plugin_clipboard_manager::ClipboardExt;

/// Current session snapshot for rendering
#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionState> {
    Ok(state.session().await)
}

#[tauri::command]
pub async fn set_context(state: State<'_, AppState>, context: String) -> Result<()> {
    state.set_context(context).await;
    Ok(())
}

#[tauri::command]
pub async fn select_tone(state: State<'_, AppState>, tone_id: String) -> Result<()> {
    state.select_tone(&tone_id).await;
    Ok(())
}

/// Generate a decline for the current request and tone
#[tauri::command]
pub async fn generate_response(state: State<'_, AppState>) -> Result<GenerationOutcome> {
    let outcome = state.generate_response().await?;

    if let Some(advisory) = outcome.advisory() {
        tracing::warn!("{}: {}", advisory.title, advisory.message);
    }

    Ok(outcome)
}

/// Copy the last result to the clipboard
#[tauri::command]
pub async fn copy_result(app: AppHandle, state: State<'_, AppState>) -> Result<()> {
    let result = state
        .session()
        .await
        .result
        .ok_or_else(|| AppError::Generic("Nothing to copy yet".to_string()))?;

    app.clipboard()
        .write_text(result)
        .map_err(|e| AppError::Generic(format!("Failed to copy to clipboard: {}", e)))?;

    tracing::debug!("Result copied to clipboard");
    Ok(())
}

/// Text handed to the native share sheet
#[tauri::command]
pub async fn share_result(state: State<'_, AppState>) -> Result<String> {
    state
        .session()
        .await
        .result
        .ok_or_else(|| AppError::Generic("Nothing to share yet".to_string()))
}

/// Close the result sheet; clears the request text
#[tauri::command]
pub async fn close_result(state: State<'_, AppState>) -> Result<()> {
    state.clear_result().await;
    Ok(())
}
