//! Account commands
//!
//! Premium status, the text-generation API key and settings, and the legal
//! links.

use crate::app::AppState;
use crate::config::{PRIVACY_URL, TERMS_URL};
use crate::error::{AppError, Result};
use crate::services::{CredentialManager, GeneratorSettings};
use tauri::{AppHandle, State};
use tauri_plugin_shell::ShellExt;

// ===== Premium =====

#[tauri::command]
pub async fn get_premium_status(state: State<'_, AppState>) -> Result<bool> {
    Ok(state.session().await.is_premium)
}

#[tauri::command]
pub async fn set_premium_status(state: State<'_, AppState>, is_premium: bool) -> Result<()> {
    state.set_premium_status(is_premium).await
}

// ===== API Key =====

/// Store the API key and switch the generator to remote mode
#[tauri::command]
pub async fn store_api_key(state: State<'_, AppState>, api_key: String) -> Result<()> {
    CredentialManager::store_api_key(&api_key)?;
    state
        .reload_generator(CredentialManager::resolve_api_key())
        .await
}

#[tauri::command]
pub fn has_api_key() -> Result<bool> {
    Ok(CredentialManager::resolve_api_key().is_some())
}

/// Forget the stored API key; falls back to local responses unless the
/// environment still provides one
#[tauri::command]
pub async fn delete_api_key(state: State<'_, AppState>) -> Result<()> {
    CredentialManager::delete_api_key()?;
    state
        .reload_generator(CredentialManager::resolve_api_key())
        .await
}

// ===== Generator Settings =====

#[tauri::command]
pub async fn get_generator_settings(state: State<'_, AppState>) -> Result<GeneratorSettings> {
    state.settings_service.get_generator().await
}

#[tauri::command]
pub async fn update_generator_settings(
    state: State<'_, AppState>,
    settings: GeneratorSettings,
) -> Result<()> {
    state
        .update_generator_settings(settings, CredentialManager::resolve_api_key())
        .await
}

// ===== External Links =====

#[tauri::command]
pub fn open_privacy_policy(app: AppHandle) -> Result<()> {
    open_link(&app, PRIVACY_URL)
}

#[tauri::command]
pub fn open_terms(app: AppHandle) -> Result<()> {
    open_link(&app, TERMS_URL)
}

#[allow(deprecated)]
fn open_link(app: &AppHandle, url: &str) -> Result<()> {
    app.shell()
        .open(url, None)
        .map_err(|e| AppError::Generic(format!("Unable to open link: {}", e)))?;

    tracing::info!("Opened external link: {}", url);
    Ok(())
}
