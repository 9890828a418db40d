//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `generation`: Request text, tone selection, and generating a decline
//! - `tones`: Tone catalog and custom tone management
//! - `account`: Premium status, API key, and external links

pub mod account;
pub mod generation;
pub mod tones;

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

// Re-export all commands for convenient registration in main.rs
pub use account::*;
pub use generation::*;
pub use tones::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}
