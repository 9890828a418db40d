// Nopeify - Tone-styled decline generator
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use nopeify::{app, commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nopeify=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Nopeify application");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::get_session,
            commands::set_context,
            commands::select_tone,
            commands::generate_response,
            commands::copy_result,
            commands::share_result,
            commands::close_result,
            commands::list_tones,
            commands::list_tone_emojis,
            commands::create_custom_tone,
            commands::delete_custom_tone,
            commands::get_premium_status,
            commands::set_premium_status,
            commands::store_api_key,
            commands::has_api_key,
            commands::delete_api_key,
            commands::get_generator_settings,
            commands::update_generator_settings,
            commands::open_privacy_policy,
            commands::open_terms,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
