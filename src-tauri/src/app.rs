//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::database::{create_pool, CustomToneDraft, Repository};
use crate::error::{AppError, Result};
use crate::services::{
    AppSettings, CompletionClient, GenerationOutcome, GeneratorSettings, OpenRouterClient,
    PresetStore, ResponseGenerator, SettingsService,
};
use crate::session::SessionState;
use crate::tones::Tone;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub preset_store: PresetStore,
    pub settings_service: SettingsService,
    generator: Arc<RwLock<ResponseGenerator>>,
    session: Arc<Mutex<SessionState>>,
}

/// Build a generator from settings; no key means local-only mode
pub fn build_generator(settings: &GeneratorSettings, api_key: Option<String>) -> ResponseGenerator {
    let client = api_key.map(|key| {
        Arc::new(OpenRouterClient::new(
            key,
            settings.endpoint.clone(),
            settings.model.clone(),
        )) as Arc<dyn CompletionClient>
    });

    if client.is_none() {
        tracing::warn!("No API key configured; generation will use local responses");
    }

    // Empty input must never generate
    ResponseGenerator::new(client, settings.min_input_chars.max(1))
}

impl AppState {
    /// Open storage under `app_data_dir` and load persisted presets
    pub async fn initialize(app_data_dir: PathBuf, api_key: Option<String>) -> Result<Self> {
        tracing::info!("App data directory: {:?}", app_data_dir);
        std::fs::create_dir_all(&app_data_dir)?;

        let pool = create_pool(&app_data_dir.join("nopeify.db")).await?;
        let preset_store = PresetStore::new(Repository::new(pool));

        let settings_service = SettingsService::new(app_data_dir.clone());
        let settings = settings_service.load().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        });

        let generator = build_generator(&settings.generator, api_key);

        let (custom_tones, is_premium) = tokio::join!(
            preset_store.load_custom_tones(),
            preset_store.load_premium_status()
        );

        let mut session = SessionState::new(settings.generator.min_input_chars);
        session.custom_tones = custom_tones;
        session.is_premium = is_premium;

        tracing::info!(
            "Loaded {} custom tones, premium={}",
            session.custom_tones.len(),
            is_premium
        );

        Ok(Self {
            app_data_dir,
            preset_store,
            settings_service,
            generator: Arc::new(RwLock::new(generator)),
            session: Arc::new(Mutex::new(session)),
        })
    }

    /// Current generator (cheap clone)
    pub async fn generator(&self) -> ResponseGenerator {
        self.generator.read().await.clone()
    }

    pub async fn replace_generator(&self, generator: ResponseGenerator) {
        self.session.lock().await.min_input_chars = generator.min_input_chars();
        *self.generator.write().await = generator;
    }

    /// Rebuild the generator after the API key or settings changed
    pub async fn reload_generator(&self, api_key: Option<String>) -> Result<()> {
        let settings = self.settings_service.get_generator().await?;
        self.replace_generator(build_generator(&settings, api_key))
            .await;
        tracing::info!("Generator reloaded");
        Ok(())
    }

    /// Persist new generator settings and rebuild the generator from them
    pub async fn update_generator_settings(
        &self,
        settings: GeneratorSettings,
        api_key: Option<String>,
    ) -> Result<()> {
        self.settings_service.update_generator(settings.clone()).await?;
        self.reload_generator(api_key).await?;
        self.session.lock().await.min_input_chars = settings.min_input_chars;
        Ok(())
    }

    pub async fn session(&self) -> SessionState {
        self.session.lock().await.clone()
    }

    pub async fn set_context(&self, context: String) {
        self.session.lock().await.set_context(context);
    }

    pub async fn select_tone(&self, tone_id: &str) {
        self.session.lock().await.select_tone(tone_id);
    }

    pub async fn clear_result(&self) {
        self.session.lock().await.clear_result();
    }

    pub async fn list_tones(&self) -> Vec<Tone> {
        self.session.lock().await.tones()
    }

    /// Generate for the current session text and tone.
    ///
    /// Fails only when a generation is already running; a too-short input is
    /// reported as a `Rejected` outcome.
    pub async fn generate_response(&self) -> Result<GenerationOutcome> {
        let (context, selected_tone, tones) = {
            let mut session = self.session.lock().await;
            if !session.begin_generation() {
                return Err(AppError::Generic(
                    "A response is already being generated".to_string(),
                ));
            }
            (
                session.context.clone(),
                session.selected_tone.clone(),
                session.tones(),
            )
        };

        let outcome = self
            .generator()
            .await
            .generate(&context, &selected_tone, &tones)
            .await;

        self.session.lock().await.finish_generation(&outcome);
        Ok(outcome)
    }

    /// Initial-load generation; skips the length check
    pub async fn generate_starter(&self) -> Option<GenerationOutcome> {
        let (context, selected_tone, tones) = {
            let mut session = self.session.lock().await;
            if !session.begin_generation() {
                return None;
            }
            (
                session.context.clone(),
                session.selected_tone.clone(),
                session.tones(),
            )
        };

        let outcome = self
            .generator()
            .await
            .generate_starter(&context, &selected_tone, &tones)
            .await;

        self.session.lock().await.finish_generation(&outcome);
        Some(outcome)
    }

    /// Create a custom tone; premium only
    pub async fn create_custom_tone(&self, draft: CustomToneDraft) -> Result<Tone> {
        if !self.session.lock().await.is_premium {
            return Err(AppError::PremiumRequired);
        }

        let tone = self.preset_store.create_custom_tone(draft).await?;
        let custom_tones = self.preset_store.load_custom_tones().await;
        self.session.lock().await.custom_tones = custom_tones;

        tracing::info!("\"{}\" tone created", tone.label);
        Ok(tone)
    }

    pub async fn delete_custom_tone(&self, tone_id: &str) -> Result<()> {
        self.preset_store.delete_custom_tone(tone_id).await?;
        let custom_tones = self.preset_store.load_custom_tones().await;

        let mut session = self.session.lock().await;
        session.custom_tones = custom_tones;
        session.tone_deleted(tone_id);
        Ok(())
    }

    pub async fn set_premium_status(&self, is_premium: bool) -> Result<()> {
        self.preset_store.save_premium_status(is_premium).await?;
        self.session.lock().await.is_premium = is_premium;
        Ok(())
    }
}

/// Application setup - called once on startup
#[cfg(feature = "desktop")]
pub fn setup(app: &mut tauri::App) -> Result<()> {
    use crate::services::CredentialManager;
    use tauri::Manager;

    tracing::info!("Initializing application");

    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Generic(format!("Failed to get app data dir: {}", e)))?;

    let api_key = CredentialManager::resolve_api_key();
    let state = tauri::async_runtime::block_on(AppState::initialize(app_data_dir, api_key))?;

    let launch_state = state.clone();
    tauri::async_runtime::spawn(async move {
        match launch_state.settings_service.get_generator().await {
            Ok(settings) if settings.generate_on_launch => {
                if let Some(outcome) = launch_state.generate_starter().await {
                    tracing::info!("Starter response ready ({:?})", outcome.tone_id());
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Failed to generate initial response: {}", e),
        }
    });

    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
