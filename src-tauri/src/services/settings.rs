//! Settings service
//!
//! Manages generator settings persistence using JSON file storage.
//! The API key is not stored here; see `credentials`.

use crate::config::{DEFAULT_COMPLETION_ENDPOINT, DEFAULT_COMPLETION_MODEL, MIN_INPUT_CHARS};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Remote generation and input policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Chat-completion endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,
    /// Minimum trimmed request length before generating
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
    /// Generate a starter once at launch; skips the length check and uses a
    /// placeholder request when the context is empty
    #[serde(default)]
    pub generate_on_launch: bool,
}

fn default_endpoint() -> String {
    DEFAULT_COMPLETION_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_COMPLETION_MODEL.to_string()
}

fn default_min_input_chars() -> usize {
    MIN_INPUT_CHARS
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            min_input_chars: default_min_input_chars(),
            generate_on_launch: false,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join("settings.json"),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let mut settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        if settings.generator.min_input_chars == 0 {
            tracing::warn!(
                "Minimum input length of 0 in settings, using {}",
                MIN_INPUT_CHARS
            );
            settings.generator.min_input_chars = MIN_INPUT_CHARS;
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::Generic(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Get generator settings
    pub async fn get_generator(&self) -> Result<GeneratorSettings> {
        let settings = self.load().await?;
        Ok(settings.generator)
    }

    /// Update generator settings
    pub async fn update_generator(&self, generator: GeneratorSettings) -> Result<()> {
        if generator.min_input_chars == 0 {
            return Err(AppError::Generic(
                "Minimum input length must be at least 1".to_string(),
            ));
        }

        let mut settings = self.load().await?;
        settings.generator = generator;
        self.save(&settings).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_service() -> (SettingsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let service = SettingsService::new(temp_dir.path().to_path_buf());
        (service, temp_dir)
    }

    #[tokio::test]
    async fn test_default_settings_created_on_load() {
        let (service, temp) = create_test_service();

        let settings = service.load().await.unwrap();

        assert_eq!(settings.generator.min_input_chars, 12);
        assert_eq!(settings.generator.endpoint, DEFAULT_COMPLETION_ENDPOINT);
        assert_eq!(settings.generator.model, DEFAULT_COMPLETION_MODEL);
        assert!(!settings.generator.generate_on_launch);
        assert!(temp.path().join("settings.json").exists());
    }

    #[tokio::test]
    async fn test_generator_settings_persist() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        {
            let service = SettingsService::new(path.clone());
            let updated = GeneratorSettings {
                model: "meta-llama/llama-3.3-70b-instruct".to_string(),
                min_input_chars: 8,
                ..GeneratorSettings::default()
            };
            service.update_generator(updated).await.unwrap();
        }

        {
            let service = SettingsService::new(path);
            let loaded = service.get_generator().await.unwrap();
            assert_eq!(loaded.model, "meta-llama/llama-3.3-70b-instruct");
            assert_eq!(loaded.min_input_chars, 8);
            assert_eq!(loaded.endpoint, DEFAULT_COMPLETION_ENDPOINT);
        }
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let (service, temp) = create_test_service();

        tokio::fs::write(
            temp.path().join("settings.json"),
            r#"{"generator":{"min_input_chars":20}}"#,
        )
        .await
        .unwrap();

        let loaded = service.get_generator().await.unwrap();
        assert_eq!(loaded.min_input_chars, 20);
        assert_eq!(loaded.model, DEFAULT_COMPLETION_MODEL);
    }

    #[tokio::test]
    async fn test_zero_min_length_rejected() {
        let (service, _temp) = create_test_service();

        let result = service
            .update_generator(GeneratorSettings {
                min_input_chars: 0,
                ..GeneratorSettings::default()
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_zero_min_length_in_file_is_clamped() {
        let (service, temp) = create_test_service();

        tokio::fs::write(
            temp.path().join("settings.json"),
            r#"{"generator":{"min_input_chars":0}}"#,
        )
        .await
        .unwrap();

        let loaded = service.get_generator().await.unwrap();
        assert_eq!(loaded.min_input_chars, MIN_INPUT_CHARS);
    }
}
