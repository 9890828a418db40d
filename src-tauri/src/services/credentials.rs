/// Credential Manager Service
/// Secure storage for the text-generation API key using the OS credential store
use crate::config::API_KEY_ENV_VAR;
use crate::error::{AppError, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "Nopeify";
const API_KEY_ENTRY: &str = "openrouter_api_key";

/// Credential manager for secure API key storage
pub struct CredentialManager;

impl CredentialManager {
    /// Store the API key securely in the OS credential store
    pub fn store_api_key(api_key: &str) -> Result<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::Credential("API key is empty".to_string()));
        }

        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| AppError::Credential(format!("Failed to create keyring entry: {}", e)))?;

        entry
            .set_password(api_key)
            .map_err(|e| AppError::Credential(format!("Failed to store API key: {}", e)))?;

        tracing::info!("API key stored in credential manager");
        Ok(())
    }

    /// Retrieve the API key from the OS credential store
    pub fn get_api_key() -> Result<String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| AppError::Credential(format!("Failed to create keyring entry: {}", e)))?;

        entry
            .get_password()
            .map_err(|e| AppError::Credential(format!("Failed to retrieve API key: {}", e)))
    }

    /// Delete the API key from the OS credential store
    pub fn delete_api_key() -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| AppError::Credential(format!("Failed to create keyring entry: {}", e)))?;

        entry
            .delete_credential()
            .map_err(|e| AppError::Credential(format!("Failed to delete API key: {}", e)))?;

        tracing::info!("API key deleted from credential manager");
        Ok(())
    }

    /// Check if an API key is stored
    pub fn has_api_key() -> bool {
        Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .and_then(|entry| entry.get_password())
            .is_ok()
    }

    /// API key from the environment, then the credential store.
    /// `None` means local-only mode.
    pub fn resolve_api_key() -> Option<String> {
        let from_env = std::env::var(API_KEY_ENV_VAR).ok();
        non_blank(from_env).or_else(|| non_blank(Self::get_api_key().ok()))
    }
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(" sk-or-1 ".to_string())), Some("sk-or-1".to_string()));
    }

    #[test]
    fn test_blank_key_not_stored() {
        assert!(matches!(
            CredentialManager::store_api_key("  "),
            Err(AppError::Credential(_))
        ));
    }
}
