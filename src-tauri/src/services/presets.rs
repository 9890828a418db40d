//! Preset store
//!
//! Durable storage for user-created tones and the premium flag, on top of
//! the key-value repository. Reads never fail: missing or unreadable data
//! comes back as an empty list / `false`. Writes surface storage errors so
//! the caller can tell the user their tone was not saved.

use crate::config::{
    CUSTOM_TONES_KEY, CUSTOM_TONE_ID_PREFIX, CUSTOM_TONE_ID_SUFFIX_LEN, DEFAULT_CUSTOM_EMOJI,
    MAX_TONE_DESCRIPTION_CHARS, MAX_TONE_LABEL_CHARS, PREMIUM_STATUS_KEY,
};
use crate::database::{CustomToneDraft, NewCustomTone, Repository, StoredCustomTone};
use crate::error::{AppError, Result};
use crate::tones::{is_built_in_id, Tone, EMOJI_OPTIONS};
use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Service for persisting custom tones and premium status
#[derive(Clone)]
pub struct PresetStore {
    repo: Repository,
}

impl PresetStore {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Load custom tones in saved order; empty on missing or unreadable data
    pub async fn load_custom_tones(&self) -> Vec<Tone> {
        match self.read_stored_tones().await {
            Ok(stored) => stored.iter().map(to_tone).collect(),
            Err(e) => {
                tracing::error!("Failed to load custom tones: {}", e);
                Vec::new()
            }
        }
    }

    /// Append a tone to the persisted list and return it as loaded.
    ///
    /// Existing entries keep their creation time; only the new entry is
    /// stamped. Ids are not checked for uniqueness.
    pub async fn save_custom_tone(&self, candidate: NewCustomTone) -> Result<Tone> {
        let mut stored = match self.read_stored_tones().await {
            Ok(stored) => stored,
            Err(AppError::Serialization(e)) => {
                tracing::warn!("Stored custom tones unreadable, starting a new list: {}", e);
                Vec::new()
            }
            Err(e) => return Err(AppError::Storage(format!("failed to save tone: {}", e))),
        };

        let record = StoredCustomTone {
            id: candidate.id,
            label: candidate.label,
            emoji: candidate.emoji,
            desc: candidate.description,
            is_custom: true,
            created_at: Utc::now().timestamp_millis(),
        };
        let tone = to_tone(&record);
        stored.push(record);

        self.write_stored_tones(&stored)
            .await
            .map_err(|e| AppError::Storage(format!("failed to save tone: {}", e)))?;

        tracing::info!("Custom tone saved: {} ({})", tone.label, tone.id);
        Ok(tone)
    }

    /// Remove the tone with `id`; unknown ids are a no-op
    pub async fn delete_custom_tone(&self, id: &str) -> Result<()> {
        let stored = self
            .read_stored_tones()
            .await
            .map_err(|e| AppError::Storage(format!("failed to delete tone: {}", e)))?;

        let before = stored.len();
        let remaining: Vec<StoredCustomTone> =
            stored.into_iter().filter(|t| t.id != id).collect();

        if remaining.len() == before {
            tracing::debug!("Custom tone not found, nothing to delete: {}", id);
            return Ok(());
        }

        self.write_stored_tones(&remaining)
            .await
            .map_err(|e| AppError::Storage(format!("failed to delete tone: {}", e)))?;

        tracing::info!("Custom tone deleted: {}", id);
        Ok(())
    }

    /// Premium flag; `false` when unset or unreadable
    pub async fn load_premium_status(&self) -> bool {
        match self.repo.get_value(PREMIUM_STATUS_KEY).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::error!("Failed to load premium status: {}", e);
                false
            }
        }
    }

    pub async fn save_premium_status(&self, is_premium: bool) -> Result<()> {
        self.repo
            .set_value(PREMIUM_STATUS_KEY, if is_premium { "true" } else { "false" })
            .await
            .map_err(|e| AppError::Storage(format!("failed to update premium status: {}", e)))?;

        tracing::info!("Premium status saved: {}", is_premium);
        Ok(())
    }

    /// Validate a creation form, assign a fresh id, and save it
    pub async fn create_custom_tone(&self, draft: CustomToneDraft) -> Result<Tone> {
        let candidate = validate_draft(draft)?;
        self.save_custom_tone(candidate).await
    }

    async fn read_stored_tones(&self) -> Result<Vec<StoredCustomTone>> {
        let Some(data) = self.repo.get_value(CUSTOM_TONES_KEY).await? else {
            return Ok(Vec::new());
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    async fn write_stored_tones(&self, tones: &[StoredCustomTone]) -> Result<()> {
        let content = serde_json::to_string(tones)?;
        self.repo.set_value(CUSTOM_TONES_KEY, &content).await
    }
}

fn to_tone(stored: &StoredCustomTone) -> Tone {
    Tone::custom(
        stored.id.clone(),
        stored.label.clone(),
        stored.emoji.clone(),
        stored.desc.clone(),
        stored.created_at_utc(),
    )
}

/// Check a creation form and turn it into a saveable tone
pub fn validate_draft(draft: CustomToneDraft) -> Result<NewCustomTone> {
    let label = draft.label.trim();
    if label.is_empty() {
        return Err(AppError::InvalidTone(
            "Please enter a name for your tone.".to_string(),
        ));
    }
    if label.chars().count() > MAX_TONE_LABEL_CHARS {
        return Err(AppError::InvalidTone(format!(
            "Tone name must be at most {} characters.",
            MAX_TONE_LABEL_CHARS
        )));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(AppError::InvalidTone(
            "Please enter a description for your tone.".to_string(),
        ));
    }
    if description.chars().count() > MAX_TONE_DESCRIPTION_CHARS {
        return Err(AppError::InvalidTone(format!(
            "Tone description must be at most {} characters.",
            MAX_TONE_DESCRIPTION_CHARS
        )));
    }

    let emoji = draft
        .emoji
        .unwrap_or_else(|| DEFAULT_CUSTOM_EMOJI.to_string());
    if !EMOJI_OPTIONS.contains(&emoji.as_str()) {
        return Err(AppError::InvalidTone(format!("Unsupported emoji: {}", emoji)));
    }

    Ok(NewCustomTone {
        id: generate_custom_tone_id(),
        label: label.to_string(),
        emoji,
        description: description.to_string(),
    })
}

/// `custom_<epoch millis>_<random base-36 suffix>`
pub fn generate_custom_tone_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..CUSTOM_TONE_ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    let id = format!(
        "{}{}_{}",
        CUSTOM_TONE_ID_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    );
    debug_assert!(!is_built_in_id(&id));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::initialize_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_store() -> (PresetStore, Repository) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        let repo = Repository::new(pool);
        (PresetStore::new(repo.clone()), repo)
    }

    fn candidate(id: &str, label: &str) -> NewCustomTone {
        NewCustomTone {
            id: id.to_string(),
            label: label.to_string(),
            emoji: "🔥".to_string(),
            description: "Hot takes only".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let (store, _repo) = create_test_store().await;

        assert!(store.load_custom_tones().await.is_empty());
        assert!(!store.load_premium_status().await);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (store, _repo) = create_test_store().await;

        store
            .save_custom_tone(candidate("custom_1_aaaaaaa", "Blunt"))
            .await
            .unwrap();

        let tones = store.load_custom_tones().await;
        assert_eq!(tones.len(), 1);
        assert_eq!(tones[0].id, "custom_1_aaaaaaa");
        assert_eq!(tones[0].label, "Blunt");
        assert_eq!(tones[0].emoji, "🔥");
        assert_eq!(tones[0].description, "Hot takes only");
        assert!(tones[0].is_custom);
        assert!(tones[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_save_keeps_order_and_existing_timestamps() {
        let (store, repo) = create_test_store().await;

        repo.set_value(
            CUSTOM_TONES_KEY,
            r#"[{"id":"custom_old","label":"Old","emoji":"🗿","desc":"Ancient","isCustom":true,"createdAt":1000}]"#,
        )
        .await
        .unwrap();

        store
            .save_custom_tone(candidate("custom_new", "New"))
            .await
            .unwrap();

        let tones = store.load_custom_tones().await;
        let ids: Vec<&str> = tones.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["custom_old", "custom_new"]);
        assert_eq!(tones[0].created_at.unwrap().timestamp_millis(), 1000);
        assert!(tones[1].created_at.unwrap().timestamp_millis() > 1000);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_not_rejected() {
        let (store, _repo) = create_test_store().await;

        store.save_custom_tone(candidate("dup", "One")).await.unwrap();
        store.save_custom_tone(candidate("dup", "Two")).await.unwrap();

        assert_eq!(store.load_custom_tones().await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_only_match() {
        let (store, _repo) = create_test_store().await;

        store.save_custom_tone(candidate("a", "A")).await.unwrap();
        store.save_custom_tone(candidate("b", "B")).await.unwrap();

        store.delete_custom_tone("a").await.unwrap();

        let tones = store.load_custom_tones().await;
        assert_eq!(tones.len(), 1);
        assert_eq!(tones[0].id, "b");
    }

    #[tokio::test]
    async fn test_delete_unknown_is_noop() {
        let (store, _repo) = create_test_store().await;

        store.save_custom_tone(candidate("a", "A")).await.unwrap();
        store.delete_custom_tone("missing").await.unwrap();

        let tones = store.load_custom_tones().await;
        assert_eq!(tones.len(), 1);
        assert_eq!(tones[0].id, "a");
    }

    #[tokio::test]
    async fn test_corrupt_data_loads_empty() {
        let (store, repo) = create_test_store().await;

        repo.set_value(CUSTOM_TONES_KEY, "{not json").await.unwrap();

        assert!(store.load_custom_tones().await.is_empty());

        // Saving over unreadable data starts a fresh list
        store.save_custom_tone(candidate("a", "A")).await.unwrap();
        assert_eq!(store.load_custom_tones().await.len(), 1);
    }

    #[tokio::test]
    async fn test_premium_round_trip() {
        let (store, _repo) = create_test_store().await;

        store.save_premium_status(true).await.unwrap();
        assert!(store.load_premium_status().await);

        store.save_premium_status(false).await.unwrap();
        assert!(!store.load_premium_status().await);
    }

    #[tokio::test]
    async fn test_unexpected_premium_value_reads_false() {
        let (store, repo) = create_test_store().await;

        repo.set_value(PREMIUM_STATUS_KEY, "yes").await.unwrap();
        assert!(!store.load_premium_status().await);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_storage_error() {
        let (store, repo) = create_test_store().await;

        repo.close().await;

        let err = store.save_premium_status(true).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        let err = store
            .save_custom_tone(candidate("a", "A"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        let err = store.delete_custom_tone("a").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        // Reads still degrade quietly
        assert!(store.load_custom_tones().await.is_empty());
        assert!(!store.load_premium_status().await);
    }

    #[tokio::test]
    async fn test_delete_existing_tone_on_closed_store_fails() {
        let (store, repo) = create_test_store().await;
        store.save_custom_tone(candidate("a", "A")).await.unwrap();

        repo.close().await;

        let err = store.delete_custom_tone("a").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_create_custom_tone_trims_and_assigns_id() {
        let (store, _repo) = create_test_store().await;

        let tone = store
            .create_custom_tone(CustomToneDraft {
                label: "  Corporate  ".to_string(),
                emoji: Some("👑".to_string()),
                description: " Per my last email ".to_string(),
            })
            .await
            .unwrap();

        assert!(tone.id.starts_with("custom_"));
        assert_eq!(tone.label, "Corporate");
        assert_eq!(tone.description, "Per my last email");

        let tones = store.load_custom_tones().await;
        assert_eq!(tones[0].id, tone.id);
    }

    #[test]
    fn test_validate_draft_rejects_bad_input() {
        let draft = |label: &str, emoji: Option<&str>, description: &str| CustomToneDraft {
            label: label.to_string(),
            emoji: emoji.map(str::to_string),
            description: description.to_string(),
        };

        assert!(validate_draft(draft("   ", None, "desc")).is_err());
        assert!(validate_draft(draft("Name", None, "  ")).is_err());
        assert!(validate_draft(draft(&"x".repeat(21), None, "desc")).is_err());
        assert!(validate_draft(draft("Name", None, &"y".repeat(31))).is_err());
        assert!(validate_draft(draft("Name", Some("🙂"), "desc")).is_err());

        let ok = validate_draft(draft("Name", None, "desc")).unwrap();
        assert_eq!(ok.emoji, DEFAULT_CUSTOM_EMOJI);
    }

    #[test]
    fn test_generated_ids_have_expected_shape() {
        let id = generate_custom_tone_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "custom");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), CUSTOM_TONE_ID_SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| BASE36.contains(&b)));

        assert_ne!(generate_custom_tone_id(), generate_custom_tone_id());
    }
}
