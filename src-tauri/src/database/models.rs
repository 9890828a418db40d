//! Database models
//!
//! Records persisted in the key-value store, plus the request shapes the
//! frontend sends when creating a custom tone.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A custom tone as stored under the custom-tones key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCustomTone {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub desc: String,
    #[serde(default = "default_true")]
    pub is_custom: bool,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl StoredCustomTone {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.created_at)
            .single()
            .unwrap_or_default()
    }
}

/// A fully-formed custom tone ready to be saved (id already chosen)
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomTone {
    pub id: String,
    pub label: String,
    pub emoji: String,
    #[serde(alias = "desc")]
    pub description: String,
}

/// What the tone creation form submits; the id is generated on save
#[derive(Debug, Clone, Deserialize)]
pub struct CustomToneDraft {
    pub label: String,
    pub emoji: Option<String>,
    #[serde(alias = "desc")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_tone_reads_legacy_json() {
        let json = r#"{"id":"custom_1700000000000_k3j9x0a","label":"Corporate","emoji":"💼","desc":"Per my last email","isCustom":true,"createdAt":1700000000000}"#;
        let tone: StoredCustomTone = serde_json::from_str(json).unwrap();
        assert_eq!(tone.label, "Corporate");
        assert_eq!(tone.desc, "Per my last email");
        assert_eq!(tone.created_at_utc().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_stored_tone_missing_optional_fields() {
        let json = r#"{"id":"a","label":"b","emoji":"✨","desc":"c"}"#;
        let tone: StoredCustomTone = serde_json::from_str(json).unwrap();
        assert!(tone.is_custom);
        assert_eq!(tone.created_at, 0);
    }

    #[test]
    fn test_stored_tone_writes_camel_case() {
        let tone = StoredCustomTone {
            id: "a".to_string(),
            label: "b".to_string(),
            emoji: "✨".to_string(),
            desc: "c".to_string(),
            is_custom: true,
            created_at: 5,
        };
        let json = serde_json::to_string(&tone).unwrap();
        assert!(json.contains("\"isCustom\":true"));
        assert!(json.contains("\"createdAt\":5"));
    }
}
