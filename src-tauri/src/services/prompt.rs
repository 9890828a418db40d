//! Prompt construction and completion cleanup

use crate::config::{EMPTY_REQUEST_PLACEHOLDER, MAX_EXAMPLE_PHRASES, MAX_WORDS_HINT};

/// Build the user prompt sent alongside the system instruction.
///
/// `examples` is the tone's fallback list; only the first few are quoted.
pub fn build_prompt(label: &str, emoji: &str, examples: &[&str], context: &str) -> String {
    let examples = examples
        .iter()
        .take(MAX_EXAMPLE_PHRASES)
        .map(|example| format!("- {}", example))
        .collect::<Vec<_>>()
        .join("\n");

    let incoming = match context.trim() {
        "" => EMPTY_REQUEST_PLACEHOLDER,
        trimmed => trimmed,
    };

    format!(
        "Tone: \"{label}\" ({emoji})\n\
         Style examples:\n{examples}\n\
         Craft one concise decline in this tone. Keep it under {MAX_WORDS_HINT} words. \
         Stay playful but clear. Avoid emoji unless natural. Do not add extra quotes.\n\
         Incoming request: {incoming}"
    )
}

/// Trim the model output and drop one pair of wrapping double quotes.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_completion(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);

    if unquoted.trim().is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt(
            "Spicy",
            "🌶️",
            &["one", "two", "three", "four", "five"],
            "  Can you cover my shift Saturday?  ",
        );

        let expected = "Tone: \"Spicy\" (🌶️)\n\
                        Style examples:\n- one\n- two\n- three\n- four\n\
                        Craft one concise decline in this tone. Keep it under 24 words. \
                        Stay playful but clear. Avoid emoji unless natural. Do not add extra quotes.\n\
                        Incoming request: Can you cover my shift Saturday?";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_prompt_placeholder_for_empty_context() {
        let prompt = build_prompt("Petty", "💅", &["Oh, honey. No."], "   ");
        assert!(prompt.ends_with("Incoming request: No incoming request provided."));
        assert!(!prompt.contains("- five"));
    }

    #[test]
    fn test_sanitize_strips_wrapping_quotes() {
        assert_eq!(
            sanitize_completion("  \"Nay, a thousand times.\"\n"),
            Some("Nay, a thousand times.".to_string())
        );
    }

    #[test]
    fn test_sanitize_keeps_unbalanced_quote() {
        assert_eq!(
            sanitize_completion("\"Not today"),
            Some("\"Not today".to_string())
        );
        assert_eq!(
            sanitize_completion("She said \"no\""),
            Some("She said \"no\"".to_string())
        );
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert_eq!(sanitize_completion("   "), None);
        assert_eq!(sanitize_completion("\"\""), None);
        assert_eq!(sanitize_completion(""), None);
    }

    #[test]
    fn test_sanitize_single_quote_char() {
        assert_eq!(sanitize_completion("\""), Some("\"".to_string()));
    }
}
