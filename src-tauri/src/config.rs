//! Application configuration constants
//!
//! Central location for all configuration constants, generation parameters,
//! storage keys, and validation boundaries used throughout the application.

// ===== Input Validation =====

/// Minimum trimmed length of the incoming request before generation runs.
/// Product policy default; overridable through `GeneratorSettings`.
pub const MIN_INPUT_CHARS: usize = 12;

// ===== Tone Identifiers =====

/// Meta tone that must be resolved to a concrete tone before use
pub const RANDOM_TONE_ID: &str = "random";

/// Tone used when nothing else resolves, and whose phrases back custom tones
pub const DEFAULT_TONE_ID: &str = "sarcastic";

/// Prefix for generated custom tone ids
pub const CUSTOM_TONE_ID_PREFIX: &str = "custom_";

/// Length of the random base-36 suffix on custom tone ids
pub const CUSTOM_TONE_ID_SUFFIX_LEN: usize = 7;

// ===== Custom Tone Limits =====

/// Maximum label length for a custom tone (characters)
pub const MAX_TONE_LABEL_CHARS: usize = 20;

/// Maximum description length for a custom tone (characters)
pub const MAX_TONE_DESCRIPTION_CHARS: usize = 30;

/// Glyph preselected when creating a custom tone
pub const DEFAULT_CUSTOM_EMOJI: &str = "✨";

// ===== Storage Keys =====

/// Key holding the JSON list of custom tones
pub const CUSTOM_TONES_KEY: &str = "@nope_custom_tones";

/// Key holding the premium flag ("true" / "false")
pub const PREMIUM_STATUS_KEY: &str = "@nope_premium_status";

// ===== Remote Generation =====

/// Chat-completion endpoint used when a credential is configured
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model requested from the completion endpoint
pub const DEFAULT_COMPLETION_MODEL: &str = "openai/gpt-4o-mini";

/// Value sent in the `HTTP-Referer` header
pub const COMPLETION_REFERER: &str = "http://localhost";

/// Value sent in the `X-Title` header
pub const COMPLETION_APP_TITLE: &str = "Nopeify";

/// Environment variable consulted for the API key before the credential store
pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// System instruction sent with every generation request
pub const SYSTEM_INSTRUCTION: &str =
    "You craft brief, witty declines to requests. Keep replies short, human, and on-tone.";

/// Output token cap for a single decline
pub const MAX_OUTPUT_TOKENS: u32 = 90;

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.8;

/// Nucleus sampling mass
pub const TOP_P: f32 = 0.9;

/// Number of fallback phrases quoted as style examples in the prompt
pub const MAX_EXAMPLE_PHRASES: usize = 4;

/// Word limit stated in the prompt instruction
pub const MAX_WORDS_HINT: usize = 24;

/// Stand-in for the incoming request when the context is empty
pub const EMPTY_REQUEST_PLACEHOLDER: &str = "No incoming request provided.";

// ===== User-facing Advisories =====

/// Title of the notice shown when a built-in response replaces a failed generation
pub const FALLBACK_ADVISORY_TITLE: &str = "Generation issue";

/// Body of the notice shown when a built-in response replaces a failed generation
pub const FALLBACK_ADVISORY_MESSAGE: &str = "Using a built-in response while we retry later.";

// ===== External Links =====

pub const PRIVACY_URL: &str = "https://nopeify.app/privacy";
pub const TERMS_URL: &str = "https://nopeify.app/terms";
