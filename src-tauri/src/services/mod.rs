//! Services module
//!
//! Business logic services that coordinate between commands and storage.

pub mod completion;
pub mod credentials;
pub mod generator;
pub mod presets;
pub mod prompt;
pub mod settings;

pub use completion::{CompletionClient, CompletionError, OpenRouterClient};
pub use credentials::CredentialManager;
pub use generator::{Advisory, GenerationOutcome, ResponseGenerator};
pub use presets::PresetStore;
pub use settings::{AppSettings, GeneratorSettings, SettingsService};
