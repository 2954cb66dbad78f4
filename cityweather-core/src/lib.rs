//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - API credential resolution (environment, key file, pluggable prompt)
//! - The single-shot weather lookup and its response normalization
//! - Shared domain models and the classified failure taxonomy
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries
//! or services.

pub mod credentials;
pub mod error;
pub mod lookup;
pub mod model;

pub use credentials::{API_KEY_ENV, CredentialPrompt, KeyFile, NoPrompt, PromptedKey};
pub use error::{FailureKind, LookupError};
pub use lookup::WeatherLookup;
pub use model::{LookupRequest, WeatherReport};

/// Result of one lookup attempt.
pub type LookupOutcome = Result<WeatherReport, LookupError>;
