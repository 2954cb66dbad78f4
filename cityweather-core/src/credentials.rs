use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use directories::UserDirs;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::LookupError;

/// Environment variable consulted first when resolving an API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Name of the per-user credential dotfile, relative to the home directory.
pub const KEY_FILE_NAME: &str = ".weather_api_key";

/// The on-disk credential store: a plaintext API key in a single file.
///
/// Reads are best-effort — a missing, unreadable, or blank file is treated as
/// "no stored key", never as an error. Writes return an explicit `Result`
/// the caller may ignore.
#[derive(Debug, Clone)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// The conventional location: `~/.weather_api_key`.
    pub fn in_home_dir() -> Result<Self> {
        let dirs = UserDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(Self { path: dirs.home_dir().join(KEY_FILE_NAME) })
    }

    /// A key file at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored key as trimmed text.
    ///
    /// Returns `None` when the file is absent, unreadable, or blank; resolution
    /// continues with the next source in that case.
    pub fn load(&self) -> Option<String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "could not read key file");
                return None;
            }
        };

        let key = contents.trim();
        if key.is_empty() { None } else { Some(key.to_string()) }
    }

    /// Write `key` to the file, creating parent directories as needed.
    pub fn save(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create key file directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, key)
            .with_context(|| format!("Failed to write key file: {}", self.path.display()))?;

        Ok(())
    }
}

/// A key obtained interactively, along with the user's persistence choice.
#[derive(Debug, Clone)]
pub struct PromptedKey {
    pub key: String,
    /// Save the key to the [`KeyFile`] for future lookups.
    pub persist: bool,
}

/// Last-resort credential source, typically an interactive prompt.
///
/// Implementations may block on user input; the core never talks to a
/// terminal or dialog directly.
#[async_trait]
pub trait CredentialPrompt: Send + Sync {
    /// Ask the user for an API key. `None` means the user declined.
    async fn obtain(&self) -> Option<PromptedKey>;
}

/// Prompt for non-interactive contexts: always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

#[async_trait]
impl CredentialPrompt for NoPrompt {
    async fn obtain(&self) -> Option<PromptedKey> {
        None
    }
}

/// Resolve an API key: environment variable, then key file, then prompt.
///
/// A key obtained from the prompt is persisted to `key_file` when requested;
/// a failed save is logged and otherwise ignored.
pub async fn resolve(
    env_key: Option<String>,
    key_file: &KeyFile,
    prompt: &dyn CredentialPrompt,
) -> Result<String, LookupError> {
    if let Some(key) = env_key.filter(|key| !key.is_empty()) {
        return Ok(key);
    }

    if let Some(key) = key_file.load() {
        return Ok(key);
    }

    let Some(prompted) = prompt.obtain().await else {
        return Err(LookupError::MissingCredential);
    };
    if prompted.key.is_empty() {
        return Err(LookupError::MissingCredential);
    }

    if prompted.persist {
        if let Err(err) = key_file.save(&prompted.key) {
            tracing::warn!(path = %key_file.path().display(), "failed to save API key: {err:#}");
        }
    }

    Ok(prompted.key)
}
