use async_trait::async_trait;

use cityweather_core::{CredentialPrompt, PromptedKey};

/// Interactive credential prompt backed by `inquire`.
///
/// Asks for a key, then offers to save it for future lookups. Cancelling
/// either prompt declines cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompt;

#[async_trait]
impl CredentialPrompt for InquirePrompt {
    async fn obtain(&self) -> Option<PromptedKey> {
        let key = inquire::Text::new("Enter OpenWeatherMap API key:")
            .with_help_message("or set OPENWEATHER_API_KEY and re-run")
            .prompt()
            .ok()?;
        if key.is_empty() {
            return None;
        }

        let persist = inquire::Confirm::new("Save this API key to a local file for future use?")
            .with_default(false)
            .prompt()
            .unwrap_or(false);

        Some(PromptedKey { key, persist })
    }
}
