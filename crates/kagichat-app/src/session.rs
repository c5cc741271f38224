use anyhow::{Context, Result};

use kagichat_llm_api::{KagiClient, KagiConfig, Phase};

/// The client for the current interactive session.
///
/// The client (and its conversation and cache) is reused while the
/// configuration stays the same and replaced when it changes.
pub struct ChatSession {
    client: KagiClient,
}

impl ChatSession {
    pub fn new(config: KagiConfig) -> Result<Self> {
        let client = KagiClient::new(config).context("Failed to create Kagi client")?;
        Ok(Self { client })
    }

    pub fn config(&self) -> &KagiConfig {
        self.client.config()
    }

    pub fn client(&self) -> &KagiClient {
        &self.client
    }

    pub fn phase(&self) -> Phase {
        self.client.state().phase()
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.client.state().thread_id()
    }

    /// Use `config` from now on. Returns `true` when a new client had to be built.
    pub fn apply_config(&mut self, config: KagiConfig) -> Result<bool> {
        if &config == self.client.config() {
            return Ok(false);
        }
        self.client = KagiClient::new(config).context("Failed to create Kagi client")?;
        Ok(true)
    }

    pub async fn send(&mut self, prompt: &str) -> String {
        self.client.send(prompt).await
    }

    pub fn reset(&mut self) {
        self.client.reset();
    }
}
