use thiserror::Error;

/// Failure modes of a single `send`.
///
/// The display text of each variant is what callers of `KagiClient::send` receive.
#[derive(Debug, Error)]
pub enum KagiError {
    #[error("Error: KAGI_COOKIE environment variable not set. Please set it before running.")]
    MissingCredential,
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse response content")]
    Parse,
}

impl KagiError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, KagiError::MissingCredential)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, KagiError::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, KagiError::Parse)
    }
}
