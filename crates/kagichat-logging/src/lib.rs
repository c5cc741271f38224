// Logging module - conversation transcripts and request/response debugging
pub mod conversation_logger;
pub mod request_logger;

use std::path::PathBuf;
use anyhow::{Result, Context};

pub use conversation_logger::ConversationLogger;

pub use request_logger::{
    display_headers,
    log_request,
    log_response,
    log_raw_response_to_file,
    mask_secret,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base kagichat directory (~/.kagichat)
pub fn get_kagichat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let kagichat_dir = PathBuf::from(home_dir).join(".kagichat");

    if !kagichat_dir.exists() {
        std::fs::create_dir_all(&kagichat_dir)
            .context("Failed to create kagichat directory")?;
    }

    Ok(kagichat_dir)
}

/// Get or create the logs directory (~/.kagichat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_kagichat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_short_string_unchanged() {
        assert_eq!(safe_truncate("hello", 10), "hello");
        assert_eq!(safe_truncate("hello", 5), "hello");
    }

    #[test]
    fn test_safe_truncate_adds_ellipsis() {
        assert_eq!(safe_truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_safe_truncate_counts_chars_not_bytes() {
        assert_eq!(safe_truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_safe_truncate_tiny_limit() {
        assert_eq!(safe_truncate("hello", 2), "...");
    }
}
