use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO‑8601 UTC
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_id: Option<String>,
}

/// Append-only JSONL transcript of a chat session
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger under `<dir>/logs`; the file name is based on the current UTC time.
    pub async fn new(dir: &Path) -> Result<Self> {
        let logs_dir = dir.join("logs");
        fs::create_dir_all(&logs_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("kagichat-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self { file_path, file: Some(file) })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry.
    pub async fn log(&mut self, role: &str, content: &str, model: Option<&str>, thread_id: Option<&str>) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            role: role.to_string(),
            content: content.to_string(),
            model: model.map(|s| s.to_string()),
            thread_id: thread_id.map(|s| s.to_string()),
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush().await;
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logger_writes_one_json_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();

        logger.log("user", "hello", Some("ki_quick"), None).await;
        logger.log("assistant", "Hi", Some("ki_quick"), Some("T1")).await;
        logger.shutdown().await;

        let content = std::fs::read_to_string(logger.file_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["role"], "user");
        assert_eq!(first["content"], "hello");
        assert!(first.get("thread_id").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["role"], "assistant");
        assert_eq!(second["thread_id"], "T1");
    }

    #[tokio::test]
    async fn test_log_after_shutdown_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();
        logger.shutdown().await;
        logger.log("user", "dropped", None, None).await;

        let content = std::fs::read_to_string(logger.file_path()).unwrap();
        assert!(content.is_empty());
    }
}
