//! Append-only exchange log.
//!
//! One line per exchange: `<timestamp> - USER: <message> | AI: <response>`.
//! Failed exchanges are recorded as `<timestamp> - USER: <message> | ERROR: <detail>`.

use chrono::Utc;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append-only log of user/AI exchanges.
#[derive(Debug, Clone)]
pub struct ExchangeLog {
    path: PathBuf,
}

impl ExchangeLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record a completed exchange.
    pub async fn record_success(
        &self,
        user_message: &str,
        ai_response: &str,
    ) -> std::io::Result<()> {
        self.append_line(&format!("USER: {} | AI: {}", user_message, ai_response))
            .await
    }

    /// Record a failed exchange.
    pub async fn record_failure(&self, user_message: &str, detail: &str) -> std::io::Result<()> {
        self.append_line(&format!("USER: {} | ERROR: {}", user_message, detail))
            .await
    }

    // The file is opened in append mode per write; atomicity of a single
    // line write is delegated to the OS.
    async fn append_line(&self, entry: &str) -> std::io::Result<()> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = format!("{} - {}\n", timestamp, entry);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}
