// src/infra/errors.rs — Error types for spendcheck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    // Fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Bot API answered `ok: false`.
    #[error("Telegram {method} failed: {message}")]
    Api { method: String, message: String },

    // Transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
