//! Error types for the Sleeper league reporter

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ReporterError>;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{var} environment variable not set")]
    MissingEnv { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Unknown player: {id}")]
    UnknownPlayer { id: String },

    #[error("Player record incomplete: {id}")]
    IncompletePlayer { id: String },

    #[error("Unknown roster: {key}")]
    UnknownRoster { key: String },

    #[error("Unknown user: {id}")]
    UnknownUser { id: String },

    #[error("Transaction has no creator")]
    MissingCreator,

    #[error("Social API error: {message}")]
    Social { message: String },
}

impl ReporterError {
    pub fn social(message: impl Into<String>) -> Self {
        ReporterError::Social {
            message: message.into(),
        }
    }
}
