use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommentMimicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommentMimicError {
    /// Short category label used when printing errors to the terminal.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Json(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentMimicError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
