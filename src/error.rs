use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to inspect {}: {source}", .path.display())]
    FileMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start background runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("window failed: {0}")]
    Ui(String),
}

/// Reasons a file cannot be selected or analyzed. Only `NoFileSelected` is
/// raised unless upload limits are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a file first")]
    NoFileSelected,

    #[error("Unsupported file type: {name} (accepted: {accepted})")]
    UnsupportedFormat { name: String, accepted: String },

    #[error("File too large: {name} is {size_mb} (max {max_mb})")]
    FileTooLarge {
        name: String,
        size_mb: String,
        max_mb: String,
    },
}

pub type AppResult<T> = Result<T, AppError>;
