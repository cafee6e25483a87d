#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unknown {field} '{value}' in {path}")]
    UnknownToken {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("invalid {field} '{value}' in {path}")]
    InvalidNumber {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
