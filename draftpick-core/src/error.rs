//! Errors for loading catalog and weight files
//!
//! The scoring engine itself never fails; only file and format handling does.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unrecognized catalog format: expected a character array, {{\"champions\": [...]}}, or a Data Dragon champion.json")]
    UnknownFormat,
}

impl LoadError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
