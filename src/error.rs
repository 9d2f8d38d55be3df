//! Error types for the crate.
//!
//! Nothing in the navigation core is fatal: missing sections and unknown keys are no-ops. These
//! errors only describe the edges where folio touches the filesystem or parses user input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or touching durable storage.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The state file does not hold a JSON object.
    #[error("invalid state file: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A contact message could not be delivered.
    #[error("submission failed: {0}")]
    Submission(String),

    /// A textual tag did not name any known value.
    #[error("unknown {kind} '{tag}'")]
    UnknownTag {
        /// What the tag was supposed to name.
        kind: &'static str,
        /// The rejected input.
        tag: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown(kind: &'static str, tag: &str) -> Self {
        Self::UnknownTag {
            kind,
            tag: tag.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
