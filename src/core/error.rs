//! Error types for parsing, serializing and resolving documents

use std::path::PathBuf;

/// XML reading or writing failure
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("no root element found")]
    MissingRoot,

    #[error("junk after document element: '{name}' follows the root element")]
    MultipleRoots { name: String },

    #[error("text outside the root element at byte {position}")]
    StrayText { position: u64 },

    #[error("element '{name}' is never closed")]
    Unclosed { name: String },

    #[error("cannot decode document as {encoding}: {message}")]
    Encoding { encoding: String, message: String },

    #[error("failed to serialize document: {message}")]
    Write { message: String },
}

/// Include resolution failure
#[derive(Debug, thiserror::Error)]
pub enum InlineError {
    #[error("include element at child position {position} has no path")]
    EmptyPath { position: usize },

    #[error("failed to read included file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse included file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: XmlError,
    },
}

impl InlineError {
    /// The included file this error is about, if any
    #[cfg(test)]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            InlineError::EmptyPath { .. } => None,
            InlineError::Read { path, .. } | InlineError::Parse { path, .. } => Some(path),
        }
    }
}
