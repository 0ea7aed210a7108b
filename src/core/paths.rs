//! Include path handling
//!
//! Include paths are usually authored with Windows separators. The dialect
//! decides whether '\' is read as a separator or kept verbatim.

use std::path::{Path, PathBuf};

/// How the text of an include element is interpreted as a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDialect {
    /// '\' is a separator and is rewritten to '/'
    Windows,
    /// The text is used exactly as written
    Native,
}

impl PathDialect {
    /// Pick the dialect for the current host.
    ///
    /// Windows hosts already understand both separators, so the text is used
    /// verbatim there.
    pub fn detect() -> Self {
        if cfg!(windows) {
            PathDialect::Native
        } else {
            PathDialect::Windows
        }
    }
}

/// Normalize a path to use '/' as separator
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Convert the raw text of an include element into a relative path
pub fn include_path(raw: &str, dialect: PathDialect) -> PathBuf {
    match dialect {
        PathDialect::Windows => PathBuf::from(normalize_separators(raw)),
        PathDialect::Native => PathBuf::from(raw),
    }
}

/// Resolve include text against the base directory.
///
/// An absolute include path replaces the base directory.
pub fn resolve_include(base_dir: &Path, raw: &str, dialect: PathDialect) -> PathBuf {
    base_dir.join(include_path(raw, dialect))
}

/// Directory that contains `path`, used as the base for its includes
pub fn base_dir_of(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
