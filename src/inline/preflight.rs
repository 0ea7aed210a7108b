//! Input/output checks performed before any parsing

use std::path::{Path, PathBuf};

use crate::core::paths::base_dir_of;

/// A precondition that stops the run before any file is touched
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("Input file does not exist: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Input and output files are the same. You probably didn't want that...")]
    SameFile,

    #[error("Output file already exists: {}. Use -f to overwrite.", .0.display())]
    OutputExists(PathBuf),

    #[error("Failed to resolve path {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Absolute input/output locations that passed the checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Directory include paths are resolved against
    pub base_dir: PathBuf,
    /// The output exists and will be replaced
    pub overwrite: bool,
}

/// Check that `input` can be inlined into `output`
pub fn preflight(input: &Path, output: &Path, force: bool) -> Result<Targets, PreflightError> {
    let input = absolute(input)?;
    let output = absolute(output)?;

    if !input.exists() {
        return Err(PreflightError::InputMissing(input));
    }

    let output_dir = base_dir_of(&output);
    if !output_dir.is_dir() {
        return Err(PreflightError::OutputDirMissing(output_dir));
    }

    let overwrite = output.exists();
    if overwrite {
        if same_file(&input, &output)? {
            return Err(PreflightError::SameFile);
        }
        if !force {
            return Err(PreflightError::OutputExists(output));
        }
    }

    Ok(Targets {
        base_dir: base_dir_of(&input),
        input,
        output,
        overwrite,
    })
}

fn absolute(path: &Path) -> Result<PathBuf, PreflightError> {
    std::path::absolute(path).map_err(|source| PreflightError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn same_file(a: &Path, b: &Path) -> Result<bool, PreflightError> {
    let canonical = |path: &Path| {
        path.canonicalize().map_err(|source| PreflightError::Io {
            path: path.to_path_buf(),
            source,
        })
    };
    Ok(canonical(a)? == canonical(b)?)
}
