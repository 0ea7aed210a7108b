//! Include resolver
//!
//! Replaces every direct child `<include>` of the root with the root element
//! of the file it names. Resolved roots are appended after the remaining
//! children, in the order the includes appear. Includes inside included
//! files are not followed.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::error::InlineError;
use crate::core::model::{Document, Element};
use crate::core::paths::{resolve_include, PathDialect};
use crate::core::xml;
use crate::inline::report::{Phase, Reporter};

/// An include element found among the root's children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeMarker {
    /// Index in the root's child list at the time of the scan
    pub position: usize,
    /// Include text with surrounding whitespace removed
    pub raw_path: String,
}

/// Collect the include markers that are direct children of `root`
pub fn find_includes(root: &Element) -> Vec<IncludeMarker> {
    root.children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_include())
        .map(|(position, child)| IncludeMarker {
            position,
            raw_path: child.text.as_deref().unwrap_or_default().trim().to_string(),
        })
        .collect()
}

/// Resolves include markers relative to a base directory
#[derive(Debug, Clone)]
pub struct Resolver {
    base_dir: PathBuf,
    dialect: PathDialect,
}

impl Resolver {
    pub fn new(base_dir: impl Into<PathBuf>, dialect: PathDialect) -> Self {
        Self {
            base_dir: base_dir.into(),
            dialect,
        }
    }

    /// Resolve all top-level includes of `document` in place.
    ///
    /// Every included file is loaded before the tree is touched, so on error
    /// the document is left as it was. Returns the number of includes resolved.
    pub fn resolve(
        &self,
        document: &mut Document,
        reporter: &mut dyn Reporter,
    ) -> Result<usize, InlineError> {
        reporter.phase_started("Finding include tags in input file");
        let markers = find_includes(&document.root);
        let total = markers.len();
        reporter.phase_finished(
            Phase::FindIncludes,
            &format!("Found {} include tags in input file", total),
        );

        reporter.phase_started("Inlining included files");
        let mut included = Vec::with_capacity(total);
        for (done, marker) in markers.iter().enumerate() {
            included.push(self.load(marker)?);
            reporter.progress(done + 1, total);
        }

        let root = &mut document.root;
        root.children.retain(|child| !child.is_include());
        root.children.extend(included);

        info!(
            event = "inline.resolve.completed",
            base_dir = %self.base_dir.display(),
            includes = total
        );
        reporter.phase_finished(
            Phase::Inline,
            &format!("Inlined {} included files", total),
        );

        Ok(total)
    }

    /// Read and parse the file behind one marker, returning its root element
    fn load(&self, marker: &IncludeMarker) -> Result<Element, InlineError> {
        if marker.raw_path.is_empty() {
            return Err(InlineError::EmptyPath {
                position: marker.position,
            });
        }

        let path = resolve_include(&self.base_dir, &marker.raw_path, self.dialect);
        debug!(
            event = "inline.resolve.include_started",
            include = %marker.raw_path,
            path = %path.display()
        );

        let bytes = fs::read(&path).map_err(|source| InlineError::Read {
            path: path.clone(),
            source,
        })?;
        let document =
            xml::parse_bytes(&bytes).map_err(|source| InlineError::Parse { path, source })?;

        Ok(document.root)
    }
}

/// Resolve top-level includes of `document` against `base_dir` without reporting
#[cfg(test)]
pub fn resolve(
    document: &mut Document,
    base_dir: &std::path::Path,
    dialect: PathDialect,
) -> Result<usize, InlineError> {
    Resolver::new(base_dir, dialect).resolve(document, &mut crate::inline::report::NullReporter)
}
