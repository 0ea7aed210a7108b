//! Inline pipeline: parse, resolve, indent, write

use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use crate::core::paths::PathDialect;
use crate::core::xml;
use crate::inline::preflight::Targets;
use crate::inline::report::{Phase, Reporter};
use crate::inline::resolve::Resolver;

/// Default indentation width of the output
pub const DEFAULT_INDENT: usize = 2;

/// Options for one inline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineConfig {
    /// How include text is read as a path
    pub dialect: PathDialect,
    /// Spaces per nesting level in the output
    pub indent: usize,
}

/// What a successful run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSummary {
    pub includes: usize,
    pub lines_written: usize,
}

/// Inline `targets.input` into `targets.output`.
///
/// The output file is written only after every include resolved.
pub fn run_inline(
    targets: &Targets,
    config: &InlineConfig,
    reporter: &mut dyn Reporter,
) -> Result<InlineSummary> {
    let input = targets.input.display().to_string();
    let output = targets.output.display().to_string();

    reporter.phase_started(&format!("Parsing input file: {}", input));
    let bytes = fs::read(&targets.input)
        .with_context(|| format!("Failed to read input file: {}", input))?;
    let mut document = xml::parse_bytes(&bytes)
        .with_context(|| format!("Failed to parse input file: {}", input))?;
    reporter.phase_finished(Phase::ParseInput, &format!("Parsing input file: {}", input));

    let includes = Resolver::new(&targets.base_dir, config.dialect)
        .resolve(&mut document, reporter)
        .with_context(|| format!("Failed to inline includes of {}", input))?;

    reporter.phase_started(&format!("Writing output file: {}", output));
    xml::indent(&mut document.root, &" ".repeat(config.indent));
    let bytes = xml::to_bytes(&document)?;
    fs::write(&targets.output, &bytes)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    let lines_written = String::from_utf8_lossy(&bytes).lines().count();
    debug!(
        event = "inline.run.write_completed",
        output = %output,
        bytes = bytes.len(),
        lines = lines_written
    );
    reporter.phase_finished(
        Phase::WriteOutput,
        &format!(
            "Writing output file: {}. {} lines written.",
            output, lines_written
        ),
    );

    Ok(InlineSummary {
        includes,
        lines_written,
    })
}
