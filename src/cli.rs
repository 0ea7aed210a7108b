//! CLI module - Command-line interface definition and handler

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use crate::core::paths::PathDialect;
use crate::inline::preflight::preflight;
use crate::inline::report::{ConsoleReporter, NullReporter, Reporter};
use crate::inline::run::{run_inline, InlineConfig, DEFAULT_INDENT};

/// Exit code for failed input/output checks
pub const EXIT_PRECONDITION: u8 = 1;

/// Exit code for failures while inlining or writing
pub const EXIT_FAILURE: u8 = 2;

/// xmlinline - inline the <include> elements of an XML file.
#[derive(Parser, Debug)]
#[command(name = "xmlinline")]
#[command(
    author,
    version,
    about = "Parse an XML file with include tags and emit a new XML file with the included files inlined.",
    long_about = r#"Parse an XML file with include tags and emit a new XML file with the included files inlined.

Every <include> element that is a direct child of the root is replaced by the
root element of the file named in its text. Paths are relative to the input
file's directory. Included roots are appended after the remaining children, in
the order the includes appear. Includes inside included files are left as-is.

Examples:
    xmlinline cfgeconomycore.xml economy.xml
    xmlinline -f -v mission/init.xml build/init.xml
    xmlinline --path-style native in.xml out.xml
"#
)]
pub struct Cli {
    /// The input XML file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// The output XML file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Print verbose output.
    #[arg(
        short,
        long,
        long_help = "Print each phase as it starts and finishes, and report progress every\n\
tenth of the include tags."
    )]
    pub verbose: bool,

    /// Suppress all output. WARN: The program fails silently.
    #[arg(
        short,
        long,
        long_help = "Suppress everything printed to stdout, including the messages for failed\n\
input/output checks. Use the exit code to detect failures:\n\
  0  success\n\
  1  input/output check failed\n\
  2  an include could not be resolved or the output could not be written"
    )]
    pub silent: bool,

    /// Run the program in benchmark mode.
    #[arg(
        short,
        long,
        long_help = "Print the time taken by each phase and the total time. Combined with\n\
--verbose, progress lines also report the time since the previous report."
    )]
    pub benchmark: bool,

    /// How include paths are read (auto/windows/native).
    #[arg(
        long,
        value_enum,
        default_value_t = PathStyle::Auto,
        value_name = "STYLE",
        long_help = "How the text of include elements is read as a path.\n\n\
- auto (default): windows on non-Windows hosts, native on Windows\n\
- windows: '\\' is a separator\n\
- native: the text is used exactly as written"
    )]
    pub path_style: PathStyle,

    /// Spaces per nesting level in the output.
    #[arg(long, default_value_t = DEFAULT_INDENT, value_name = "N")]
    pub indent: usize,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Path style selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathStyle {
    Auto,
    Windows,
    Native,
}

impl PathStyle {
    pub fn dialect(self) -> PathDialect {
        match self {
            PathStyle::Auto => PathDialect::detect(),
            PathStyle::Windows => PathDialect::Windows,
            PathStyle::Native => PathDialect::Native,
        }
    }
}

/// Run the CLI and map the outcome to an exit code.
///
/// `started` is the process start, used as the origin for benchmark timings.
pub fn run(cli: Cli, started: Instant) -> ExitCode {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let targets = match preflight(&cli.input, &cli.output, cli.force) {
        Ok(targets) => targets,
        Err(err) => {
            debug!(event = "cli.preflight.failed", error = %err);
            if !cli.silent {
                println!("{}", err);
            }
            return ExitCode::from(EXIT_PRECONDITION);
        }
    };

    if targets.overwrite && !cli.silent {
        println!(
            "{} Output file already exists: {}. It will be overwritten.",
            "warning:".yellow().bold(),
            targets.output.display()
        );
    }

    let config = InlineConfig {
        dialect: cli.path_style.dialect(),
        indent: cli.indent,
    };

    let mut console;
    let mut null = NullReporter;
    let reporter: &mut dyn Reporter = if cli.silent {
        &mut null
    } else {
        console = ConsoleReporter::new(started, cli.verbose, cli.benchmark);
        &mut console
    };

    match run_inline(&targets, &config, reporter) {
        Ok(summary) => {
            debug!(
                event = "cli.inline.completed",
                includes = summary.includes,
                lines = summary.lines_written
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{:#}", err);
            debug!(event = "cli.inline.failed", error = %message);
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
