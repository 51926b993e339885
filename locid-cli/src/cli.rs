use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use locid_scanner::{ScanConfig, ScanMode, output, scan_fs};
use tracing::debug;

/// Print the next free location identifier (`L<number>`) for a data directory.
#[derive(Debug, Parser)]
#[command(name = "next-loc-id", version, about)]
pub struct Cli {
    /// Base directory to scan recursively
    #[arg(short, long, default_value = "data")]
    pub dir: PathBuf,

    /// How identifiers are extracted
    #[arg(long, value_enum, default_value_t = Mode::Text)]
    pub mode: Mode,

    /// Only read files with this extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files matching this glob pattern (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Follow symbolic links while walking the directory
    #[arg(long)]
    pub follow_links: bool,

    /// Skip files larger than this many bytes (default: no limit)
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Do not descend more than this many directory levels (default: no limit)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print a scan summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// Exit with status 1 if any file could not be scanned
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Match `- id: L<digits>` lines in every file
    Text,
    /// Read the `id` of each top-level record in YAML files
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The identifier alone
    Plain,
    /// The identifier with the full scan report
    Json,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::for_dir(&self.dir);
        config.mode = match self.mode {
            Mode::Text => ScanMode::Text,
            Mode::Yaml => ScanMode::Yaml,
        };
        config.extensions.clone_from(&self.extensions);
        config.exclude.clone_from(&self.exclude);
        config.follow_links = self.follow_links;
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        config
    }
}

/// Scan, then write the next identifier to `out` and diagnostics to `diag`.
///
/// Returns the process exit status: `0`, or `1` under `--strict` when some
/// file could not be scanned.
///
/// # Errors
///
/// Returns an error if the scan cannot start, the next identifier would
/// overflow, or writing fails.
pub fn run(cli: &Cli, out: &mut dyn Write, diag: &mut dyn Write) -> Result<i32> {
    debug!(dir = %cli.dir.display(), mode = ?cli.mode, "scanning");
    let report = scan_fs(&cli.scan_config())
        .with_context(|| format!("Failed to scan {}", cli.dir.display()))?;

    match cli.format {
        OutputFormat::Plain => output::write_next_id(&report, out, diag)?,
        OutputFormat::Json => output::write_json(&report, out)?,
    };

    if cli.summary {
        output::write_summary(&report, diag)?;
    }

    if cli.strict && !report.scan_errors.is_empty() {
        writeln!(
            diag,
            "error: {} file(s) could not be scanned",
            report.failed_files
        )?;
        return Ok(1);
    }
    Ok(0)
}
