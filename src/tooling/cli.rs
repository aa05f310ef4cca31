//! CLI Tooling
//!
//! Command-line interface for a pocdedup run: scan, report, and optionally delete older
//! duplicates and export the deduplicated tree.

use crate::collect::{collect_pocs, SkippedFile};
use crate::config::{ConfigLoader, DedupConfig, ReportFormat};
use crate::error::DedupError;
use crate::group::group_records;
use crate::logging::LoggingConfig;
use crate::resolve::{
    delete_older, export, find_duplicates, format_report_text, DuplicateReport, ExportSummary,
    SharedFilePolicy,
};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const USAGE_EXAMPLES: &str = "\
Examples:
  # Scan and show duplicate groups only
  pocdedup --dir ./pocs

  # Delete older duplicates while keeping the latest
  pocdedup --dir ./pocs --delete

  # Export deduplicated PoCs to another directory
  pocdedup --dir ./pocs --out ./deduped

  # Delete and export in one shot
  pocdedup --dir ./pocs --delete --out ./deduped";

/// pocdedup - find PoC files that declare the same path and keep the newest
#[derive(Parser, Debug)]
#[command(name = "pocdedup")]
#[command(about = "Detect and resolve PoC definition files that declare the same path")]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Directory containing PoC files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Delete duplicates keeping the most recently modified PoC
    #[arg(long)]
    pub delete: bool,

    /// Directory to write deduplicated PoCs
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Never delete a file that is the kept version of another duplicated path
    #[arg(long)]
    pub protect_kept: bool,

    /// Report format (text or json); defaults to the configured format
    #[arg(long)]
    pub format: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (info level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured logging section.
    ///
    /// `--log-file` is not folded in; it goes to [`crate::logging::init_logging`] so that
    /// POCDEDUP_LOG_FILE can sit between it and the configured file.
    pub fn logging_config(&self, mut base: LoggingConfig) -> LoggingConfig {
        if self.verbose {
            base.level = "info".to_string();
        }
        if let Some(level) = &self.log_level {
            base.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            base.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            base.output = output.clone();
        }
        base
    }

    pub fn run_request(&self) -> RunRequest {
        RunRequest {
            delete: self.delete,
            out: self.out.clone(),
            policy: if self.protect_kept {
                SharedFilePolicy::ProtectKept
            } else {
                SharedFilePolicy::Independent
            },
            format: self.format.clone(),
        }
    }
}

/// What one run should do after scanning
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub delete: bool,
    pub out: Option<PathBuf>,
    pub policy: SharedFilePolicy,
    /// Overrides the configured report format
    pub format: Option<String>,
}

/// JSON output of a run
#[derive(Debug, Serialize)]
struct RunSummary {
    scan_root: PathBuf,
    records: usize,
    skipped: Vec<SkippedFile>,
    duplicates: DuplicateReport,
    deleted: Vec<PathBuf>,
    export: Option<ExportSummary>,
}

/// CLI context for a scan root
pub struct CliContext {
    scan_root: PathBuf,
    config: DedupConfig,
}

impl CliContext {
    pub fn new(scan_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, DedupError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&scan_root)?
        };
        Ok(Self { scan_root, config })
    }

    pub fn with_config(scan_root: PathBuf, config: DedupConfig) -> Self {
        Self { scan_root, config }
    }

    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Run the pipeline and return everything meant for stdout.
    pub fn execute(&self, request: &RunRequest) -> Result<String, DedupError> {
        let mut buffer = Vec::new();
        self.execute_to(request, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Run the pipeline, writing output to `out` as each stage finishes.
    ///
    /// The text report is written and flushed before anything is deleted or exported, so
    /// it survives a failure in either step.
    pub fn execute_to<W: Write>(&self, request: &RunRequest, out: &mut W) -> Result<(), DedupError> {
        let format = ReportFormat::parse(
            request
                .format
                .as_deref()
                .unwrap_or(&self.config.report.format),
        )?;
        match format {
            ReportFormat::Text => self.execute_text(request, out),
            ReportFormat::Json => {
                let summary = self.execute_json(request)?;
                out.write_all(summary.as_bytes())?;
                Ok(())
            }
        }
    }

    fn execute_text<W: Write>(&self, request: &RunRequest, out: &mut W) -> Result<(), DedupError> {
        let collection = collect_pocs(&self.scan_root)?;
        if collection.records.is_empty() {
            writeln!(out, "No PoC files found.")?;
            return Ok(());
        }

        let groups = group_records(collection.records);
        let duplicates = find_duplicates(&groups);

        if duplicates.is_empty() {
            writeln!(out, "No duplicate PoCs detected based on path.")?;
        } else {
            out.write_all(format_report_text(&duplicates).as_bytes())?;
            if request.delete {
                out.flush()?;
                let ledger = delete_older(&duplicates, request.policy)?;
                info!(deleted = ledger.len(), "deletion pass complete");
                writeln!(
                    out,
                    "Duplicate files deleted (kept the most recent version for each path)."
                )?;
            } else {
                writeln!(
                    out,
                    "\nRun again with --delete to remove the older duplicates automatically."
                )?;
            }
        }

        if let Some(out_root) = &request.out {
            out.flush()?;
            let summary = export(&groups, &self.scan_root, out_root)?;
            info!(files = summary.files.len(), "export complete");
            writeln!(out, "Deduplicated PoCs copied to {}", out_root.display())?;
        }
        out.flush()?;
        Ok(())
    }

    fn execute_json(&self, request: &RunRequest) -> Result<String, DedupError> {
        let collection = collect_pocs(&self.scan_root)?;
        let records = collection.records.len();
        let groups = group_records(collection.records);
        let duplicates = find_duplicates(&groups);

        let deleted = if request.delete && !duplicates.is_empty() {
            delete_older(&duplicates, request.policy)?.removed().to_vec()
        } else {
            Vec::new()
        };
        let exported = match &request.out {
            Some(out_root) if records > 0 => Some(export(&groups, &self.scan_root, out_root)?),
            _ => None,
        };

        let summary = RunSummary {
            scan_root: self.scan_root.clone(),
            records,
            skipped: collection.skipped,
            duplicates: DuplicateReport::from_duplicates(&duplicates),
            deleted,
            export: exported,
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
    }
}
