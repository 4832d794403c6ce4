//! Shared CLI definitions for datrep.
//!
//! Used by the main application and by the build script (manpage).

use clap::{Parser, ValueEnum};
use std::path::Path;
use std::path::PathBuf;

/// File format for data files (used to bypass extension-based detection).
/// When `--format` is not specified, format is auto-detected from the file extension.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// Parquet columnar format
    Parquet,
    /// Arrow IPC / Feather
    Arrow,
}

impl FileFormat {
    /// Detect file format from path extension. Returns None when extension is missing or unknown.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse format from extension string (e.g. "parquet", "csv").
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "parquet" => Some(Self::Parquet),
            "arrow" | "ipc" | "feather" => Some(Self::Arrow),
            _ => None,
        }
    }
}

/// Command-line arguments for datrep
#[derive(Clone, Parser, Debug)]
#[command(
    name = "datrep",
    version,
    about = "Terminal viewer for tabular data reports"
)]
pub struct Args {
    /// Path to the data file to open (not required with --generate-config or --print-config)
    #[arg(required_unless_present_any = ["generate_config", "print_config"], value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Specify the delimiter to use when reading a delimited text file
    #[arg(long = "delimiter")]
    pub delimiter: Option<u8>,

    /// Specify that the file has no header
    #[arg(long = "no-header")]
    pub no_header: Option<bool>,

    /// Skip this many rows when reading a file
    #[arg(long = "skip-rows")]
    pub skip_rows: Option<usize>,

    /// Number of rows shown in the Sample tab (default: 10)
    #[arg(long = "sample-rows", value_name = "N")]
    pub sample_rows: Option<usize>,

    /// Tab to activate on startup (columns-tab, sample-tab, interactions-tab)
    #[arg(long = "tab", value_name = "ID")]
    pub tab: Option<String>,

    /// Force file format (csv, tsv, parquet, arrow).
    /// By default format is auto-detected from the file extension.
    #[arg(long = "format", value_enum)]
    pub format: Option<FileFormat>,

    /// Write logs to this file. Verbosity is controlled with RUST_LOG.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long = "print-config", action)]
    pub print_config: bool,

    /// Generate default configuration file at ~/.config/datrep/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}
