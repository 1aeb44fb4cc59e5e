//! CLI argument definitions for docmerge.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docmerge",
    version,
    about = "Docmerge - Generate document batches from tabular data",
    long_about = "Generate one Word document per spreadsheet row and pack the batch\n\
                  into a zip archive.\n\n\
                  Accepts .xlsx, .xls, and .csv uploads. Output filenames come from\n\
                  a template with {Column Name} placeholders and {index}."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect an upload: columns, sanitizer feedback, and sample rows.
    Preview(PreviewArgs),

    /// Generate one document per row and pack them into a zip archive.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the tabular input file (.xlsx, .xls, or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of data rows shown in the preview table.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    #[command(flatten)]
    pub columns: RequiredColumnArgs,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the input file (.xlsx, .xls, .csv, or a .json records payload).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Filename template with {Column Name} placeholders and {index}.
    ///
    /// Defaults to the template suggested by the input's columns.
    #[arg(long = "template", value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Name of the generated archive (".zip" is appended when missing).
    #[arg(long = "archive-name", value_name = "NAME")]
    pub archive_name: Option<String>,

    /// How null or empty cells are rendered in documents and filenames.
    #[arg(long = "null-policy", value_enum, default_value = "omit")]
    pub null_policy: NullPolicyArg,

    /// Replacement text for null cells when --null-policy is fill.
    #[arg(long = "null-value", value_name = "TEXT", default_value = "N/A")]
    pub null_value: String,

    /// Directory the archive is written to (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub columns: RequiredColumnArgs,
}

/// Required-column flags shared by preview and generate.
#[derive(Args)]
pub struct RequiredColumnArgs {
    /// Column that must be present (repeatable; replaces the default name pair).
    #[arg(long = "require", value_name = "COLUMN")]
    pub require: Vec<String>,

    /// Skip the required-column check entirely.
    #[arg(long = "no-required", conflicts_with = "require")]
    pub no_required: bool,

    /// Fail instead of warn when required columns are missing.
    #[arg(long = "strict-columns")]
    pub strict_columns: bool,
}

/// CLI null-handling choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum NullPolicyArg {
    /// Drop null values: no document line, empty filename text.
    Omit,
    /// Substitute the --null-value text.
    Fill,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
