//! CLI argument definitions for the rule converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rules-convert",
    version,
    about = "Convert rule spreadsheets to rules-application JSON",
    long_about = "Convert utilization-management rule spreadsheets to rules-application JSON.\n\n\
                  lum:      triplet-columnar auto-workflow rules (AUTO_WORKFLOW_RULES)\n\
                  tat:      turnaround-time rules (TATRuleExport)\n\
                  workflow: request-workflow rules written as rule summaries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Convert triplet-columnar auto-workflow rules.
    Lum(LumArgs),

    /// Convert turnaround-time rules.
    Tat(TatArgs),

    /// Convert request-workflow rules.
    Workflow(WorkflowArgs),
}

/// Options shared by every rule family.
#[derive(Args)]
pub struct SourceArgs {
    /// Spreadsheet to convert (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read (default: the family's usual sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// TOML file extending the built-in mapping tables.
    #[arg(long = "mappings", value_name = "FILE")]
    pub mappings: Option<PathBuf>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct LumArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output JSON file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct TatArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output JSON file (default: TAT_Rules_<timestamp>.json).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct WorkflowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output JSON file (default: Workflow_Rules_<timestamp>.json).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
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
