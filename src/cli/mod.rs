pub mod extract;
pub mod schema;

use buildlog_issues::config::default_config_path;
use buildlog_issues::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "buildlog-issues")]
#[command(
    author,
    version,
    about = "Extract code analysis issues from MSBuild XML file logger output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract issues from a log file
    Extract(ExtractArgs),

    /// Print JSON Schema for the settings file
    Schema,
}

#[derive(Parser, Clone)]
pub struct ExtractArgs {
    /// MSBuild XML file logger output
    #[arg(value_name = "LOG")]
    pub log: PathBuf,

    /// Path to settings file
    #[arg(short, long, default_value = default_config_path())]
    pub config: PathBuf,

    /// Override repository root from settings
    #[arg(long, env = "BUILDLOG_ISSUES_REPOSITORY_ROOT")]
    pub repository_root: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write issues to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit 1 if any issue was extracted (CI mode)
    #[arg(long)]
    pub fail_on_issues: bool,
}
