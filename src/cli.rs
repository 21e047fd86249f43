use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{LOCAL_CONFIG_NAME, PolicyConfig};
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "comment-mimic")]
#[command(
    author,
    version,
    about = "Check that Go doc comments start with the name of what they document"
)]
#[command(long_about = "Checks Go doc comments: a comment must start with the name of the \
    element it documents, and exported elements can be required to carry one.\n\n\
    Exit codes:\n  \
    0 - No findings\n  \
    1 - Findings reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check Go source files
    Check(CheckArgs),

    /// Check declaration records produced by an external extractor
    Records(RecordsArgs),

    /// Print the declarations found in Go source files as records
    Extract(ExtractArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Switches that turn on missing-comment checks on top of the config.
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PolicyArgs {
    /// Require comments on exported functions with an exported receiver
    #[arg(long)]
    pub comment_exported: bool,

    /// Require comments on all exported functions
    #[arg(long)]
    pub comment_all_exported: bool,

    /// Require comments on exported interfaces
    #[arg(long)]
    pub comment_interfaces: bool,

    /// Require comments on exported structs
    #[arg(long)]
    pub comment_structs: bool,

    /// Also require comments on test, benchmark, example and fuzz functions
    #[arg(long)]
    pub comment_tests: bool,
}

impl PolicyArgs {
    /// Enable every switch given on the command line. Flags never turn a
    /// configured switch off.
    pub const fn apply(&self, policy: &mut PolicyConfig) {
        policy.comment_exported |= self.comment_exported;
        policy.comment_all_exported |= self.comment_all_exported;
        policy.comment_interfaces |= self.comment_interfaces;
        policy.comment_structs |= self.comment_structs;
        policy.comment_tests |= self.comment_tests;
    }
}

/// Report rendering shared by `check` and `records`.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report findings but exit with 0
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Parser, Debug)]
pub struct RecordsArgs {
    /// JSON record file, or `-` to read standard input
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Paths to read (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Write records to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
