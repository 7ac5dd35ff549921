use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::CategoryAmount;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "money-manager")]
#[command(author, version, about = "Personal finance dashboard - draw income and expense pie charts")]
#[command(long_about = "Draws proportional pie charts of income and expense categories,\n\
    either as a single chart or as a full dashboard with summary cards.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid chart input (no positive total, bad amount or color)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file, use built-in sample data
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single pie chart
    Render(RenderArgs),

    /// Render the income/expense dashboard as SVG
    Dashboard(DashboardArgs),

    /// Print totals, net balance and top categories
    Summary(SummaryArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart to render from the configuration
    #[arg(long, default_value = "income")]
    pub chart: String,

    /// Category amount as NAME=AMOUNT (repeatable, replaces the chart's data)
    #[arg(long = "category", value_name = "NAME=AMOUNT")]
    pub categories: Vec<CategoryAmount>,

    /// Slice colors (comma-separated hex or named colors)
    #[arg(long, value_delimiter = ',')]
    pub palette: Option<Vec<String>>,

    /// Chart title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Output format [possible values: text, json, svg]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write SVG to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".money-manager.toml")]
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
    /// Validate configuration file syntax and chart data
    Validate {
        /// Path to configuration file (default: discovered config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
