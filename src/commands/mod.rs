pub mod config;
mod context;
pub mod dashboard;
pub mod init;
pub mod render;
pub mod summary;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::exit_code_for;
pub use dashboard::{build_dashboard, run_dashboard, run_dashboard_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{format_chart, run_render, run_render_impl};
pub use summary::{compute_summary, format_summary, run_summary, run_summary_impl};

use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line to its command, returning the exit code.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Render(args) => run_render(args, cli),
        Commands::Dashboard(args) => run_dashboard(args, cli),
        Commands::Summary(args) => run_summary(args, cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, cli),
    }
}
