use clap::Parser;

use money_manager::cli::Cli;
use money_manager::commands;

/// Log filter from the verbosity flags; `RUST_LOG` still wins when set.
const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(cli.verbose, cli.quiet)),
    )
    .format_timestamp(None)
    .init();

    let exit_code = commands::run(&cli);

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
