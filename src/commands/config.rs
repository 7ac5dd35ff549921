use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, LoadResult, validate_config_semantics};
use crate::output::OutputFormat;
use crate::{EXIT_SUCCESS, MoneyManagerError, Result};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config.as_deref(), cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: Option<&Path>, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path, cli.no_config) {
        Ok(loaded) => {
            println!("Configuration is valid: {}", describe_source(&loaded));
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Loads and validates a configuration.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has
/// charts that cannot be drawn.
pub fn run_config_validate_impl(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    let loaded = load_config(config_path, no_config)?;
    validate_config_semantics(&loaded.config)?;
    Ok(loaded)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized, or
/// if SVG output is requested.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded.config, loaded.source.as_deref())),
        OutputFormat::Svg => Err(MoneyManagerError::Config(
            "config show supports text or json output".to_string(),
        )),
    }
}

fn describe_source(loaded: &LoadResult) -> String {
    loaded.source.as_ref().map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    )
}

#[must_use]
pub fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let _ = writeln!(
        output,
        "Source: {}\n",
        source.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string())
    );

    output.push_str("[layout]\n");
    let _ = writeln!(output, "  radius = {}", config.layout.radius);

    for (name, chart) in &config.charts {
        let _ = writeln!(output, "\n[charts.{name}]");
        let _ = writeln!(output, "  title = \"{}\"", chart.title);
        let _ = writeln!(output, "  palette = {:?}", chart.palette);
        if chart.categories.is_empty() {
            output.push_str("  (no categories)\n");
            continue;
        }
        let total: f64 = chart.categories.values().sum();
        for (category, amount) in &chart.categories {
            let _ = writeln!(output, "  {category} = {amount}");
        }
        let _ = writeln!(output, "  # total = {total}");
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
