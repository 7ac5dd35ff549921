use crate::cli::{Cli, SummaryArgs};
use crate::config::Config;
use crate::dashboard::DashboardSummary;
use crate::dashboard::sample::{EXPENSES_KEY, INCOME_KEY};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, SummaryFormatter, TextFormatter};
use crate::{EXIT_SUCCESS, MoneyManagerError, Result};

use super::context::{color_choice_to_mode, load_config, report_error, write_output};

#[must_use]
pub fn run_summary(args: &SummaryArgs, cli: &Cli) -> i32 {
    match run_summary_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Prints totals, net balance and top categories.
///
/// # Errors
/// Returns an error if the config cannot be loaded, a chart is missing or
/// has invalid amounts, or the format is not text or json.
pub fn run_summary_impl(args: &SummaryArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let summary = compute_summary(&loaded.config)?;
    let output = format_summary(&summary, args.format, color_choice_to_mode(cli.color))?;
    write_output(None, &output)
}

/// Summary of the config's `income` and `expenses` charts.
///
/// # Errors
/// Returns an error if either chart is missing or has invalid amounts.
pub fn compute_summary(config: &Config) -> Result<DashboardSummary> {
    let income = config.chart(INCOME_KEY)?.to_categories()?;
    let expenses = config.chart(EXPENSES_KEY)?.to_categories()?;
    Ok(DashboardSummary::compute(&income, &expenses))
}

/// # Errors
/// Returns a config error for SVG, which has no summary form.
pub fn format_summary(
    summary: &DashboardSummary,
    format: OutputFormat,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format_summary(summary),
        OutputFormat::Json => JsonFormatter::new().format_summary(summary),
        OutputFormat::Svg => Err(MoneyManagerError::Config(
            "summary supports text or json output; use `dashboard` for SVG".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
