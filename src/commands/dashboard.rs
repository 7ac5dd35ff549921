use crate::cli::{Cli, DashboardArgs};
use crate::config::{Config, validate_layout};
use crate::dashboard::Dashboard;
use crate::dashboard::sample::{EXPENSES_KEY, INCOME_KEY};
use crate::{EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, write_output};

#[must_use]
pub fn run_dashboard(args: &DashboardArgs, cli: &Cli) -> i32 {
    match run_dashboard_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Renders the dashboard SVG and writes it to stdout or `--output`.
///
/// # Errors
/// Returns an error if the config lacks the income or expenses chart, if
/// either chart cannot be drawn, or if writing fails.
pub fn run_dashboard_impl(args: &DashboardArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let dashboard = build_dashboard(&loaded.config)?;
    let svg = dashboard.render_svg()?;
    write_output(args.output.as_deref(), &svg)
}

/// Dashboard from the config's `income` and `expenses` charts.
///
/// # Errors
/// Returns a config error if either chart is missing or the layout is
/// invalid, and `InvalidInput` if the chart data is unusable.
pub fn build_dashboard(config: &Config) -> Result<Dashboard> {
    validate_layout(&config.layout)?;
    let income = config.chart(INCOME_KEY)?.to_chart_data()?;
    let expenses = config.chart(EXPENSES_KEY)?.to_chart_data()?;
    Ok(Dashboard::new(income, expenses).with_radius(config.layout.radius))
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
