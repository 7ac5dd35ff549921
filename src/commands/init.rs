use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_SUCCESS, MoneyManagerError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(MoneyManagerError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    log::info!("Wrote config template to {}", output_path.display());

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# money-manager configuration file
#
# Looked up as .money-manager.toml in the current directory, then as
# config.toml in the user config directory. Built-in sample data is used
# when neither exists.

version = "1"

[layout]
# Pie radius in pixels (default: 125)
radius = 125.0

# Each [charts.NAME] table is one pie. `dashboard` and `summary` use the
# charts named "income" and "expenses"; `render --chart NAME` draws any.
# Defining [charts] replaces the built-in samples entirely.

[charts.income]
title = "Income Details"
# Hex (#RGB, #RRGGBB) or named colors, reused in order when there are
# more categories than colors
palette = ["#FF9999", "#66B2FF", "#99FF99", "#FFCC99"]

# Slices are drawn counter-clockwise from 3 o'clock in this order.
# Amounts must be zero or positive, with a positive total.
[charts.income.categories]
Salary = 400
Freelance = 1500
Investment = 800
Other = 200

[charts.expenses]
title = "Expenses Details"
palette = ["#FF9999", "#66B2FF", "#99FF99", "#FFCC99", "#FFD700"]

[charts.expenses.categories]
Rent = 1000
Food = 600
Transport = 400
Entertainment = 300
Others = 300
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
