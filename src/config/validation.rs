//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot be drawn.

use crate::config::{ChartConfig, Config, LayoutConfig};
use crate::{MoneyManagerError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns a config error if the radius is not a positive finite number, or
/// if any chart has an empty title, an unusable palette, or categories that
/// cannot be rendered.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_layout(&config.layout)?;
    for (name, chart) in &config.charts {
        validate_chart(name, chart)?;
    }
    Ok(())
}

/// Checks the drawing layout on its own, for commands that only draw some charts.
///
/// # Errors
/// Returns a config error if the radius is not a positive finite number.
pub fn validate_layout(layout: &LayoutConfig) -> Result<()> {
    let radius = layout.radius;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MoneyManagerError::Config(format!(
            "layout.radius must be a positive number, got {radius}"
        )));
    }
    Ok(())
}

fn validate_chart(name: &str, chart: &ChartConfig) -> Result<()> {
    if chart.title.trim().is_empty() {
        return Err(MoneyManagerError::Config(format!(
            "charts.{name}.title must not be empty"
        )));
    }

    chart
        .to_chart_data()
        .and_then(|data| data.render())
        .map(|_| ())
        .map_err(|e| MoneyManagerError::Config(format!("charts.{name}: {}", detail(&e))))
}

fn detail(err: &MoneyManagerError) -> String {
    match err {
        MoneyManagerError::InvalidInput(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
