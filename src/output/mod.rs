mod json;
pub mod svg;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::chart::RenderedChart;
use crate::dashboard::DashboardSummary;
use crate::error::Result;

/// Trait for formatting a rendered chart into an output format.
pub trait ChartFormatter {
    /// Format the chart into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, chart: &RenderedChart) -> Result<String>;
}

/// Trait for formatting dashboard summary statistics.
pub trait SummaryFormatter {
    /// Format the summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_summary(&self, summary: &DashboardSummary) -> Result<String>;
}

/// Standalone SVG document for one chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgFormatter {
    pub radius: Option<f64>,
}

impl ChartFormatter for SvgFormatter {
    fn format(&self, chart: &RenderedChart) -> Result<String> {
        let mut pie = svg::PieChart::new(chart.title.clone(), chart.layout.clone());
        if let Some(radius) = self.radius {
            pie = pie.with_radius(radius);
        }
        Ok(pie.to_svg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Svg,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
