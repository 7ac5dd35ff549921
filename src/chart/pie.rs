use log::debug;

use super::category::CategoryAmount;
use super::palette::Palette;
use crate::error::{MoneyManagerError, Result};
use crate::output::svg::ChartColor;

/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// One angular segment of a pie chart.
///
/// Angles are in degrees, counter-clockwise from the 3 o'clock position.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub category: String,
    pub amount: f64,
    pub start: f64,
    pub sweep: f64,
    pub color: ChartColor,
}

impl Slice {
    /// Angle where this slice ends (and the next one starts).
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    /// Share of the whole chart, in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.sweep / FULL_CIRCLE * 100.0
    }
}

/// Legend row pairing a category label with its slice color.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub amount: f64,
    pub color: ChartColor,
}

impl LegendEntry {
    /// Display text, e.g. `Salary (400)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.category, self.amount)
    }
}

/// Slices and legend produced by one render.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub total: f64,
    pub slices: Vec<Slice>,
    pub legend: Vec<LegendEntry>,
}

impl PieLayout {
    /// Sum of all sweep angles; 360 for every successful render.
    #[must_use]
    pub fn total_sweep(&self) -> f64 {
        self.slices.iter().map(|s| s.sweep).sum()
    }
}

/// Convert ordered category amounts into proportional pie slices and legend entries.
///
/// Slices are laid out back to back starting at 0°, so each slice starts where
/// the previous one ends and the sweeps add up to 360°. Zero amounts produce
/// zero-width slices that keep their legend row.
///
/// # Errors
/// Returns `InvalidInput` when the total amount is not positive, which includes
/// empty input, or when summing the amounts overflows `f64`.
pub fn render_chart(data: &[CategoryAmount], palette: &Palette) -> Result<PieLayout> {
    let total: f64 = data.iter().map(CategoryAmount::amount).sum();
    if total <= 0.0 {
        return Err(MoneyManagerError::invalid_input(format!(
            "total amount must be positive to draw a pie chart, got {total} over {} categories",
            data.len()
        )));
    }
    if !total.is_finite() {
        return Err(MoneyManagerError::invalid_input(format!(
            "total amount overflows over {} categories; amounts are too large to compare",
            data.len()
        )));
    }

    let mut cursor = 0.0;
    let mut slices = Vec::with_capacity(data.len());
    let mut legend = Vec::with_capacity(data.len());

    for (i, category) in data.iter().enumerate() {
        let color = palette.color_for(i).clone();
        let sweep = category.amount() / total * FULL_CIRCLE;

        slices.push(Slice {
            category: category.name().to_string(),
            amount: category.amount(),
            start: cursor,
            sweep,
            color: color.clone(),
        });
        legend.push(LegendEntry {
            category: category.name().to_string(),
            amount: category.amount(),
            color,
        });

        cursor += sweep;
    }

    debug!(
        "rendered {} slices over total {total} (palette of {})",
        slices.len(),
        palette.len()
    );

    Ok(PieLayout {
        total,
        slices,
        legend,
    })
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
