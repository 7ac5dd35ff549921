//! Income/expense dashboard: sample data, summary statistics and layout.

mod layout;
pub mod sample;
mod summary;

pub use layout::Dashboard;
pub use summary::{DashboardSummary, TopCategory, top_category};

use crate::chart::{CategoryAmount, ChartData, Palette};
use crate::error::Result;

/// Sample income chart data.
///
/// # Errors
/// Never fails for the built-in data; the `Result` comes from validation.
pub fn sample_income() -> Result<ChartData> {
    Ok(ChartData::new(
        sample::INCOME_TITLE,
        CategoryAmount::from_pairs(sample::INCOME_SAMPLE.iter().copied())?,
        Palette::parse(sample::INCOME_PALETTE)?,
    ))
}

/// Sample expense chart data.
///
/// # Errors
/// Never fails for the built-in data; the `Result` comes from validation.
pub fn sample_expenses() -> Result<ChartData> {
    Ok(ChartData::new(
        sample::EXPENSES_TITLE,
        CategoryAmount::from_pairs(sample::EXPENSES_SAMPLE.iter().copied())?,
        Palette::parse(sample::EXPENSES_PALETTE)?,
    ))
}
