use super::category::CategoryAmount;
use super::palette::Palette;
use super::pie::{PieLayout, render_chart};
use crate::error::Result;

/// A titled data set ready to be rendered as a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub categories: Vec<CategoryAmount>,
    pub palette: Palette,
}

impl ChartData {
    #[must_use]
    pub fn new(title: impl Into<String>, categories: Vec<CategoryAmount>, palette: Palette) -> Self {
        Self {
            title: title.into(),
            categories,
            palette,
        }
    }

    /// # Errors
    /// Returns `InvalidInput` when the categories have no positive total.
    pub fn render(&self) -> Result<RenderedChart> {
        let layout = render_chart(&self.categories, &self.palette)?;
        Ok(RenderedChart {
            title: self.title.clone(),
            layout,
        })
    }
}

/// A chart title with its computed layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub title: String,
    pub layout: PieLayout,
}
