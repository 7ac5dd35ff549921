use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::{CategoryAmount, ChartData, Palette};
use crate::dashboard::sample::{
    EXPENSES_KEY, EXPENSES_PALETTE, EXPENSES_SAMPLE, EXPENSES_TITLE, INCOME_KEY, INCOME_PALETTE,
    INCOME_SAMPLE, INCOME_TITLE,
};
use crate::error::{MoneyManagerError, Result};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default pie radius in pixels.
pub const DEFAULT_RADIUS: f64 = 125.0;

/// Top-level configuration.
///
/// A `[charts]` table in the file replaces the built-in sample charts as a
/// whole; charts are not merged one by one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config format version (optional, "1" when present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub layout: LayoutConfig,

    /// Named chart data sets, in file order.
    #[serde(default = "default_charts")]
    pub charts: IndexMap<String, ChartConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            layout: LayoutConfig::default(),
            charts: default_charts(),
        }
    }
}

impl Config {
    /// Look up a chart by name.
    ///
    /// # Errors
    /// Returns a config error listing the available charts when `name` is unknown.
    pub fn chart(&self, name: &str) -> Result<&ChartConfig> {
        self.charts.get(name).ok_or_else(|| {
            let available: Vec<&str> = self.charts.keys().map(String::as_str).collect();
            MoneyManagerError::Config(format!(
                "chart '{name}' is not defined (available: {})",
                if available.is_empty() {
                    "none".to_string()
                } else {
                    available.join(", ")
                }
            ))
        })
    }
}

/// Drawing layout settings [layout].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Pie radius in pixels.
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

/// One chart data set [charts.NAME].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Title drawn above the pie.
    pub title: String,

    /// Slice colors, assigned by position and reused cyclically.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Category amounts [charts.NAME.categories], drawn in file order.
    #[serde(default)]
    pub categories: IndexMap<String, f64>,
}

impl ChartConfig {
    /// Build from static `(name, amount)` pairs and palette.
    #[must_use]
    pub fn from_static(title: &str, pairs: &[(&str, f64)], palette: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            palette: palette.iter().map(ToString::to_string).collect(),
            categories: pairs
                .iter()
                .map(|(name, amount)| ((*name).to_string(), *amount))
                .collect(),
        }
    }

    /// # Errors
    /// Returns `InvalidInput` for negative or non-finite amounts.
    pub fn to_categories(&self) -> Result<Vec<CategoryAmount>> {
        CategoryAmount::from_pairs(
            self.categories
                .iter()
                .map(|(name, amount)| (name.as_str(), *amount)),
        )
    }

    /// # Errors
    /// Returns `InvalidInput` for an empty palette or an unparseable color.
    pub fn to_palette(&self) -> Result<Palette> {
        Palette::parse(&self.palette)
    }

    /// # Errors
    /// Returns `InvalidInput` if the categories or palette are invalid.
    pub fn to_chart_data(&self) -> Result<ChartData> {
        Ok(ChartData::new(
            self.title.clone(),
            self.to_categories()?,
            self.to_palette()?,
        ))
    }
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_palette() -> Vec<String> {
    EXPENSES_PALETTE.iter().map(ToString::to_string).collect()
}

fn default_charts() -> IndexMap<String, ChartConfig> {
    IndexMap::from([
        (
            INCOME_KEY.to_string(),
            ChartConfig::from_static(INCOME_TITLE, INCOME_SAMPLE, INCOME_PALETTE),
        ),
        (
            EXPENSES_KEY.to_string(),
            ChartConfig::from_static(EXPENSES_TITLE, EXPENSES_SAMPLE, EXPENSES_PALETTE),
        ),
    ])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
