//! SVG drawing surface for pie charts and dashboards.
//!
//! Provides building blocks for standalone SVG documents:
//! - viewBox-based scaling (renders at any size)
//! - Accessibility: `<title>` elements for screen readers and hover tooltips
//! - Escaped user text (category names and titles)

mod builder;
mod element;
mod format;
mod pie_chart;
mod style;

pub use builder::SvgBuilder;
pub use element::{Card, Label, SvgElement, Swatch, Wedge};
pub use format::{coord, html_escape};
pub use pie_chart::PieChart;
pub use style::{ChartColor, FontWeight, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
