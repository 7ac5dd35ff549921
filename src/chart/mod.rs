//! Proportional slice rendering for pie charts.
//!
//! [`render_chart`] is a pure function of its inputs: validated
//! [`CategoryAmount`]s and a [`Palette`] go in, a [`PieLayout`] of slices and
//! legend entries comes out. Painting the layout is the job of
//! [`crate::output::svg`].

mod category;
mod data;
mod palette;
mod pie;

pub use category::CategoryAmount;
pub use data::{ChartData, RenderedChart};
pub use palette::Palette;
pub use pie::{FULL_CIRCLE, LegendEntry, PieLayout, Slice, render_chart};
