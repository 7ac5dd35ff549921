//! Pie chart with legend and title, positioned on an SVG canvas.

use super::builder::SvgBuilder;
use super::element::{Label, SvgElement, Swatch, Wedge};
use super::style::{ChartColor, TextAnchor};
use crate::chart::PieLayout;

const DEFAULT_RADIUS: f64 = 125.0;
const MARGIN: f64 = 20.0;
/// Room above the pie for the title.
const TITLE_SPACE: f64 = 50.0;
/// Rough glyph width relative to font size, for sizing standalone documents.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Draws a [`PieLayout`] as wedges, a legend to the right and a title above.
///
/// The legend starts at `(x + radius + legend_gap, y - radius)` and each row
/// holds a swatch and a `Category (amount)` label.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub layout: PieLayout,
    pub radius: f64,
    center: Option<(f64, f64)>,
    pub legend_gap: f64,
    pub swatch_size: f64,
    pub legend_row_height: f64,
    pub title_offset: f64,
    pub title_font_size: f64,
    pub legend_font_size: f64,
    pub outline: ChartColor,
    pub text_color: ChartColor,
}

impl PieChart {
    #[must_use]
    pub fn new(title: impl Into<String>, layout: PieLayout) -> Self {
        Self {
            title: title.into(),
            layout,
            radius: DEFAULT_RADIUS,
            center: None,
            legend_gap: 20.0,
            swatch_size: 20.0,
            legend_row_height: 25.0,
            title_offset: 30.0,
            title_font_size: 14.0,
            legend_font_size: 12.0,
            outline: ChartColor::hex("#000000"),
            text_color: ChartColor::hex("#000000"),
        }
    }

    /// Place the pie centre at `(x, y)`.
    #[must_use]
    pub const fn at(mut self, x: f64, y: f64) -> Self {
        self.center = Some((x, y));
        self
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Centre of the pie; defaults to a position that fits a standalone document.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        self.center
            .unwrap_or((MARGIN + self.radius, TITLE_SPACE + self.radius))
    }

    #[must_use]
    pub fn legend_origin(&self) -> (f64, f64) {
        let (x, y) = self.center();
        (x + self.radius + self.legend_gap, y - self.radius)
    }

    #[allow(clippy::cast_precision_loss)]
    fn legend_text_width(&self) -> f64 {
        let longest = self
            .layout
            .legend
            .iter()
            .map(|entry| entry.label().chars().count())
            .max()
            .unwrap_or(0);
        longest as f64 * self.legend_font_size * GLYPH_WIDTH_RATIO
    }

    #[allow(clippy::cast_precision_loss)]
    fn legend_bottom(&self) -> f64 {
        let (_, legend_y) = self.legend_origin();
        let rows = self.layout.legend.len() as f64;
        self.legend_row_height.mul_add(rows, legend_y)
    }

    /// Width and height a standalone document needs to show the whole chart.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn document_size(&self) -> (f64, f64) {
        let (x, y) = self.center();
        let (legend_x, _) = self.legend_origin();
        let text_x = legend_x + self.swatch_size + 5.0;
        let title_half = self.title.chars().count() as f64
            * self.title_font_size
            * GLYPH_WIDTH_RATIO
            / 2.0;
        let width = (text_x + self.legend_text_width()).max(x + title_half) + MARGIN;
        let height = (y + self.radius).max(self.legend_bottom()) + MARGIN;
        (width.ceil(), height.ceil())
    }

    /// Render as a complete SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (width, height) = self.document_size();
        SvgBuilder::new(width, height)
            .with_title(self.title.clone())
            .push_element(self)
            .build()
    }

    fn wedges(&self) -> impl Iterator<Item = Wedge> + '_ {
        let (cx, cy) = self.center();
        self.layout.slices.iter().map(move |slice| Wedge {
            cx,
            cy,
            radius: self.radius,
            start: slice.start,
            sweep: slice.sweep,
            color: slice.color.clone(),
            outline: self.outline.clone(),
            label: format!("{}: {} ({:.1}%)", slice.category, slice.amount, slice.percent()),
        })
    }
}

impl SvgElement for PieChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .wedges()
            .map(|wedge| wedge.render())
            .filter(|svg| !svg.is_empty())
            .collect();

        let (legend_x, legend_top) = self.legend_origin();
        for (i, entry) in self.layout.legend.iter().enumerate() {
            let legend_y = self.legend_row_height.mul_add(i as f64, legend_top);
            let swatch = Swatch {
                x: legend_x,
                y: legend_y,
                size: self.swatch_size,
                color: entry.color.clone(),
                outline: self.outline.clone(),
            };
            let label = Label::new(
                legend_x + self.swatch_size + 5.0,
                self.swatch_size.mul_add(0.5, legend_y),
                entry.label(),
            )
            .with_font_size(self.legend_font_size)
            .with_color(self.text_color.clone());
            parts.push(swatch.render());
            parts.push(label.render());
        }

        let (x, y) = self.center();
        let title = Label::new(x, y - self.radius - self.title_offset, self.title.clone())
            .with_anchor(TextAnchor::Middle)
            .with_font_size(self.title_font_size)
            .bold()
            .with_color(self.text_color.clone());
        parts.push(title.render());

        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "pie_chart_tests.rs"]
mod tests;
