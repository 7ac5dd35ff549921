//! Two-chart dashboard with summary cards, drawn as one SVG document.

use log::debug;

use super::summary::{DashboardSummary, TopCategory};
use crate::chart::ChartData;
use crate::error::Result;
use crate::output::svg::{Card, ChartColor, PieChart, SvgBuilder};

const MIN_CANVAS_WIDTH: f64 = 800.0;
const MIN_PANEL_HEIGHT: f64 = 350.0;
const CARD_GAP: f64 = 10.0;
const CARD_WIDTH: f64 = 210.0;
const CARD_HEIGHT: f64 = 148.0;
const CARD_FONT_SIZE: f64 = 15.0;
const INCOME_CENTER: (f64, f64) = (135.0, 175.0);
const EXPENSES_CENTER_X: f64 = 520.0;
const LEFT_PADDING: f64 = 10.0;
/// Title room above each pie.
const TITLE_SPACE: f64 = 50.0;
/// Horizontal room reserved right of each pie for its legend.
const LEGEND_WIDTH: f64 = 135.0;

/// Canvas positions for a given pie radius.
///
/// Up to the default radius the charts sit at fixed positions on an
/// 800-wide canvas; larger radii push the expense chart right, the panel
/// down and widen the canvas so pies and legends never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    income_center: (f64, f64),
    expenses_center: (f64, f64),
    width: f64,
    panel_height: f64,
    card_top: f64,
}

impl Geometry {
    fn for_radius(radius: f64) -> Self {
        let income_x = INCOME_CENTER.0.max(LEFT_PADDING + radius);
        let center_y = INCOME_CENTER.1.max(TITLE_SPACE + radius);
        let expenses_x = EXPENSES_CENTER_X.max(2.0f64.mul_add(radius, income_x) + LEGEND_WIDTH);
        let width = MIN_CANVAS_WIDTH.max(expenses_x + radius + LEGEND_WIDTH);
        let panel_height = MIN_PANEL_HEIGHT.max(center_y + radius + TITLE_SPACE);

        Self {
            income_center: (income_x, center_y),
            expenses_center: (expenses_x, center_y),
            width,
            panel_height,
            card_top: panel_height + CARD_GAP,
        }
    }

    fn height(&self) -> f64 {
        self.card_top + CARD_HEIGHT
    }
}

/// Income and expense charts side by side, with headline cards underneath.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub income: ChartData,
    pub expenses: ChartData,
    pub radius: f64,
}

impl Dashboard {
    #[must_use]
    pub const fn new(income: ChartData, expenses: ChartData) -> Self {
        Self {
            income,
            expenses,
            radius: 125.0,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.income.categories, &self.expenses.categories)
    }

    /// Render the full dashboard document.
    ///
    /// # Errors
    /// Returns `InvalidInput` if either chart has no positive total; nothing
    /// is drawn in that case.
    pub fn render_svg(&self) -> Result<String> {
        let income = self.income.render()?;
        let expenses = self.expenses.render()?;
        let summary = self.summary();

        debug!(
            "dashboard: {} income and {} expense slices",
            income.layout.slices.len(),
            expenses.layout.slices.len()
        );

        let geometry = Geometry::for_radius(self.radius);
        let (income_x, income_y) = geometry.income_center;
        let (expenses_x, expenses_y) = geometry.expenses_center;
        let income_chart = PieChart::new(income.title, income.layout)
            .with_radius(self.radius)
            .at(income_x, income_y);
        let expenses_chart = PieChart::new(expenses.title, expenses.layout)
            .with_radius(self.radius)
            .at(expenses_x, expenses_y);

        let panel = format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            geometry.width,
            geometry.panel_height,
            ChartColor::hex("#7CCEC9")
        );

        let mut builder = SvgBuilder::new(geometry.width, geometry.height())
            .with_title("Money Manager Dashboard")
            .with_background(ChartColor::hex("#28283F"))
            .push_raw(panel)
            .push_element(&income_chart)
            .push_element(&expenses_chart);

        for card in summary_cards(&summary, &geometry) {
            builder = builder.push_element(&card);
        }

        Ok(builder.build())
    }
}

fn top_lines(heading: &str, top: Option<&TopCategory>) -> Vec<String> {
    top.map_or_else(
        || vec![heading.to_string(), String::new(), "No data".to_string()],
        |top| {
            vec![
                heading.to_string(),
                String::new(),
                top.name.clone(),
                String::new(),
                format!("Amount: {}", top.amount),
            ]
        },
    )
}

fn card(x: f64, y: f64, background: &str, text_color: ChartColor, lines: Vec<String>) -> Card {
    Card {
        x,
        y,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        background: ChartColor::hex(background),
        text_color,
        font_size: CARD_FONT_SIZE,
        lines,
    }
}

fn summary_cards(summary: &DashboardSummary, geometry: &Geometry) -> [Card; 3] {
    let y = geometry.card_top;
    [
        card(
            0.0,
            y,
            "#F6636B",
            ChartColor::hex("#5154A1"),
            vec![
                "Net Balance".to_string(),
                String::new(),
                format!("{:.2}", summary.net),
            ],
        ),
        card(
            geometry.width * 0.375,
            y,
            "#EA2EFB",
            ChartColor::named("blue"),
            top_lines("Most Income Source", summary.top_income.as_ref()),
        ),
        card(
            geometry.width - CARD_WIDTH,
            y,
            "#3462D9",
            ChartColor::hex("#FFFFFF"),
            top_lines("Most Expense Source", summary.top_expense.as_ref()),
        ),
    ]
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
