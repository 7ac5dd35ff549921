use serde::Serialize;

use crate::chart::{LegendEntry, RenderedChart, Slice};
use crate::dashboard::{DashboardSummary, TopCategory};
use crate::error::Result;

use super::{ChartFormatter, SummaryFormatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct ChartOutput<'a> {
    title: &'a str,
    total: f64,
    slices: Vec<SliceOutput<'a>>,
    legend: Vec<LegendOutput<'a>>,
}

#[derive(Serialize)]
struct SliceOutput<'a> {
    category: &'a str,
    amount: f64,
    start: f64,
    sweep: f64,
    percent: f64,
    color: String,
}

#[derive(Serialize)]
struct LegendOutput<'a> {
    label: String,
    category: &'a str,
    amount: f64,
    color: String,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    income_total: f64,
    expense_total: f64,
    net: f64,
    top_income: Option<TopOutput<'a>>,
    top_expense: Option<TopOutput<'a>>,
}

#[derive(Serialize)]
struct TopOutput<'a> {
    name: &'a str,
    amount: f64,
}

fn convert_slice(slice: &Slice) -> SliceOutput<'_> {
    SliceOutput {
        category: &slice.category,
        amount: slice.amount,
        start: slice.start,
        sweep: slice.sweep,
        percent: slice.percent(),
        color: slice.color.to_css(),
    }
}

fn convert_legend(entry: &LegendEntry) -> LegendOutput<'_> {
    LegendOutput {
        label: entry.label(),
        category: &entry.category,
        amount: entry.amount,
        color: entry.color.to_css(),
    }
}

fn convert_top(top: &TopCategory) -> TopOutput<'_> {
    TopOutput {
        name: &top.name,
        amount: top.amount,
    }
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, chart: &RenderedChart) -> Result<String> {
        let output = ChartOutput {
            title: &chart.title,
            total: chart.layout.total,
            slices: chart.layout.slices.iter().map(convert_slice).collect(),
            legend: chart.layout.legend.iter().map(convert_legend).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format_summary(&self, summary: &DashboardSummary) -> Result<String> {
        let output = SummaryOutput {
            income_total: summary.income_total,
            expense_total: summary.expense_total,
            net: summary.net,
            top_income: summary.top_income.as_ref().map(convert_top),
            top_expense: summary.top_expense.as_ref().map(convert_top),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
