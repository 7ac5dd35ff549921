use std::fmt::Write;

use crate::chart::{RenderedChart, Slice};
use crate::dashboard::{DashboardSummary, TopCategory};
use crate::error::Result;

use super::svg::ChartColor;
use super::{ChartFormatter, SummaryFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const SWATCH: &str = "■";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    /// Swatch glyph in the slice color (24-bit ANSI) when colors are enabled.
    fn swatch(&self, color: &ChartColor) -> String {
        match color.rgb() {
            Some((r, g, b)) if self.use_colors => {
                format!("\x1b[38;2;{r};{g};{b}m{SWATCH}{}", ansi::RESET)
            }
            _ => SWATCH.to_string(),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_slice(&self, slice: &Slice, name_width: usize, output: &mut String) {
        let _ = write!(
            output,
            "  {} {:<name_width$}  {:>12.2}  {:>6.2}%",
            self.swatch(&slice.color),
            slice.category,
            slice.amount,
            slice.percent()
        );

        if self.verbose >= 1 {
            let _ = write!(
                output,
                "  start {:>6.2}°  sweep {:>6.2}°  {}",
                slice.start, slice.sweep, slice.color
            );
        }

        output.push('\n');
    }

    fn format_top(top: Option<&TopCategory>) -> String {
        top.map_or_else(
            || "n/a".to_string(),
            |top| format!("{} ({})", top.name, top.amount),
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ChartFormatter for TextFormatter {
    fn format(&self, chart: &RenderedChart) -> Result<String> {
        let mut output = String::new();
        let slices = &chart.layout.slices;

        let _ = writeln!(output, "{}", self.colorize(&chart.title, ansi::BOLD));

        let name_width = slices
            .iter()
            .map(|s| s.category.chars().count())
            .max()
            .unwrap_or(0);

        for slice in slices {
            self.format_slice(slice, name_width, &mut output);
        }

        let _ = writeln!(
            output,
            "\nTotal: {:.2} across {} categories",
            chart.layout.total,
            slices.len()
        );

        Ok(output)
    }
}

impl SummaryFormatter for TextFormatter {
    fn format_summary(&self, summary: &DashboardSummary) -> Result<String> {
        let mut output = String::new();

        let net = format!("{:.2}", summary.net);
        let net = if summary.net < 0.0 {
            self.colorize(&net, ansi::RED)
        } else {
            self.colorize(&net, ansi::GREEN)
        };

        let _ = writeln!(output, "{}", self.colorize("Summary", ansi::BOLD));
        let _ = writeln!(output, "  Total income:        {:.2}", summary.income_total);
        let _ = writeln!(output, "  Total expenses:      {:.2}", summary.expense_total);
        let _ = writeln!(output, "  Net balance:         {net}");
        let _ = writeln!(
            output,
            "  Most income source:  {}",
            Self::format_top(summary.top_income.as_ref())
        );
        let _ = writeln!(
            output,
            "  Most expense source: {}",
            Self::format_top(summary.top_expense.as_ref())
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
