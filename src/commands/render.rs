use crate::chart::{ChartData, Palette, RenderedChart};
use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, validate_layout};
use crate::dashboard::sample::EXPENSES_PALETTE;
use crate::output::{
    ChartFormatter, ColorMode, JsonFormatter, OutputFormat, SvgFormatter, TextFormatter,
};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config, report_error, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Renders one chart and writes it to stdout or `--output`.
///
/// # Errors
/// Returns `InvalidInput` if the chart data cannot be drawn, or a config/IO
/// error if loading or writing fails.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    validate_layout(&loaded.config.layout)?;
    let chart = resolve_chart(args, &loaded.config)?;
    let rendered = chart.render()?;
    log::info!(
        "Rendered '{}' with {} slices (total {})",
        rendered.title,
        rendered.layout.slices.len(),
        rendered.layout.total
    );

    // no ANSI codes in files
    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    };
    let output = format_chart(
        &rendered,
        args.format,
        color_mode,
        cli.verbose,
        loaded.config.layout.radius,
    )?;
    write_output(args.output.as_deref(), &output)
}

/// Chart data from the named config chart with command-line overrides applied.
///
/// Inline categories replace the config chart's data entirely; a chart that
/// is not in the config is allowed only when categories are given inline.
pub(crate) fn resolve_chart(args: &RenderArgs, config: &Config) -> Result<ChartData> {
    let base = if args.categories.is_empty() {
        Some(config.chart(&args.chart)?)
    } else {
        config.charts.get(&args.chart)
    };

    let categories = if args.categories.is_empty() {
        base.map(|chart| chart.to_categories())
            .transpose()?
            .unwrap_or_default()
    } else {
        args.categories.clone()
    };

    let palette = match (&args.palette, base) {
        (Some(colors), _) => Palette::parse(colors)?,
        (None, Some(chart)) => chart.to_palette()?,
        (None, None) => Palette::parse(EXPENSES_PALETTE)?,
    };

    let title = args
        .title
        .clone()
        .or_else(|| base.map(|chart| chart.title.clone()))
        .unwrap_or_else(|| args.chart.clone());

    Ok(ChartData::new(title, categories, palette))
}

/// Format a rendered chart.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_chart(
    chart: &RenderedChart,
    format: OutputFormat,
    color_mode: ColorMode,
    verbose: u8,
    radius: f64,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(chart),
        OutputFormat::Json => JsonFormatter::new().format(chart),
        OutputFormat::Svg => SvgFormatter {
            radius: Some(radius),
        }
        .format(chart),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
