use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::config::ChartConfig;

#[test]
fn builds_from_default_config() {
    let dashboard = build_dashboard(&Config::default()).unwrap();

    assert_eq!(dashboard.income.title, "Income Details");
    assert_eq!(dashboard.expenses.categories.len(), 5);
    assert!((dashboard.radius - 125.0).abs() < f64::EPSILON);
}

#[test]
fn missing_expenses_chart_is_config_error() {
    let mut config = Config::default();
    config.charts.shift_remove("expenses");

    let err = build_dashboard(&config).unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("expenses"));
}

#[test]
fn invalid_radius_is_config_error() {
    let mut config = Config::default();
    config.layout.radius = 0.0;

    assert!(build_dashboard(&config).is_err());
}

#[test]
fn zero_total_income_fails_to_render() {
    let mut config = Config::default();
    config.charts.insert(
        "income".to_string(),
        ChartConfig::from_static("Income", &[("Salary", 0.0)], &["red"]),
    );

    let err = build_dashboard(&config).unwrap().render_svg().unwrap_err();

    assert!(err.is_invalid_input());
}

#[test]
fn run_dashboard_writes_svg() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("dashboard.svg");
    let cli = Cli::parse_from([
        "money-manager",
        "--no-config",
        "dashboard",
        "-o",
        out.to_str().unwrap(),
    ]);
    let Commands::Dashboard(args) = &cli.command else {
        panic!("Expected Dashboard command");
    };

    assert_eq!(run_dashboard(args, &cli), crate::EXIT_SUCCESS);

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Net Balance"));
    assert_eq!(svg.matches("<path").count(), 9);
}
