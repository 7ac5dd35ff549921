use std::path::PathBuf;

use super::*;

#[test]
fn cli_render_defaults() {
    let cli = Cli::parse_from(["money-manager", "render"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.chart, "income");
            assert!(args.categories.is_empty());
            assert!(args.palette.is_none());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.output.is_none());
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_with_categories() {
    let cli = Cli::parse_from([
        "money-manager",
        "render",
        "--category",
        "Rent=1000",
        "--category",
        "Food=250.5",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.categories.len(), 2);
            assert_eq!(args.categories[0].name(), "Rent");
            assert!((args.categories[1].amount() - 250.5).abs() < f64::EPSILON);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_rejects_malformed_category() {
    let result = Cli::try_parse_from(["money-manager", "render", "--category", "Rent"]);
    assert!(result.is_err());
}

#[test]
fn cli_render_with_palette() {
    let cli = Cli::parse_from(["money-manager", "render", "--palette", "#FF0000,blue"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(
                args.palette,
                Some(vec!["#FF0000".to_string(), "blue".to_string()])
            );
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_svg_to_file() {
    let cli = Cli::parse_from([
        "money-manager",
        "render",
        "--chart",
        "expenses",
        "-f",
        "svg",
        "-o",
        "out.svg",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.chart, "expenses");
            assert_eq!(args.format, OutputFormat::Svg);
            assert_eq!(args.output, Some(PathBuf::from("out.svg")));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_invalid_format() {
    let result = Cli::try_parse_from(["money-manager", "render", "-f", "png"]);
    assert!(result.is_err());
}

#[test]
fn cli_dashboard_with_output() {
    let cli = Cli::parse_from(["money-manager", "dashboard", "-o", "dash.svg"]);
    match cli.command {
        Commands::Dashboard(args) => {
            assert_eq!(args.output, Some(PathBuf::from("dash.svg")));
            assert!(args.config.is_none());
        }
        _ => panic!("Expected Dashboard command"),
    }
}

#[test]
fn cli_summary_json() {
    let cli = Cli::parse_from(["money-manager", "summary", "--format", "json"]);
    match cli.command {
        Commands::Summary(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("Expected Summary command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["money-manager", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".money-manager.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate() {
    let cli = Cli::parse_from(["money-manager", "config", "validate", "-c", "b.toml"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Validate { config } => {
                assert_eq!(config, Some(PathBuf::from("b.toml")));
            }
            ConfigAction::Show { .. } => panic!("Expected Validate action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["money-manager", "config", "show", "-f", "json"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show { config, format } => {
                assert!(config.is_none());
                assert_eq!(format, OutputFormat::Json);
            }
            ConfigAction::Validate { .. } => panic!("Expected Show action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from([
        "money-manager",
        "summary",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert!(!cli.quiet);
}
