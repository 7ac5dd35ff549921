use super::*;

fn chart(title: &str, pairs: &[(&str, f64)], palette: &[&str]) -> ChartConfig {
    ChartConfig::from_static(title, pairs, palette)
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn zero_radius_rejected() {
    let mut config = Config::default();
    config.layout.radius = 0.0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("layout.radius"));
}

#[test]
fn nan_radius_rejected() {
    let mut config = Config::default();
    config.layout.radius = f64::NAN;
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn empty_title_rejected() {
    let mut config = Config::default();
    config
        .charts
        .insert("blank".to_string(), chart("  ", &[("A", 1.0)], &["red"]));
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("charts.blank.title"));
}

#[test]
fn zero_total_chart_rejected_as_config_error() {
    let mut config = Config::default();
    config.charts.insert(
        "idle".to_string(),
        chart("Idle", &[("A", 0.0), ("B", 0.0)], &["red"]),
    );
    let err = validate_config_semantics(&config).unwrap_err();
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("charts.idle"));
    assert!(err.to_string().contains("total amount must be positive"));
}

#[test]
fn empty_palette_rejected() {
    let mut config = Config::default();
    config
        .charts
        .insert("plain".to_string(), chart("Plain", &[("A", 1.0)], &[]));
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("palette"));
}

#[test]
fn negative_amount_rejected() {
    let mut config = Config::default();
    config
        .charts
        .insert("refunds".to_string(), chart("Refunds", &[("A", -5.0)], &["red"]));
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn validate_layout_alone() {
    assert!(validate_layout(&LayoutConfig::default()).is_ok());
    assert!(validate_layout(&LayoutConfig { radius: -1.0 }).is_err());
}
