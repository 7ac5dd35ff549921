use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_INVALID_INPUT);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_INVALID_INPUT, EXIT_CONFIG_ERROR);
}

#[test]
fn render_chart_is_reachable_from_crate_root() {
    let data = CategoryAmount::from_pairs([("Salary", 3.0), ("Gifts", 1.0)]).unwrap();
    let palette = Palette::parse(&["#FF9999", "#66B2FF"]).unwrap();

    let layout: PieLayout = render_chart(&data, &palette).unwrap();

    assert!((layout.slices[0].sweep - 270.0).abs() < 1e-9);
    assert!((layout.slices[1].start - 270.0).abs() < 1e-9);
}
