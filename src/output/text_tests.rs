use super::*;
use crate::chart::{CategoryAmount, ChartData, Palette};
use crate::dashboard::{DashboardSummary, sample_expenses, sample_income};

fn chart(pairs: &[(&str, f64)]) -> RenderedChart {
    ChartData::new(
        "Income Details",
        CategoryAmount::from_pairs(pairs.iter().copied()).unwrap(),
        Palette::parse(&["#FF9999", "#66B2FF"]).unwrap(),
    )
    .render()
    .unwrap()
}

mod chart_tests {
    use super::*;

    #[test]
    fn lists_categories_in_order_with_percentages() {
        let output = TextFormatter::new(ColorMode::Never)
            .format(&chart(&[("Salary", 1.0), ("Freelance", 3.0)]))
            .unwrap();

        let salary = output.find("Salary").unwrap();
        let freelance = output.find("Freelance").unwrap();
        assert!(salary < freelance);
        assert!(output.contains("25.00%"));
        assert!(output.contains("75.00%"));
        assert!(output.contains("Total: 4.00 across 2 categories"));
    }

    #[test]
    fn title_is_first_line() {
        let output = TextFormatter::new(ColorMode::Never)
            .format(&chart(&[("A", 1.0)]))
            .unwrap();
        assert_eq!(output.lines().next(), Some("Income Details"));
    }

    #[test]
    fn no_ansi_codes_when_colors_disabled() {
        let output = TextFormatter::new(ColorMode::Never)
            .format(&chart(&[("A", 1.0)]))
            .unwrap();
        assert!(!output.contains('\x1b'));
        assert!(output.contains(SWATCH));
    }

    #[test]
    fn swatch_uses_slice_color_when_colors_enabled() {
        let output = TextFormatter::new(ColorMode::Always)
            .format(&chart(&[("A", 1.0), ("B", 1.0)]))
            .unwrap();
        assert!(output.contains("\x1b[38;2;255;153;153m"));
        assert!(output.contains("\x1b[38;2;102;178;255m"));
    }

    #[test]
    fn verbose_shows_angles() {
        let quiet = TextFormatter::new(ColorMode::Never)
            .format(&chart(&[("A", 1.0), ("B", 1.0)]))
            .unwrap();
        assert!(!quiet.contains("sweep"));

        let verbose = TextFormatter::with_verbose(ColorMode::Never, 1)
            .format(&chart(&[("A", 1.0), ("B", 1.0)]))
            .unwrap();
        assert!(verbose.contains("start 180.00°"));
        assert!(verbose.contains("sweep 180.00°"));
        assert!(verbose.contains("#66B2FF"));
    }
}

mod summary_tests {
    use super::*;

    fn sample_summary() -> DashboardSummary {
        DashboardSummary::compute(
            &sample_income().unwrap().categories,
            &sample_expenses().unwrap().categories,
        )
    }

    #[test]
    fn shows_totals_and_top_categories() {
        let output = TextFormatter::new(ColorMode::Never)
            .format_summary(&sample_summary())
            .unwrap();

        assert!(output.contains("Total income:        2900.00"));
        assert!(output.contains("Total expenses:      2600.00"));
        assert!(output.contains("Net balance:         300.00"));
        assert!(output.contains("Most income source:  Freelance (1500)"));
        assert!(output.contains("Most expense source: Rent (1000)"));
    }

    #[test]
    fn negative_net_is_red() {
        let summary = DashboardSummary::compute(
            &CategoryAmount::from_pairs([("Salary", 10.0)]).unwrap(),
            &CategoryAmount::from_pairs([("Rent", 30.0)]).unwrap(),
        );
        let output = TextFormatter::new(ColorMode::Always)
            .format_summary(&summary)
            .unwrap();
        assert!(output.contains("\x1b[31m-20.00\x1b[0m"));
    }

    #[test]
    fn missing_top_category_shows_placeholder() {
        let summary = DashboardSummary::compute(&[], &[]);
        let output = TextFormatter::new(ColorMode::Never)
            .format_summary(&summary)
            .unwrap();
        assert!(output.contains("Most income source:  n/a"));
    }
}
