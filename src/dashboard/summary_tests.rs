use super::*;
use crate::dashboard::sample::{EXPENSES_SAMPLE, INCOME_SAMPLE};

fn categories(pairs: &[(&str, f64)]) -> Vec<CategoryAmount> {
    CategoryAmount::from_pairs(pairs.iter().copied()).unwrap()
}

#[test]
fn top_category_picks_largest() {
    let data = categories(INCOME_SAMPLE);
    let top = top_category(&data).unwrap();
    assert_eq!(top.name(), "Freelance");
}

#[test]
fn top_category_ties_go_to_first() {
    let data = categories(&[("Entertainment", 300.0), ("Others", 300.0), ("Tips", 10.0)]);
    assert_eq!(top_category(&data).unwrap().name(), "Entertainment");
}

#[test]
fn top_category_of_empty_is_none() {
    assert!(top_category(&[]).is_none());
}

#[test]
fn summary_of_sample_data() {
    let summary = DashboardSummary::compute(&categories(INCOME_SAMPLE), &categories(EXPENSES_SAMPLE));

    assert!((summary.income_total - 2900.0).abs() < f64::EPSILON);
    assert!((summary.expense_total - 2600.0).abs() < f64::EPSILON);
    assert!((summary.net - 300.0).abs() < f64::EPSILON);
    assert_eq!(
        summary.top_income,
        Some(TopCategory {
            name: "Freelance".to_string(),
            amount: 1500.0
        })
    );
    assert_eq!(summary.top_expense.as_ref().unwrap().name, "Rent");
}

#[test]
fn net_can_be_negative() {
    let summary = DashboardSummary::compute(
        &categories(&[("Salary", 100.0)]),
        &categories(&[("Rent", 250.0)]),
    );
    assert!((summary.net + 150.0).abs() < f64::EPSILON);
}

#[test]
fn empty_sides_have_no_top_category() {
    let summary = DashboardSummary::compute(&[], &[]);
    assert!(summary.top_income.is_none());
    assert!(summary.top_expense.is_none());
    assert!(summary.net.abs() < f64::EPSILON);
}
