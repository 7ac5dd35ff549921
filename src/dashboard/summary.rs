use crate::chart::CategoryAmount;

/// Largest category of a data set.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCategory {
    pub name: String,
    pub amount: f64,
}

/// Category with the largest amount; ties go to the earliest one.
#[must_use]
pub fn top_category(data: &[CategoryAmount]) -> Option<&CategoryAmount> {
    data.iter()
        .reduce(|best, c| if c.amount() > best.amount() { c } else { best })
}

fn total(data: &[CategoryAmount]) -> f64 {
    data.iter().map(CategoryAmount::amount).sum()
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub income_total: f64,
    pub expense_total: f64,
    /// `income_total - expense_total`; negative means a loss.
    pub net: f64,
    pub top_income: Option<TopCategory>,
    pub top_expense: Option<TopCategory>,
}

impl DashboardSummary {
    #[must_use]
    pub fn compute(income: &[CategoryAmount], expenses: &[CategoryAmount]) -> Self {
        let income_total = total(income);
        let expense_total = total(expenses);
        let to_top = |c: &CategoryAmount| TopCategory {
            name: c.name().to_string(),
            amount: c.amount(),
        };

        Self {
            income_total,
            expense_total,
            net: income_total - expense_total,
            top_income: top_category(income).map(to_top),
            top_expense: top_category(expenses).map(to_top),
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
