//! Built-in sample data shown when no configuration provides chart data.

pub const INCOME_KEY: &str = "income";
pub const EXPENSES_KEY: &str = "expenses";

pub const INCOME_TITLE: &str = "Income Details";
pub const EXPENSES_TITLE: &str = "Expenses Details";

pub const INCOME_SAMPLE: &[(&str, f64)] = &[
    ("Salary", 400.0),
    ("Freelance", 1500.0),
    ("Investment", 800.0),
    ("Other", 200.0),
];

pub const EXPENSES_SAMPLE: &[(&str, f64)] = &[
    ("Rent", 1000.0),
    ("Food", 600.0),
    ("Transport", 400.0),
    ("Entertainment", 300.0),
    ("Others", 300.0),
];

pub const INCOME_PALETTE: &[&str] = &["#FF9999", "#66B2FF", "#99FF99", "#FFCC99"];

pub const EXPENSES_PALETTE: &[&str] = &["#FF9999", "#66B2FF", "#99FF99", "#FFCC99", "#FFD700"];
