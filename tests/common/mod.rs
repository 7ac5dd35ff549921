#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the money-manager binary.
///
/// `--no-config` is not implied; run inside a fixture dir so a stray user
/// config cannot leak in, or pass it explicitly.
#[macro_export]
macro_rules! money_manager {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("money-manager"))
    };
}

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `.money-manager.toml` so the loader discovers it.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".money-manager.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// Two charts with round numbers: four equal income quarters, rent-heavy expenses.
pub const QUARTERS_CONFIG: &str = r##"
[layout]
radius = 100

[charts.income]
title = "Quarterly Income"
palette = ["#FF0000", "#00FF00", "#0000FF", "#FFFF00"]

[charts.income.categories]
Q1 = 250
Q2 = 250
Q3 = 250
Q4 = 250

[charts.expenses]
title = "Spending"
palette = ["#FF9999", "#66B2FF"]

[charts.expenses.categories]
Rent = 600
Food = 200
Fun = 0
"##;

/// Parses, but the income chart has nothing to draw.
pub const ZERO_INCOME_CONFIG: &str = r#"
[charts.income]
title = "Income"
[charts.income.categories]
Salary = 0
Bonus = 0

[charts.expenses]
title = "Expenses"
[charts.expenses.categories]
Rent = 10
"#;
