mod common;

use common::{QUARTERS_CONFIG, TestFixture};
use predicates::prelude::*;

#[test]
fn summary_sample_text() {
    let fixture = TestFixture::new();

    money_manager!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income:        2900.00"))
        .stdout(predicate::str::contains("Total expenses:      2600.00"))
        .stdout(predicate::str::contains("Net balance:         300.00"))
        .stdout(predicate::str::contains("Most income source:  Freelance"))
        .stdout(predicate::str::contains("Most expense source: Rent"));
}

#[test]
fn summary_json_ties_go_to_first() {
    let fixture = TestFixture::new();
    fixture.create_config(QUARTERS_CONFIG);

    let output = money_manager!()
        .current_dir(fixture.path())
        .args(["summary", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["income_total"], 1000.0);
    assert_eq!(json["net"], 200.0);
    assert_eq!(json["top_income"]["name"], "Q1");
    assert_eq!(json["top_expense"]["name"], "Rent");
}

#[test]
fn summary_svg_is_rejected() {
    let fixture = TestFixture::new();

    money_manager!()
        .current_dir(fixture.path())
        .args(["--no-config", "summary", "-f", "svg"])
        .assert()
        .code(2);
}
