use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = MoneyManagerError::Config("radius must be positive".to_string());
    assert_eq!(err.to_string(), "Configuration error: radius must be positive");
}

#[test]
fn error_display_invalid_input() {
    let err = MoneyManagerError::InvalidInput("total amount is zero".to_string());
    assert_eq!(err.to_string(), "Invalid chart input: total amount is zero");
}

#[test]
fn error_display_file_read() {
    let err = MoneyManagerError::FileRead {
        path: PathBuf::from("budget.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("budget.toml"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        MoneyManagerError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        MoneyManagerError::InvalidInput("test".to_string()).error_type(),
        "InvalidInput"
    );
    assert_eq!(
        MoneyManagerError::FileRead {
            path: PathBuf::from("test.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        MoneyManagerError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn is_invalid_input_only_for_chart_errors() {
    assert!(MoneyManagerError::InvalidInput("x".to_string()).is_invalid_input());
    assert!(!MoneyManagerError::Config("x".to_string()).is_invalid_input());
    assert!(!MoneyManagerError::Io(std::io::Error::other("x")).is_invalid_input());
}

#[test]
fn io_error_converts_with_question_mark() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk full"))?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, MoneyManagerError::Io(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn toml_error_converts() {
    let parsed: std::result::Result<toml::Value, _> = toml::from_str("radius = ");
    let err: MoneyManagerError = parsed.unwrap_err().into();
    assert_eq!(err.error_type(), "TomlParse");
}
