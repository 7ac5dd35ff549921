use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;
use crate::{EXIT_CONFIG_ERROR, EXIT_INVALID_INPUT, MoneyManagerError, Result};

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem.
///
/// `no_config` skips discovery and yields the built-in sample charts; an
/// explicit `config_path` must exist.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        log::debug!("Config loading disabled, using built-in sample data");
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write to a file, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        log::info!("Wrote {} bytes to {}", content.len(), path.display());
    } else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Map an error to the process exit code: bad chart data exits 1, anything
/// else 2.
#[must_use]
pub const fn exit_code_for(err: &MoneyManagerError) -> i32 {
    if err.is_invalid_input() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_CONFIG_ERROR
    }
}

/// Print the error and return its exit code.
pub(crate) fn report_error(err: &MoneyManagerError) -> i32 {
    eprintln!("Error: {err}");
    if let Some(source) = std::error::Error::source(err) {
        log::debug!("Caused by: {source}");
    }
    exit_code_for(err)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
