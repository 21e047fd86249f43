mod json;
mod progress;
mod sarif;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use sarif::SarifFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::Path;

use crate::checker::FileReport;
use crate::error::{CommentMimicError, Result};

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the per-file reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Render `reports` in `format`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(
    format: OutputFormat,
    color: ColorMode,
    verbose: u8,
    reports: &[FileReport],
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Sarif => SarifFormatter::new().format(reports),
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content).map_err(|source| CommentMimicError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
