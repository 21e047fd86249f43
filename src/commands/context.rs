use std::path::{Path, PathBuf};

use crate::checker::{CommentChecker, FileReport, Summary};
use crate::cli::{ColorChoice, ReportArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::declaration::Declaration;
use crate::output::{ColorMode, render, write_output};
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default locations, or
/// nowhere when `no_config` is set.
///
/// # Errors
/// Returns an error if a configuration file exists but cannot be loaded.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        log::info!("Skipping configuration files");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let LoadResult { config, .. } =
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(config)
}

/// Read a source file, logging and skipping it when unreadable.
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            log::warn!("Skipping {}: {e}", path.display());
            None
        }
    }
}

/// Run the checker over one file's declarations.
#[must_use]
pub(crate) fn report_for(
    path: PathBuf,
    declarations: &[Declaration],
    checker: &CommentChecker,
) -> FileReport {
    let count = declarations.iter().map(Declaration::element_count).sum();
    log::debug!("{}: {count} declarations", path.display());
    for decl in declarations {
        log::trace!(
            "{}:{}: {} {}",
            path.display(),
            decl.position,
            decl.kind.as_str(),
            decl.name
        );
    }
    FileReport::new(path, count, checker.check_all(declarations))
}

/// Determine exit code from the findings and `--warn-only`.
#[must_use]
pub(crate) const fn determine_exit_code(summary: &Summary, warn_only: bool) -> i32 {
    if warn_only || !summary.has_findings() {
        EXIT_SUCCESS
    } else {
        EXIT_FINDINGS
    }
}

/// Render `reports`, write them out, and pick the exit code.
///
/// # Errors
/// Returns an error if rendering or writing the report fails.
pub(crate) fn emit_reports(
    reports: &[FileReport],
    report: &ReportArgs,
    color: ColorChoice,
    verbose: u8,
) -> crate::Result<i32> {
    let content = render(
        report.format,
        color_choice_to_mode(color),
        verbose,
        reports,
    )?;
    write_output(report.output.as_deref(), &content)?;
    if let Some(path) = &report.output {
        log::info!("Report written to {}", path.display());
    }

    let summary = Summary::from_reports(reports);
    Ok(determine_exit_code(&summary, report.warn_only))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
