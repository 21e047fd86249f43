use std::path::PathBuf;

use rayon::prelude::*;

use crate::EXIT_CONFIG_ERROR;
use crate::checker::{CommentChecker, FileReport, Policy};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::extract::{DeclarationExtractor, GoExtractor};
use crate::output::ScanProgress;
use crate::scanner::{FileScanner, scanner_from_config};

use super::context::{emit_reports, load_config, read_source, report_for};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks the Go files under `args.paths`.
///
/// # Errors
/// Returns an error if configuration is invalid, a path does not exist, or
/// the report cannot be written.
pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 3. Discover files
    let scanner = scanner_from_config(&config.scanner)?;
    let files = scanner.scan_all(&args.paths)?;
    log::info!("Checking {} files", files.len());

    // 4. Extract and check in parallel
    let checker = CommentChecker::new(Policy::from(&config.policy));
    let reports = check_files(&files, &GoExtractor::new(), &checker, cli.quiet);

    // 5. Report
    emit_reports(&reports, &args.report, cli.color, cli.verbose)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    args.policy.apply(&mut config.policy);
}

/// Extract and check every file. Unreadable files are skipped.
///
/// Reports come back sorted by path whatever order the workers finish in.
pub fn check_files<E>(
    files: &[PathBuf],
    extractor: &E,
    checker: &CommentChecker,
    quiet: bool,
) -> Vec<FileReport>
where
    E: DeclarationExtractor + Sync,
{
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| {
            let report = read_source(path).map(|source| {
                let declarations = extractor.extract(path, &source);
                report_for(path.clone(), &declarations, checker)
            });
            progress.inc();
            report
        })
        .collect();

    progress.finish();
    reports.sort_by(|a, b| a.path.cmp(&b.path));
    reports
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
