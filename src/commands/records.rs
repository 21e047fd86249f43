use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

use crate::checker::{CommentChecker, FileReport, Policy};
use crate::cli::{Cli, RecordsArgs};
use crate::extract::RecordSet;
use crate::{CommentMimicError, EXIT_CONFIG_ERROR};

use super::context::{emit_reports, load_config, report_for};

const STDIN_MARKER: &str = "-";

#[must_use]
pub fn run_records(args: &RecordsArgs, cli: &Cli) -> i32 {
    match run_records_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Checks declaration records produced by an external extractor.
///
/// # Errors
/// Returns an error if the input cannot be read or is not a valid record
/// set, or if the configuration cannot be loaded.
pub(crate) fn run_records_impl(args: &RecordsArgs, cli: &Cli) -> crate::Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    args.policy.apply(&mut config.policy);

    let records = RecordSet::from_json(&read_input(&args.input)?)?;
    log::info!("Checking records for {} files", records.files.len());

    let checker = CommentChecker::new(Policy::from(&config.policy));
    let reports = check_records(&records, &checker);

    emit_reports(&reports, &args.report, cli.color, cli.verbose)
}

/// Check each file record. Reports are sorted by path.
#[must_use]
pub fn check_records(records: &RecordSet, checker: &CommentChecker) -> Vec<FileReport> {
    let mut reports: Vec<FileReport> = records
        .files
        .par_iter()
        .map(|file| report_for(file.path().to_path_buf(), &file.to_declarations(), checker))
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));
    reports
}

fn read_input(path: &Path) -> crate::Result<String> {
    if path == Path::new(STDIN_MARKER) {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).map_err(|source| CommentMimicError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
