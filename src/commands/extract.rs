use std::path::PathBuf;

use rayon::prelude::*;

use crate::cli::{Cli, ExtractArgs};
use crate::config::validate_config_semantics;
use crate::extract::{DeclarationExtractor, FileRecord, GoExtractor, RecordSet};
use crate::output::write_output;
use crate::scanner::{FileScanner, scanner_from_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, read_source};

#[must_use]
pub fn run_extract(args: &ExtractArgs, cli: &Cli) -> i32 {
    match run_extract_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints the declarations found under `args.paths` as a record set.
///
/// # Errors
/// Returns an error if configuration is invalid, a path does not exist, or
/// the records cannot be written.
pub(crate) fn run_extract_impl(args: &ExtractArgs, cli: &Cli) -> crate::Result<()> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    validate_config_semantics(&config)?;

    let scanner = scanner_from_config(&config.scanner)?;
    let files = scanner.scan_all(&args.paths)?;
    log::info!("Extracting declarations from {} files", files.len());

    let records = extract_records(&files, &GoExtractor::new());
    let mut json = records.to_json()?;
    json.push('\n');
    write_output(args.output.as_deref(), &json)
}

/// Extract every readable file into a record set sorted by path.
pub fn extract_records<E>(files: &[PathBuf], extractor: &E) -> RecordSet
where
    E: DeclarationExtractor + Sync,
{
    let mut records: Vec<FileRecord> = files
        .par_iter()
        .filter_map(|path| {
            read_source(path)
                .map(|source| FileRecord::new(path.clone(), extractor.extract(path, &source)))
        })
        .collect();
    records.sort_by(|a, b| a.path.cmp(&b.path));
    records.into_iter().collect()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
