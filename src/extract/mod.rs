//! Boundary between source languages and the rule engine.
//!
//! An extractor turns one file into [`Declaration`]s; everything after that
//! is language-neutral.

mod go;
mod lexer;
mod records;

use std::path::Path;

pub use go::GoExtractor;
pub use records::{DeclarationRecord, FileRecord, RecordSet};

use crate::declaration::Declaration;

/// Name prefixes of functions the Go toolchain runs as tests.
pub const TEST_PREFIXES: [&str; 4] = ["Benchmark", "Example", "Fuzz", "Test"];

const TEST_FILE_SUFFIX: &str = "_test.go";

/// Language-specific declaration discovery.
pub trait DeclarationExtractor {
    /// Extract every checkable declaration in `source`, in source order.
    ///
    /// `path` is only consulted for file-level facts such as whether the
    /// file holds tests.
    fn extract(&self, path: &Path, source: &str) -> Vec<Declaration>;
}

/// Whether `path` names a Go test file.
#[must_use]
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEST_FILE_SUFFIX))
}

/// Whether a function name marks it as a test, benchmark, example or fuzz target.
#[must_use]
pub fn has_test_role(name: &str) -> bool {
    TEST_PREFIXES.iter().any(|p| name.starts_with(p))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
