use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{CommentMimicError, Result};

/// Decides which walked files are handed to the extractor.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files with a listed extension unless an exclude glob matches.
///
/// Globs are tried against the path as walked and, for walks rooted at
/// `.`, against the path without its `./` prefix, so `gen/**` excludes
/// `./gen/api.go`.
#[derive(Debug)]
pub struct GlobFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// An empty `extensions` list accepts every extension.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, excludes: &[String]) -> Result<Self> {
        Ok(Self {
            extensions,
            excludes: compile_excludes(excludes)?,
        })
    }

    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(config.extensions.clone(), &config.exclude)
    }

    fn extension_listed(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn excluded(&self, path: &Path) -> bool {
        self.excludes.is_match(path)
            || path
                .strip_prefix(".")
                .is_ok_and(|relative| self.excludes.is_match(relative))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.extension_listed(path) && !self.excluded(path)
    }
}

fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| CommentMimicError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| CommentMimicError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
