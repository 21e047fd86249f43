mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::config::ScannerConfig;
use crate::error::{CommentMimicError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots. Directories are walked; a root that is a file is
    /// taken as given, without filtering. The result is sorted and free of
    /// duplicates.
    ///
    /// # Errors
    /// Returns an error if a root does not exist or cannot be read.
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            let metadata =
                std::fs::metadata(root).map_err(|source| CommentMimicError::FileRead {
                    path: root.clone(),
                    source,
                })?;
            if metadata.is_dir() {
                files.extend(self.scan(root)?);
            } else {
                files.push(root.clone());
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

/// Build the scanner described by a `[scanner]` table.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn scanner_from_config(config: &ScannerConfig) -> Result<DirectoryScanner<GlobFilter>> {
    let filter = GlobFilter::from_config(config)?;
    Ok(DirectoryScanner::with_gitignore(filter, config.gitignore))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
