use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::Result;

/// Collects the source files below a directory that pass a [`FileFilter`].
///
/// In gitignore mode the walk is pruned by `.gitignore` files (nested ones
/// included), `.git/info/exclude` and the global excludes file, even outside
/// a git checkout. Dot-files are visited in both modes.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self::with_gitignore(filter, false)
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, gitignore: bool) -> Self {
        Self { filter, gitignore }
    }

    fn keep(&self, path: PathBuf, files: &mut Vec<PathBuf>) {
        if self.filter.should_include(&path) {
            files.push(path);
        } else {
            log::trace!("Filtered out {}", path.display());
        }
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => self.keep(entry.into_path(), &mut files),
                Ok(_) => {}
                Err(e) => log::debug!("Skipping unreadable entry: {e}"),
            }
        }
        files
    }

    fn walk_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        let walker = ignore::WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    self.keep(entry.into_path(), &mut files);
                }
                Ok(_) => {}
                Err(e) => log::debug!("Skipping unreadable entry: {e}"),
            }
        }
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = if self.gitignore {
            self.walk_gitignore(root)
        } else {
            self.walk(root)
        };
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
