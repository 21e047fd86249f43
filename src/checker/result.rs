use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::declaration::Position;

/// Category of a reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A comment whose leading word(s) do not echo the element's name.
    Mismatch,
    /// A comment that is attached but has no text.
    EmptyComment,
    /// An exported element without a comment.
    MissingComment,
}

impl FindingKind {
    pub const ALL: [Self; 3] = [Self::Mismatch, Self::EmptyComment, Self::MissingComment];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mismatch => "mismatch",
            Self::EmptyComment => "empty-comment",
            Self::MissingComment => "missing-comment",
        }
    }
}

/// One problem found on a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub position: Position,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn mismatch(position: Position, actual: &str, expected: &str) -> Self {
        Self {
            kind: FindingKind::Mismatch,
            position,
            message: format!("first word of comment is '{actual}' instead of '{expected}'"),
        }
    }

    #[must_use]
    pub fn empty_comment(position: Position, name: &str) -> Self {
        Self {
            kind: FindingKind::EmptyComment,
            position,
            message: format!("empty comment on '{name}'"),
        }
    }

    #[must_use]
    pub fn missing_comment(position: Position, name: &str) -> Self {
        Self {
            kind: FindingKind::MissingComment,
            position,
            message: format!("exported element '{name}' should be commented"),
        }
    }
}

/// Findings for one source file, sorted by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub declarations: usize,
    pub findings: Vec<Finding>,
}

impl FileReport {
    #[must_use]
    pub fn new(path: PathBuf, declarations: usize, mut findings: Vec<Finding>) -> Self {
        findings.sort_by(|a, b| a.position.cmp(&b.position).then(a.kind.cmp(&b.kind)));
        Self {
            path,
            declarations,
            findings,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }
}

/// Totals across a set of file reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub declarations: usize,
    pub findings: usize,
    pub mismatch: usize,
    pub empty: usize,
    pub missing: usize,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, r| Self {
            files: acc.files + 1,
            declarations: acc.declarations + r.declarations,
            findings: acc.findings + r.findings.len(),
            mismatch: acc.mismatch + r.count(FindingKind::Mismatch),
            empty: acc.empty + r.count(FindingKind::EmptyComment),
            missing: acc.missing + r.count(FindingKind::MissingComment),
        })
    }

    #[must_use]
    pub const fn has_findings(&self) -> bool {
        self.findings > 0
    }
}
