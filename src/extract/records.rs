use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::declaration::{DeclKind, Declaration, Position, is_exported_name};
use crate::error::Result;

/// Declaration as exchanged with external extractors.
///
/// `exported` may be omitted, in which case it follows the capitalization
/// of `name`. `receiver_exported` defaults to true, `test_element` to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub name: String,
    pub kind: DeclKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
    #[serde(default = "default_true")]
    pub receiver_exported: bool,
    #[serde(default)]
    pub test_element: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<DeclarationRecord>,
}

impl DeclarationRecord {
    #[must_use]
    pub fn into_declaration(self) -> Declaration {
        let exported = self.exported.unwrap_or_else(|| is_exported_name(&self.name));
        Declaration {
            name: self.name,
            kind: self.kind,
            position: self.position,
            exported,
            receiver_exported: self.receiver_exported,
            test_element: self.test_element,
            doc: self.doc,
            methods: self
                .methods
                .into_iter()
                .map(Self::into_declaration)
                .collect(),
        }
    }
}

impl From<Declaration> for DeclarationRecord {
    fn from(decl: Declaration) -> Self {
        Self {
            name: decl.name,
            kind: decl.kind,
            position: decl.position,
            exported: Some(decl.exported),
            receiver_exported: decl.receiver_exported,
            test_element: decl.test_element,
            doc: decl.doc,
            methods: decl.methods.into_iter().map(Self::from).collect(),
        }
    }
}

/// Declarations of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    #[serde(default)]
    pub declarations: Vec<DeclarationRecord>,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, declarations: Vec<Declaration>) -> Self {
        Self {
            path: path.into(),
            declarations: declarations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Convert the records into declarations ready for checking.
    #[must_use]
    pub fn to_declarations(&self) -> Vec<Declaration> {
        self.declarations
            .iter()
            .cloned()
            .map(DeclarationRecord::into_declaration)
            .collect()
    }
}

/// A JSON array of [`FileRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    pub files: Vec<FileRecord>,
}

impl RecordSet {
    /// Parse a record set from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid record array.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<FileRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
