use serde::{Deserialize, Serialize};

use crate::comment::Comment;

/// 1-based source location. Passed through to findings unmodified.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of checkable declaration shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    FreeFunction,
    ReceiverFunction,
    InterfaceMethod,
    Struct,
    Interface,
}

impl DeclKind {
    /// Functions of any flavor share the exported-function policy gate.
    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(
            self,
            Self::FreeFunction | Self::ReceiverFunction | Self::InterfaceMethod
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeFunction => "function",
            Self::ReceiverFunction => "method",
            Self::InterfaceMethod => "interface method",
            Self::Struct => "struct",
            Self::Interface => "interface",
        }
    }
}

/// One checkable named program element, as handed over by an extractor.
///
/// `doc` is `None` when nothing is attached, which is a different state from
/// an attached comment whose text is empty. Interface declarations carry
/// their method signatures in `methods`; other kinds leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    pub position: Position,
    pub exported: bool,
    pub receiver_exported: bool,
    pub test_element: bool,
    pub doc: Option<Comment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Declaration>,
}

impl Declaration {
    /// Creates an undocumented declaration whose visibility follows the
    /// capitalization of `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeclKind, position: Position) -> Self {
        let name = name.into();
        let exported = is_exported_name(&name);
        Self {
            name,
            kind,
            position,
            exported,
            receiver_exported: true,
            test_element: false,
            doc: None,
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: Comment) -> Self {
        self.doc = Some(doc);
        self
    }

    #[must_use]
    pub fn with_receiver_exported(mut self, receiver_exported: bool) -> Self {
        self.receiver_exported = receiver_exported;
        self
    }

    #[must_use]
    pub fn with_test_element(mut self, test_element: bool) -> Self {
        self.test_element = test_element;
        self
    }

    #[must_use]
    pub fn with_methods(mut self, methods: Vec<Self>) -> Self {
        self.methods = methods;
        self
    }

    /// Number of declarations this record expands to, methods included.
    #[must_use]
    pub fn element_count(&self) -> usize {
        1 + self.methods.len()
    }
}

/// An identifier is exported when it starts with an uppercase letter.
#[must_use]
pub fn is_exported_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
