use indexmap::IndexSet;

use crate::config::PolicyConfig;
use crate::declaration::DeclKind;

/// Words allowed in front of a struct's name ("A Foo does X").
///
/// Matching is case-sensitive, which also enforces a capitalized lead word.
pub const STRUCT_LEAD_WORDS: [&str; 2] = ["A", "An"];

/// Lead words permitted before the name-matching word, per declaration kind.
///
/// Built once alongside the [`Policy`] and never altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadWords {
    structs: IndexSet<String>,
}

impl Default for LeadWords {
    fn default() -> Self {
        Self {
            structs: STRUCT_LEAD_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl LeadWords {
    /// Allowed lead words for `kind`; empty for every kind but structs.
    #[must_use]
    pub fn for_kind(&self, kind: DeclKind) -> Option<&IndexSet<String>> {
        match kind {
            DeclKind::Struct => Some(&self.structs),
            DeclKind::FreeFunction
            | DeclKind::ReceiverFunction
            | DeclKind::InterfaceMethod
            | DeclKind::Interface => None,
        }
    }
}

/// Resolved switches controlling which exported elements need a comment.
///
/// All switches default to off. Test elements are exempt from the
/// missing-comment check unless `comment_tests` is on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Policy {
    /// Exported functions whose receiver (if any) is also exported.
    pub comment_exported_funcs: bool,
    /// Every exported function, regardless of receiver.
    pub comment_all_exported_funcs: bool,
    pub comment_interfaces: bool,
    pub comment_structs: bool,
    pub comment_tests: bool,
    lead_words: LeadWords,
}

impl Policy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comment_exported_funcs(mut self, on: bool) -> Self {
        self.comment_exported_funcs = on;
        self
    }

    #[must_use]
    pub fn with_comment_all_exported_funcs(mut self, on: bool) -> Self {
        self.comment_all_exported_funcs = on;
        self
    }

    #[must_use]
    pub fn with_comment_interfaces(mut self, on: bool) -> Self {
        self.comment_interfaces = on;
        self
    }

    #[must_use]
    pub fn with_comment_structs(mut self, on: bool) -> Self {
        self.comment_structs = on;
        self
    }

    #[must_use]
    pub fn with_comment_tests(mut self, on: bool) -> Self {
        self.comment_tests = on;
        self
    }

    #[must_use]
    pub const fn lead_words(&self) -> &LeadWords {
        &self.lead_words
    }
}

impl From<&PolicyConfig> for Policy {
    fn from(config: &PolicyConfig) -> Self {
        Self::new()
            .with_comment_exported_funcs(config.comment_exported)
            .with_comment_all_exported_funcs(config.comment_all_exported)
            .with_comment_interfaces(config.comment_interfaces)
            .with_comment_structs(config.comment_structs)
            .with_comment_tests(config.comment_tests)
    }
}
