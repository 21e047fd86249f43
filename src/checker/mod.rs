mod mismatch;
mod missing;
mod policy;
mod result;

pub use mismatch::check_mismatch;
pub use missing::{check_missing, is_commented};
pub use policy::{LeadWords, Policy, STRUCT_LEAD_WORDS};
pub use result::{FileReport, Finding, FindingKind, Summary};

use crate::declaration::{DeclKind, Declaration};

/// Applies the mismatch and missing-comment checks to declarations.
///
/// Stateless apart from the immutable policy, so one checker can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct CommentChecker {
    policy: Policy,
}

impl CommentChecker {
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Check one declaration.
    ///
    /// Interfaces are checked as a type and then once per method signature,
    /// each method taking the interface's visibility as its receiver's.
    /// Structs and functions are checked once.
    #[must_use]
    pub fn check(&self, decl: &Declaration) -> Vec<Finding> {
        let mut findings = Vec::new();

        match decl.kind {
            DeclKind::Interface => {
                self.check_element(decl, true, &mut findings);
                for method in &decl.methods {
                    self.check_element(method, decl.exported, &mut findings);
                }
            }
            DeclKind::Struct
            | DeclKind::FreeFunction
            | DeclKind::ReceiverFunction
            | DeclKind::InterfaceMethod => {
                self.check_element(decl, decl.receiver_exported, &mut findings);
            }
        }

        findings
    }

    /// Check a sequence of declarations, keeping their order.
    #[must_use]
    pub fn check_all<'a, I>(&self, decls: I) -> Vec<Finding>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        decls.into_iter().flat_map(|d| self.check(d)).collect()
    }

    fn check_element(&self, decl: &Declaration, receiver_exported: bool, out: &mut Vec<Finding>) {
        let lead_words = self.policy.lead_words().for_kind(decl.kind);
        out.extend(check_mismatch(decl, lead_words));
        out.extend(missing::check_missing_with_receiver(
            decl,
            receiver_exported,
            &self.policy,
        ));
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
