use crate::comment::Comment;
use crate::declaration::{DeclKind, Declaration};

use super::policy::Policy;
use super::result::Finding;

/// Whether a doc comment satisfies the documentation requirement.
///
/// A directive-only comment does not.
#[must_use]
pub fn is_commented(doc: Option<&Comment>) -> bool {
    doc.is_some_and(|c| !c.is_empty() || !c.is_machine_readable_only())
}

/// Check that an exported declaration is commented when the policy asks
/// for it, using the declaration's own receiver visibility.
#[must_use]
pub fn check_missing(decl: &Declaration, policy: &Policy) -> Option<Finding> {
    check_missing_with_receiver(decl, decl.receiver_exported, policy)
}

/// Like [`check_missing`], with the receiver visibility supplied by the
/// caller (interface methods take it from their interface).
pub(super) fn check_missing_with_receiver(
    decl: &Declaration,
    receiver_exported: bool,
    policy: &Policy,
) -> Option<Finding> {
    if is_commented(decl.doc.as_ref()) || !decl.exported {
        return None;
    }

    let gate = match decl.kind {
        kind if kind.is_function() => {
            policy.comment_all_exported_funcs
                || (receiver_exported && policy.comment_exported_funcs)
        }
        DeclKind::Interface => policy.comment_interfaces,
        _ => policy.comment_structs,
    };

    let exempt = decl.test_element && !policy.comment_tests;

    (gate && !exempt).then(|| Finding::missing_comment(decl.position, &decl.name))
}

#[cfg(test)]
#[path = "missing_tests.rs"]
mod tests;
