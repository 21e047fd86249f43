use indexmap::IndexSet;

use crate::declaration::Declaration;

use super::result::Finding;

/// Check that an attached comment starts with the declaration's name.
///
/// No finding when there is no comment: absence belongs to the
/// missing-comment check. A comment without prose yields an empty-comment
/// finding unless it consists only of directives. When `lead_words` is given
/// and the first word is one of them, the second word may carry the name
/// instead ("A Foo does X").
#[must_use]
pub fn check_mismatch(
    decl: &Declaration,
    lead_words: Option<&IndexSet<String>>,
) -> Option<Finding> {
    let comment = decl.doc.as_ref()?;

    if comment.is_empty() {
        if comment.is_machine_readable_only() {
            return None;
        }
        return Some(Finding::empty_comment(decl.position, &decl.name));
    }

    let words = comment.words();
    let first = words.first().map_or("", String::as_str);

    if first == decl.name {
        return None;
    }

    if let (Some(lead_words), Some(second)) = (lead_words, words.get(1))
        && lead_words.contains(first)
        && *second == decl.name
    {
        return None;
    }

    Some(Finding::mismatch(comment.position, first, &decl.name))
}

#[cfg(test)]
#[path = "mismatch_tests.rs"]
mod tests;
