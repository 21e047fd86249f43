mod directive;

pub use directive::is_directive;

use serde::{Deserialize, Serialize};

use crate::declaration::Position;

/// A doc comment attached to a declaration.
///
/// `lines` holds every physical comment of the group exactly as written,
/// decoration included: each `// ...` line is one entry and each `/* ... */`
/// block is one entry, even when the block spans several source lines.
/// Everything else is derived from these on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub position: Position,
    pub lines: Vec<String>,
}

impl Comment {
    #[must_use]
    pub fn new<I, S>(position: Position, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            position,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The prose of the comment: decoration stripped, directive lines dropped,
    /// entries joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        let bodies: Vec<&str> = self.lines.iter().filter_map(|l| prose_body(l)).collect();
        bodies.join("\n")
    }

    /// Whitespace-delimited words of [`Comment::text`], in order.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        tokenize(&self.text()).into_iter().map(String::from).collect()
    }

    /// True when the comment carries no prose at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// True when the comment is made only of directives such as `//nolint:lll`.
    ///
    /// Such a group has no prose, yet every physical comment in it still has
    /// content once its decoration is stripped. A blank `//` or `/* */`
    /// anywhere in the group makes this false, as does any prose line.
    #[must_use]
    pub fn is_machine_readable_only(&self) -> bool {
        self.is_empty()
            && !self.lines.is_empty()
            && self
                .lines
                .iter()
                .all(|l| !strip_decoration(l).trim().is_empty())
    }
}

/// Splits text on runs of whitespace. Blank input yields no words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Removes `//` or `/* */` markers from a single physical comment.
///
/// Input without recognizable markers is returned as-is.
#[must_use]
pub fn strip_decoration(raw: &str) -> &str {
    if let Some(rest) = raw.strip_prefix("/*") {
        return rest.strip_suffix("*/").unwrap_or(rest);
    }
    raw.strip_prefix("//").unwrap_or(raw)
}

/// Body of a physical comment as it contributes to the prose, or `None` for
/// a directive line.
fn prose_body(raw: &str) -> Option<&str> {
    if raw.starts_with("/*") {
        return Some(strip_decoration(raw));
    }

    let Some(body) = raw.strip_prefix("//") else {
        return Some(raw);
    };

    if let Some(rest) = body.strip_prefix(' ') {
        return Some(rest);
    }
    if is_directive(body) {
        return None;
    }
    Some(body)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
