use std::sync::LazyLock;

use regex::Regex;

/// `tool:command` directives, e.g. `nolint:lll` or `go:generate`.
static TOOL_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+:[a-z0-9]").expect("Invalid regex"));

/// Legacy directives that predate the `tool:command` form.
const KEYWORD_DIRECTIVES: [&str; 3] = ["line ", "extern ", "export "];

/// Check whether the body of a `//` comment (text after the slashes) is a
/// machine-readable directive rather than prose.
///
/// Directives never start with a space, so `// nolint:lll` is prose.
#[must_use]
pub fn is_directive(body: &str) -> bool {
    KEYWORD_DIRECTIVES.iter().any(|k| body.starts_with(k)) || TOOL_DIRECTIVE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_directives() {
        assert!(is_directive("nolint:lll"));
        assert!(is_directive("go:generate stringer -type=Kind"));
        assert!(is_directive("nolint:commentmimic // want \"x\""));
        assert!(is_directive("lint:ignore U1000 reason"));
        assert!(is_directive("2fa:x"));
    }

    #[test]
    fn keyword_directives() {
        assert!(is_directive("line foo.go:10"));
        assert!(is_directive("export MyFunc"));
        assert!(is_directive("extern c_func"));
    }

    #[test]
    fn prose_is_not_a_directive() {
        assert!(!is_directive(" nolint:lll"));
        assert!(!is_directive("Foo does X."));
        assert!(!is_directive("Note: this matters"));
        assert!(!is_directive("nolint:"));
        assert!(!is_directive(":lll"));
        assert!(!is_directive("noLint:lll"));
        assert!(!is_directive("exported"));
        assert!(!is_directive(""));
    }
}
