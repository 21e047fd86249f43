use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Switches selecting which exported elements must carry a doc comment.
///
/// Every switch defaults to off, so an empty `[policy]` table only runs
/// the mismatch and empty-comment checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PolicyConfig {
    /// Exported functions whose receiver (if any) is exported.
    #[serde(default)]
    pub comment_exported: bool,

    /// Every exported function, regardless of receiver visibility.
    #[serde(default)]
    pub comment_all_exported: bool,

    #[serde(default)]
    pub comment_interfaces: bool,

    #[serde(default)]
    pub comment_structs: bool,

    /// Lift the exemption for test-role functions in test files.
    #[serde(default)]
    pub comment_tests: bool,
}

/// Scanner configuration for source file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// File extensions to check, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    /// These are ADDITIVE to .gitignore (union, not override).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Root of `.comment-mimic.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
