#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the comment-mimic binary.
#[macro_export]
macro_rules! comment_mimic {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("comment-mimic"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.comment-mimic.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".comment-mimic.toml", content);
    }

    /// Reads a file from the fixture.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A command running inside the fixture, isolated from the user's
    /// config directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = comment_mimic!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Every element documented by the convention.
pub const DOCUMENTED_GO: &str = r"package store

// Store keeps values by key.
type Store interface {
	// Get returns the value for key.
	Get(key string) (string, bool)
}

// A Memory is an in-memory Store.
type Memory struct {
	values map[string]string
}

// Get returns the value for key.
func (m *Memory) Get(key string) (string, bool) {
	v, ok := m.values[key]
	return v, ok
}

// New creates an empty Memory.
func New() *Memory { return &Memory{values: map[string]string{}} }
";

/// A mismatch on line 3, an empty comment on `Empty` (line 7), an
/// undocumented `Serve` (line 9) and a directive-only `Directive` (line 12).
pub const FLAWED_GO: &str = r"package api

// Returns the handler.
func Handler() {}

//
func Empty() {}

func Serve() {}

//nolint:unused
func Directive() {}
";

/// Test functions without comments.
pub const TEST_GO: &str = r#"package api

import "testing"

func TestServe(t *testing.T) {}

func BenchmarkServe(b *testing.B) {}
"#;

/// Config enabling every missing-comment switch except tests.
pub const STRICT_CONFIG: &str = r#"
version = "1"

[policy]
comment_exported = true
comment_all_exported = true
comment_interfaces = true
comment_structs = true

[scanner]
gitignore = false
"#;
