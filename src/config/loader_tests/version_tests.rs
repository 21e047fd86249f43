//! Tests for config version field validation.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::CommentMimicError;

use super::mock_fs::MockFileSystem;

#[test]
fn config_with_valid_version_loads_successfully() {
    let config_content = r#"
version = "1"

[policy]
comment_exported = true
"#;

    let fs = MockFileSystem::new().with_file("/config.toml", config_content);

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/config.toml"))
        .unwrap();

    assert_eq!(result.config.version, Some("1".to_string()));
    assert!(result.config.policy.comment_exported);
}

#[test]
fn config_without_version_loads_successfully() {
    let fs = MockFileSystem::new().with_file("/config.toml", "[policy]\n");

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/config.toml"))
        .unwrap();

    assert!(result.config.version.is_none());
}

#[test]
fn config_with_unsupported_version_returns_error() {
    let config_content = r#"
version = "99"
"#;

    let fs = MockFileSystem::new().with_file("/config.toml", config_content);

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/config.toml"))
        .unwrap_err();

    assert!(matches!(err, CommentMimicError::Config(_)));
    assert!(err.to_string().contains("'99'"));
}
