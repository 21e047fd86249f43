use crate::cli::InitArgs;
use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::config::{Config, parse_config, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_contains_policy_section() {
    let template = generate_config_template();
    assert!(template.contains("version = \"1\""));
    assert!(template.contains("[policy]"));
    assert!(template.contains("comment_exported = false"));
    assert!(template.contains("comment_all_exported = false"));
    assert!(template.contains("comment_tests = false"));
}

#[test]
fn generate_config_template_contains_scanner_section() {
    let template = generate_config_template();
    assert!(template.contains("[scanner]"));
    assert!(template.contains("gitignore = true"));
    assert!(template.contains("**/vendor/**"));
}

#[test]
fn generate_config_template_parses_to_defaults_plus_excludes() {
    let config = parse_config(&generate_config_template()).unwrap();

    assert_eq!(config.policy, Config::default().policy);
    assert_eq!(config.scanner.extensions, vec!["go"]);
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join(".comment-mimic.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let result = run_init_impl(&args);

    assert!(result.is_ok());
    assert!(output.exists());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        generate_config_template()
    );
}

#[test]
fn run_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join(".comment-mimic.toml");
    std::fs::write(&output, "# existing\n").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "# existing\n");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join(".comment-mimic.toml");
    std::fs::write(&output, "# existing\n").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(
        std::fs::read_to_string(&output)
            .unwrap()
            .contains("[policy]")
    );
}
