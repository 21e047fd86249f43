use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{Config, parse_config, validate_config_semantics};
use crate::{CommentMimicError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{} error: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, names
/// an unsupported version, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(CommentMimicError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content =
        std::fs::read_to_string(config_path).map_err(|source| CommentMimicError::FileRead {
            path: config_path.to_path_buf(),
            source,
        })?;
    let config = parse_config(&content)?;

    validate_config_semantics(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{} error: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"\n");
    }

    let policy = &config.policy;
    output.push_str("[policy]\n");
    let _ = writeln!(output, "  comment_exported = {}", policy.comment_exported);
    let _ = writeln!(
        output,
        "  comment_all_exported = {}",
        policy.comment_all_exported
    );
    let _ = writeln!(output, "  comment_interfaces = {}", policy.comment_interfaces);
    let _ = writeln!(output, "  comment_structs = {}", policy.comment_structs);
    let _ = writeln!(output, "  comment_tests = {}", policy.comment_tests);

    output.push_str("\n[scanner]\n");
    let _ = writeln!(output, "  gitignore = {}", config.scanner.gitignore);
    let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    if !config.scanner.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
