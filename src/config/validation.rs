//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot be used.

use crate::config::Config;
use crate::{CommentMimicError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if an exclude glob is invalid or an extension is empty
/// or carries a leading dot.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_glob_patterns(config)?;
    validate_extensions(config)?;
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| CommentMimicError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_extensions(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(CommentMimicError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    for ext in &config.scanner.extensions {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(CommentMimicError::Config(format!(
                "scanner.extensions entry '{ext}' must be a bare extension like \"go\""
            )));
        }
    }
    Ok(())
}
