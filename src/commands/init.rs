use std::fs;

use crate::{CommentMimicError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CommentMimicError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        CommentMimicError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# comment-mimic configuration file
version = "1"

# Which exported elements must carry a doc comment.
# Comments that exist are always checked: they must start with the
# element's name ("A"/"An" may precede a struct's name).
[policy]
# Exported functions and methods whose receiver type is exported
comment_exported = false

# Every exported function and method, even on unexported receivers
comment_all_exported = false

# Exported interface types
comment_interfaces = false

# Exported struct types
comment_structs = false

# Test, Benchmark, Example and Fuzz functions in _test.go files
# (exempt unless enabled)
comment_tests = false

[scanner]
# Respect .gitignore files (default: true)
gitignore = true

# File extensions to check
extensions = ["go"]

# Exclude patterns (glob syntax)
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
