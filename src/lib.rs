pub mod checker;
pub mod cli;
pub mod commands;
pub mod comment;
pub mod config;
pub mod declaration;
pub mod error;
pub mod extract;
pub mod output;
pub mod scanner;

pub use error::{CommentMimicError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
