pub mod check;
pub mod config;
mod context;
pub mod extract;
pub mod init;
pub mod records;

pub use check::{check_files, run_check};
pub use config::run_config;
pub use extract::{extract_records, run_extract};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use records::{check_records, run_records};

/// A quiet, config-free CLI for driving commands in tests.
#[cfg(test)]
pub(crate) fn test_cli() -> crate::cli::Cli {
    use crate::cli::{Cli, ColorChoice, Commands, InitArgs};

    Cli {
        verbose: 0,
        quiet: true,
        color: ColorChoice::Never,
        no_config: true,
        command: Commands::Init(InitArgs {
            output: std::path::PathBuf::new(),
            force: false,
        }),
    }
}
