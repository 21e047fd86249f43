use clap::Parser;

use comment_mimic::cli::{Cli, Commands};
use comment_mimic::commands::{run_check, run_config, run_extract, run_init, run_records};

/// Initialize logging from the verbosity flags. `RUST_LOG` takes precedence.
fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Records(args) => run_records(args, &cli),
        Commands::Extract(args) => run_extract(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
