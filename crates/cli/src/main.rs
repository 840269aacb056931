use clap::Parser;
use gotolint_cli::{Cli, Commands, check};
use gotolint_core::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _guard = init_logging("cli");
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            explain,
        } => match check::run(&path, format, explain) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(_) => ExitCode::from(1),
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::from(2)
            }
        },
    }
}
