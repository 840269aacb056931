pub mod check;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gotolint",
    version,
    about = "A static analysis tool for C that flags goto statements entering a block from outside",
    long_about = "Gotolint parses C sources with tree-sitter and reports every `goto LABEL` \
                  whose target label lives inside a block that does not lexically enclose \
                  the goto itself. Such a jump bypasses the initialization of objects \
                  declared in the entered block."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a C source file or a directory tree for violations
    Check {
        /// Path to a `.c`/`.h` file or a directory to scan
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output format for findings
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Print the explanation under each finding
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
