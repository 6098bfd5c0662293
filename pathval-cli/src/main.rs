//! Main entry point for the pathval CLI.
//!
//! This is a thin inspection tool over the pathval library. Every subcommand
//! takes path text on the command line and prints what the library computes:
//! - `inspect`, `ancestors`, `components`: decompose a path
//! - `join`, `with-file-name`, `with-extension`, `normalize`: build new paths
//! - `starts-with`, `ends-with`, `strip-prefix`, `relation`: compare paths
//! - `stat`, `read-dir`, `read-link`, `canonicalize`: ask the filesystem

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Usage errors exit with 4; help and version print and exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity
    let _ = pathval::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Components(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::WithFileName(cmd) => cmd.execute(&global),
        cli::Command::WithExtension(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::StartsWith(cmd) => cmd.execute(&global),
        cli::Command::EndsWith(cmd) => cmd.execute(&global),
        cli::Command::StripPrefix(cmd) => cmd.execute(&global),
        cli::Command::Relation(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::ReadDir(cmd) => cmd.execute(&global),
        cli::Command::ReadLink(cmd) => cmd.execute(&global),
        cli::Command::Canonicalize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || !matches!(e, CliError::SemanticFailure(_)) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
