//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AncestorsCommand, CanonicalizeCommand, CompletionsCommand, ComponentsCommand,
    EndsWithCommand, InspectCommand, JoinCommand, NormalizeCommand, ReadDirCommand,
    ReadLinkCommand, RelationCommand, StartsWithCommand, StatCommand, StripPrefixCommand,
    WithExtensionCommand, WithFileNameCommand,
};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting path values.
#[derive(Parser)]
#[command(name = "pathval")]
#[command(version, about = "Inspect and compare path values", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        global = true,
        env = "PATHVAL_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show everything the library knows about a path
    Inspect(InspectCommand),

    /// List a path and each of its ancestors
    Ancestors(AncestorsCommand),

    /// List the components of a path
    Components(ComponentsCommand),

    /// Join segments onto a path
    Join(JoinCommand),

    /// Replace the final segment of a path
    WithFileName(WithFileNameCommand),

    /// Replace the extension of a path's file name
    WithExtension(WithExtensionCommand),

    /// Resolve `.` and `..` segments
    Normalize(NormalizeCommand),

    /// Succeed if a path starts with a base, component-wise
    StartsWith(StartsWithCommand),

    /// Succeed if a path ends with a child, component-wise
    EndsWith(EndsWithCommand),

    /// Print what remains after removing a prefix
    StripPrefix(StripPrefixCommand),

    /// Show how two paths relate
    Relation(RelationCommand),

    /// Show filesystem metadata for a path
    Stat(StatCommand),

    /// List the entries of a directory
    ReadDir(ReadDirCommand),

    /// Print the target of a symbolic link
    ReadLink(ReadLinkCommand),

    /// Resolve a path through the filesystem
    Canonicalize(CanonicalizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pathval", "components", "/a/b", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Components(_)));
    }

    #[test]
    fn test_join_requires_a_segment() {
        assert!(Cli::try_parse_from(["pathval", "join", "/etc"]).is_err());
    }
}
