//! Commands that build new paths from existing ones.
//!
//! None of these touch the filesystem except `normalize --absolute`, which
//! reads the working directory.

use crate::error::CliError;
use crate::output::emit;
use crate::utils::GlobalOptions;
use clap::Args;
use pathval::Path;

fn print_path(global: &GlobalOptions, path: &Path) -> Result<(), CliError> {
    emit(global.format, path, [path.as_str()])
}

/// Join segments onto a path.
#[derive(Args)]
pub struct JoinCommand {
    /// Starting path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Segments to append, in order
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let joined = self
            .segments
            .iter()
            .fold(Path::new(self.path), |acc, segment| acc.join(segment));
        print_path(global, &joined)
    }
}

/// Replace the final segment of a path.
#[derive(Args)]
pub struct WithFileNameCommand {
    /// Path to modify
    #[arg(value_name = "PATH")]
    pub path: String,

    /// New file name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl WithFileNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        print_path(global, &Path::new(self.path).with_file_name(&self.name))
    }
}

/// Replace the extension of a path's file name.
///
/// Prints the file name only: the directory part is not kept.
#[derive(Args)]
pub struct WithExtensionCommand {
    /// Path to modify
    #[arg(value_name = "PATH")]
    pub path: String,

    /// New extension, without the dot; empty removes the extension
    #[arg(value_name = "EXT", allow_hyphen_values = true)]
    pub extension: String,
}

impl WithExtensionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        print_path(global, &Path::new(self.path).with_extension(&self.extension))
    }
}

/// Resolve `.` and `..` segments without following symlinks.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Resolve relative paths against the working directory first
    #[arg(long)]
    pub absolute: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = Path::new(self.path);
        let normalized = if self.absolute {
            path.absolute()?
        } else {
            path.normalize()
        };
        print_path(global, &normalized)
    }
}
