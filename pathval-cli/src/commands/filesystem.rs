//! Commands that query the filesystem.
//!
//! `stat` treats a missing path as a semantic failure. The other commands
//! need the path to exist and report the OS error otherwise.

use crate::error::CliError;
use crate::output::emit;
use crate::utils::{or_dash, GlobalOptions};
use clap::Args;
use pathval::{FileType, Path};
use serde::Serialize;
use std::time::UNIX_EPOCH;

/// Show filesystem metadata for a path.
#[derive(Args)]
pub struct StatCommand {
    /// Path to examine
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct Stat {
    path: Path,
    file_type: FileType,
    symlink: bool,
    len: u64,
    readonly: bool,
    modified: Option<u64>,
}

impl StatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = Path::new(self.path);
        let meta = path
            .metadata()
            .ok_or_else(|| CliError::SemanticFailure(format!("{path} does not exist")))?;

        let stat = Stat {
            symlink: path.is_symlink(),
            file_type: meta.file_type,
            len: meta.len,
            readonly: meta.readonly,
            modified: meta
                .modified
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs()),
            path,
        };

        let lines = [
            format!("path: {}", stat.path),
            format!("type: {}", stat.file_type),
            format!("symlink: {}", stat.symlink),
            format!("len: {}", stat.len),
            format!("readonly: {}", stat.readonly),
            format!("modified: {}", or_dash(stat.modified)),
        ];
        emit(global.format, &stat, lines)
    }
}

/// List the entries of a directory, sorted by name.
#[derive(Args)]
pub struct ReadDirCommand {
    /// Directory to list
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ReadDirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut entries = Path::new(self.path).read_dir()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("listed {} entries", entries.len());

        let lines = entries
            .iter()
            .map(|entry| format!("{}\t{}", entry.file_type, entry.path));
        emit(global.format, &entries, lines)
    }
}

/// Print the target of a symbolic link.
#[derive(Args)]
pub struct ReadLinkCommand {
    /// Symbolic link to read
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ReadLinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = Path::new(self.path).read_link()?;
        emit(global.format, &target, [target.as_str()])
    }
}

/// Resolve a path through the filesystem, following symlinks.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = Path::new(self.path).canonicalize()?;
        emit(global.format, &resolved, [resolved.as_str()])
    }
}
