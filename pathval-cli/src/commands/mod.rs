//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show every textual property of a path
//! - `ancestors`, `components`: Walk a path
//! - `join`, `with_file_name`, `with_extension`, `normalize`: Build new paths
//! - `starts_with`, `ends_with`, `strip_prefix`, `relation`: Compare paths
//! - `stat`, `read_dir`, `read_link`, `canonicalize`: Query the filesystem
//! - `completions`: Generate shell completion scripts

pub mod algebra;
pub mod completions;
pub mod filesystem;
pub mod inspect;
pub mod matching;
pub mod walk;

pub use algebra::{JoinCommand, NormalizeCommand, WithExtensionCommand, WithFileNameCommand};
pub use completions::CompletionsCommand;
pub use filesystem::{CanonicalizeCommand, ReadDirCommand, ReadLinkCommand, StatCommand};
pub use inspect::InspectCommand;
pub use matching::{EndsWithCommand, RelationCommand, StartsWithCommand, StripPrefixCommand};
pub use walk::{AncestorsCommand, ComponentsCommand};
