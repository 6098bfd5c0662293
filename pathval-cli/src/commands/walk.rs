//! Ancestor and component listing commands.

use crate::error::CliError;
use crate::output::emit;
use crate::utils::GlobalOptions;
use clap::Args;
use pathval::Path;

/// List a path and each of its ancestors, nearest first.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Path to walk
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AncestorsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ancestors: Vec<Path> = Path::new(self.path).ancestors().collect();
        // the empty ancestor of a relative path prints as a blank line
        emit(global.format, &ancestors, ancestors.iter().map(Path::as_str))
    }
}

/// List the components of a path, root first.
#[derive(Args)]
pub struct ComponentsCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ComponentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = Path::new(self.path);
        let components: Vec<&str> = path.iter().collect();
        emit(global.format, &components, &components)
    }
}
