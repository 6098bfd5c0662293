//! Inspect command implementation.
//!
//! Prints every textual property of a path in one report.

use crate::error::CliError;
use crate::output::emit;
use crate::utils::{or_dash, GlobalOptions};
use clap::Args;
use pathval::Path;
use serde::Serialize;

/// Show everything the library knows about a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Textual properties of a path.
#[derive(Debug, Serialize)]
struct Inspection {
    path: Path,
    absolute: bool,
    has_parent: bool,
    parent: Option<Path>,
    file_name: Option<String>,
    file_stem: Option<String>,
    extension: Option<String>,
    components: Vec<String>,
}

impl Inspection {
    fn of(path: Path) -> Self {
        Self {
            absolute: path.is_absolute(),
            has_parent: path.has_root(),
            parent: path.parent(),
            file_name: path.file_name(),
            file_stem: path.file_stem(),
            extension: path.extension(),
            components: path.iter().map(str::to_string).collect(),
            path,
        }
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("path: {}", self.path),
            format!("absolute: {}", self.absolute),
            format!("has-parent: {}", self.has_parent),
            format!("parent: {}", or_dash(self.parent.as_ref())),
            format!("file-name: {}", or_dash(self.file_name.as_ref())),
            format!("file-stem: {}", or_dash(self.file_stem.as_ref())),
            format!("extension: {}", or_dash(self.extension.as_ref())),
            format!("components: {}", self.components.join(" ")),
        ]
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = Inspection::of(Path::new(self.path));
        emit(global.format, &report, report.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspection_of_file() {
        let report = Inspection::of(Path::new("/tmp/foo.tar.gz"));
        assert!(report.absolute);
        assert!(report.has_parent);
        assert_eq!(report.parent, Some(Path::new("/tmp")));
        assert_eq!(report.file_stem.as_deref(), Some("foo.tar"));
        assert_eq!(report.extension.as_deref(), Some("gz"));
        assert_eq!(report.components, ["/", "tmp", "foo.tar.gz"]);
    }

    #[test]
    fn test_inspection_lines_mark_absent_values() {
        let report = Inspection::of(Path::new("/"));
        let lines = report.lines();
        assert!(lines.contains(&"parent: -".to_string()));
        assert!(lines.contains(&"file-name: -".to_string()));
        assert!(lines.contains(&"components: /".to_string()));
    }
}
