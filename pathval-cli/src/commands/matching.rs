//! Component-wise comparison commands.
//!
//! `starts-with` and `ends-with` report through the exit code, so they can
//! be used directly in shell conditionals.

use crate::error::CliError;
use crate::output::emit;
use crate::utils::GlobalOptions;
use clap::Args;
use pathval::{Path, PathRelationship};
use serde::Serialize;

/// Turn a predicate result into an exit status, honouring `--not`.
///
/// `expected` and `unexpected` describe the positive and the inverted
/// check, e.g. "a to start with b" and "a not to start with b".
fn check(holds: bool, not: bool, expected: &str, unexpected: &str) -> Result<(), CliError> {
    if holds != not {
        Ok(())
    } else {
        let wanted = if not { unexpected } else { expected };
        Err(CliError::SemanticFailure(format!(
            "Assertion failed: expected {wanted}"
        )))
    }
}

/// Succeed if a path starts with a base, component-wise.
#[derive(Args)]
pub struct StartsWithCommand {
    /// Path to test
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Expected leading components
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Invert the check (fail if the path starts with the base)
    #[arg(long)]
    pub not: bool,
}

impl StartsWithCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let holds = Path::new(&self.path).starts_with(&self.base);
        check(
            holds,
            self.not,
            &format!("{} to start with {}", self.path, self.base),
            &format!("{} not to start with {}", self.path, self.base),
        )
    }
}

/// Succeed if a path ends with a child, component-wise.
#[derive(Args)]
pub struct EndsWithCommand {
    /// Path to test
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Expected trailing components
    #[arg(value_name = "CHILD")]
    pub child: String,

    /// Invert the check (fail if the path ends with the child)
    #[arg(long)]
    pub not: bool,
}

impl EndsWithCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let holds = Path::new(&self.path).ends_with(&self.child);
        check(
            holds,
            self.not,
            &format!("{} to end with {}", self.path, self.child),
            &format!("{} not to end with {}", self.path, self.child),
        )
    }
}

/// Print what remains of a path after removing a prefix.
#[derive(Args)]
pub struct StripPrefixCommand {
    /// Path to shorten
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Leading components to remove
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

impl StripPrefixCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let remainder = Path::new(&self.path)
            .strip_prefix(&self.prefix)
            .ok_or_else(|| {
                CliError::SemanticFailure(format!(
                    "{} does not start with {}",
                    self.path, self.prefix
                ))
            })?;
        emit(global.format, &remainder, [remainder.as_str()])
    }
}

/// Show how two paths relate in the hierarchy.
#[derive(Args)]
pub struct RelationCommand {
    /// First path
    #[arg(value_name = "A")]
    pub first: String,

    /// Second path
    #[arg(value_name = "B")]
    pub second: String,
}

#[derive(Serialize)]
struct Relation {
    relationship: PathRelationship,
    description: String,
}

impl RelationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let first = Path::new(self.first);
        let second = Path::new(self.second);
        let relationship = PathRelationship::between(&first, &second);
        let relation = Relation {
            relationship,
            description: relationship.description(&first, &second),
        };

        let line = if global.verbose {
            relation.description.clone()
        } else {
            relationship.to_string()
        };
        emit(global.format, &relation, [line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_honours_not() {
        assert!(check(true, false, "yes", "no").is_ok());
        assert!(check(false, true, "yes", "no").is_ok());
    }

    #[test]
    fn test_failed_check_states_expectation() {
        let err = check(false, false, "a to start with b", "a not to start with b").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Assertion failed: expected a to start with b"
        );

        let err = check(true, true, "a to start with b", "a not to start with b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Assertion failed: expected a not to start with b"
        );
    }
}
