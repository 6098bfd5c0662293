//! Output formatting for command results.
//!
//! Text output prints one value per line. JSON output serializes the
//! command's result value with `serde_json`.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print `value` in the selected format.
///
/// `lines` is only consulted for text output.
pub fn emit<T, I>(format: OutputFormat, value: &T, lines: I) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, format, value, lines)
}

fn write_to<W, T, I>(out: &mut W, format: OutputFormat, value: &T, lines: I) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    match format {
        OutputFormat::Text => {
            for line in lines {
                writeln!(out, "{}", line.as_ref())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Serialize + ?Sized>(format: OutputFormat, value: &T, lines: &[&str]) -> String {
        let mut buf = Vec::new();
        write_to(&mut buf, format, value, lines).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_prints_lines() {
        let out = render(OutputFormat::Text, &["ignored"], &["/", "tmp"]);
        assert_eq!(out, "/\ntmp\n");
    }

    #[test]
    fn test_json_prints_value() {
        let out = render(OutputFormat::Json, &["/", "tmp"], &[]);
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, ["/", "tmp"]);
    }
}
