//! Shared helper functions for CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Output written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Print a styled warning to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), message);
}

/// Format a currency value for display.
pub fn fmt_money(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_money() {
        assert_eq!(fmt_money(1234.567), "$1234.57");
        assert_eq!(fmt_money(0.0), "$0.00");
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_output("hello\n", Some(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }
}
