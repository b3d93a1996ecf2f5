use std::fs;

use anyhow::Result;

use crate::output;

/// Write rendered content to a file, or to stdout when no path is given.
/// File writes are confirmed on stderr so stdout stays clean for piping.
pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            output::eprintln_line(&format!("Saved to: {p}"));
        }
        None => print!("{content}"),
    }
    Ok(())
}
