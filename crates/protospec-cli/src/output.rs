use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a machine-readable report (pretty JSON) on stdout.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}

pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Write one line in the given color (bold optional), resetting afterwards.
pub fn write_line(
    stream: &mut StandardStream,
    color: Option<Color>,
    bold: bool,
    text: &str,
) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    if let Some(c) = color {
        spec.set_fg(Some(c));
    }
    spec.set_bold(bold);
    stream.set_color(&spec)?;
    writeln!(stream, "{text}")?;
    stream.reset()
}
