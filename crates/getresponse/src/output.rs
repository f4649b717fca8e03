//! Output formatting: JSON, compact JSON, YAML, raw.
//!
//! API bodies are parsed as JSON and re-rendered in the format selected by
//! `--output`; bodies that aren't JSON are printed as text. `raw` prints
//! the body exactly as received.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a response body in the chosen format.
pub fn render_body(format: OutputFormat, body: &[u8]) -> Result<String, CliError> {
    if format == OutputFormat::Raw {
        return Ok(String::from_utf8_lossy(body).into_owned());
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => render_value(format, &value),
        Err(_) => Ok(String::from_utf8_lossy(body).into_owned()),
    }
}

/// Render a serializable value in the chosen format. `raw` renders as
/// compact JSON.
pub fn render_value<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact | OutputFormat::Raw => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    if output.ends_with('\n') {
        let _ = write!(stdout, "{output}");
    } else {
        let _ = writeln!(stdout, "{output}");
    }
}
