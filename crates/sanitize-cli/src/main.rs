//! `sanitize` CLI — cast, filter and escape untrusted input from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Cast a value (JSON, or raw text when not JSON)
//! echo '"42px"' | sanitize cast --kind int
//!
//! # Filter email / URL characters
//! echo ' john@example.com<>' | sanitize email
//! sanitize url -i links.txt -o clean.txt
//!
//! # Normalize a path
//! echo '/var//www\html/' | sanitize path --no-trailing-slash
//!
//! # HTML-escape text, or every string in a JSON document
//! echo '<b>hi</b>' | sanitize escape
//! sanitize escape --json --encoding Shift_JIS -i form.json
//!
//! # Debug logging to stderr
//! RUST_LOG=sanitize_core=debug sanitize escape --encoding bogus
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sanitize_core::{CastKind, Encoding};
use serde_json::Value;
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "sanitize",
    version,
    about = "Cast, filter and HTML-escape untrusted input"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a value to another type (prints JSON)
    Cast {
        /// Target kind: array, bool, float, int, object or string.
        /// Unrecognized kinds cast to string.
        #[arg(short, long, default_value = "string")]
        kind: String,
        #[command(flatten)]
        files: IoArgs,
    },
    /// Strip characters not allowed in an email address
    Email {
        #[command(flatten)]
        files: IoArgs,
    },
    /// Strip characters not allowed in a URL
    Url {
        #[command(flatten)]
        files: IoArgs,
    },
    /// Normalize slashes and whitespace in a path
    Path {
        /// Do not append a trailing slash
        #[arg(long)]
        no_trailing_slash: bool,
        #[command(flatten)]
        files: IoArgs,
    },
    /// HTML-escape text, or every string in a JSON document
    Escape {
        /// Character encoding label
        #[arg(short, long, default_value = "UTF-8")]
        encoding: String,
        /// Treat input as JSON and escape every string value recursively
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        files: IoArgs,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cast { kind, files } => {
            let raw = read_input(files.input.as_deref())?;
            let kind = CastKind::from_tag(&kind);
            let value = parse_loose(&raw);
            debug!(%kind, "casting value");
            let out = sanitize_core::cast(&value, kind);
            write_output(files.output.as_deref(), &serde_json::to_string(&out)?)?;
        }
        Commands::Email { files } => {
            let raw = read_input(files.input.as_deref())?;
            write_output(files.output.as_deref(), &sanitize_core::filter_email(&raw))?;
        }
        Commands::Url { files } => {
            let raw = read_input(files.input.as_deref())?;
            write_output(files.output.as_deref(), &sanitize_core::filter_url(&raw))?;
        }
        Commands::Path {
            no_trailing_slash,
            files,
        } => {
            let raw = read_input(files.input.as_deref())?;
            let path = sanitize_core::normalize_path(&raw, !no_trailing_slash);
            write_output(files.output.as_deref(), &path)?;
        }
        Commands::Escape { encoding, json, files } => {
            let encoding = Encoding::from_label(&encoding)
                .with_context(|| format!("Failed to resolve encoding '{}'", encoding))?;
            let raw = read_input(files.input.as_deref())?;
            let out = if json {
                let mut value: Value =
                    serde_json::from_str(&raw).context("Failed to parse input as JSON")?;
                sanitize_core::escape_in_place(&mut value, encoding);
                serde_json::to_string_pretty(&value)?
            } else {
                sanitize_core::escape_str(&raw, encoding)
            };
            write_output(files.output.as_deref(), &out)?;
        }
    }

    Ok(())
}

/// Parse input as JSON, falling back to the raw text (minus one trailing
/// newline) as a JSON string.
fn parse_loose(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| {
        let text = raw
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(raw);
        Value::String(text.to_string())
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_loose_prefers_json() {
        assert_eq!(parse_loose("[1, 2]\n"), json!([1, 2]));
        assert_eq!(parse_loose("\"quoted\""), json!("quoted"));
        assert_eq!(parse_loose("42"), json!(42));
    }

    #[test]
    fn parse_loose_falls_back_to_text() {
        assert_eq!(parse_loose("12abc\n"), json!("12abc"));
        assert_eq!(parse_loose("12abc\r\n"), json!("12abc"));
        assert_eq!(parse_loose("two\n\n"), json!("two\n"));
        assert_eq!(parse_loose(""), json!(""));
    }
}
