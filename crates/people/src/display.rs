//! Console rendering for a list of people.
//!
//! Rendering is split in two: [`render`] turns a list into text without side
//! effects, and [`write_people`] sends that text to a sink in one write.
//! [`display`] is the stdout case.
//!
//! # Example
//!
//! ```
//! use people::{render, config::DisplayConfig, People};
//!
//! let text = render(&People::assemble(), &DisplayConfig::default()).unwrap();
//! assert!(text.contains("Person { name: 'Alice', age: 30 }"));
//! ```

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::roster::People;

/// Output format for a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bracketed dump of each record, one per line
    #[default]
    Plain,
    /// Aligned name/age table
    Table,
    /// JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render `people` as text in the configured format.
///
/// The result always ends with a single newline.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(people: &People, config: &DisplayConfig) -> Result<String> {
    let mut out = match config.format {
        OutputFormat::Plain => render_plain(people, config.indent),
        OutputFormat::Table => render_table(people),
        OutputFormat::Json => {
            if config.pretty_json {
                serde_json::to_string_pretty(people)?
            } else {
                serde_json::to_string(people)?
            }
        }
    };
    out.push('\n');
    Ok(out)
}

/// Render `people` and write the text to `writer` in a single write.
///
/// # Errors
///
/// Returns an error if rendering fails or the writer rejects the output.
pub fn write_people<W: Write>(
    people: &People,
    config: &DisplayConfig,
    writer: &mut W,
) -> Result<()> {
    let rendered = render(people, config)?;
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| Error::output_write(config.format, source))?;
    debug!(
        count = people.len(),
        format = %config.format,
        bytes = rendered.len(),
        "wrote people"
    );
    Ok(())
}

/// Write `people` to standard output.
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn display(people: &People, config: &DisplayConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_people(people, config, &mut handle)
}

fn render_plain(people: &People, indent: usize) -> String {
    if people.is_empty() {
        return "[]".to_string();
    }

    let pad = " ".repeat(indent);
    let mut out = String::from("[\n");
    let last = people.len() - 1;
    for (i, person) in people.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{pad}{person}{sep}");
    }
    out.push(']');
    out
}

fn render_table(people: &People) -> String {
    const NAME_HEADER: &str = "NAME";
    const AGE_HEADER: &str = "AGE";

    let name_width = people
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_HEADER.len());
    let age_width = people
        .iter()
        .map(|p| p.age().to_string().len())
        .max()
        .unwrap_or(0)
        .max(AGE_HEADER.len());

    let mut out = format!("{NAME_HEADER:<name_width$}  {AGE_HEADER:>age_width$}\n");
    let _ = write!(out, "{}  {}", "-".repeat(name_width), "-".repeat(age_width));
    for person in people {
        let _ = write!(
            out,
            "\n{:<name_width$}  {:>age_width$}",
            person.name(),
            person.age()
        );
    }
    out
}
