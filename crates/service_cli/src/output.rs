//! Output formats and terminal tables.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CliError, Result};

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

const NO_DATA: &str = "(no data)";

/// Column-aligned table drawn with box characters.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        if self.rows.is_empty() {
            if let Some(first) = widths.first_mut() {
                *first = (*first).max(NO_DATA.chars().count());
            }
        }
        widths
    }
}

fn rule(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    left: &str,
    mid: &str,
    right: &str,
) -> fmt::Result {
    f.write_str(left)?;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            f.write_str(mid)?;
        }
        f.write_str(&"─".repeat(width + 2))?;
    }
    writeln!(f, "{}", right)
}

fn line(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    f.write_str("│")?;
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.chars().count());
        write!(f, " {}{} │", cell, " ".repeat(pad))?;
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        rule(f, &widths, "┌", "┬", "┐")?;
        line(f, &widths, &self.headers)?;
        rule(f, &widths, "├", "┼", "┤")?;
        if self.rows.is_empty() {
            line(f, &widths, &[NO_DATA.to_string()])?;
        }
        for row in &self.rows {
            line(f, &widths, row)?;
        }
        rule(f, &widths, "└", "┴", "┘")
    }
}
