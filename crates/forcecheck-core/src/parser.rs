//! Result file parsing.
//!
//! A result file is plain text with one record per line in the shape
//! `ID: <int>, Force = <float>`. Lines without the `ID` marker (headers,
//! blank lines, timing summaries) are skipped. A marked line that does not
//! parse aborts the whole read; no partial `ResultSet` is ever returned.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Marker that distinguishes a data line from noise.
const ID_MARKER: &str = "ID";

/// Errors that can occur when parsing a result file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read result file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data line {line}: expected `ID: <int>, Force = <float>`, got `{content}`")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid identifier on line {line}: `{text}` is not an integer")]
    InvalidId { line: usize, text: String },

    #[error("Invalid force value on line {line}: `{text}` is not a number")]
    InvalidForce { line: usize, text: String },
}

/// The parsed contents of one result file: entity identifier → force value.
///
/// Backed by a `BTreeMap` so iteration is in ascending identifier order,
/// which keeps downstream reports deterministic. Each identifier appears at
/// most once; if a file carries duplicate data lines for the same id, the
/// last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    values: BTreeMap<i64, f64>,
}

impl ResultSet {
    /// Parse a result set from in-memory text.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut values = BTreeMap::new();

        for (idx, line) in text.lines().enumerate() {
            if !line.contains(ID_MARKER) {
                continue;
            }
            let (id, force) = parse_data_line(line, idx + 1)?;
            values.insert(id, force);
        }

        tracing::debug!(entries = values.len(), "parsed result set");
        Ok(Self { values })
    }

    /// Parse a result set from a file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Number of entities in this set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Force value recorded for `id`, if present.
    pub fn get(&self, id: i64) -> Option<f64> {
        self.values.get(&id).copied()
    }

    /// Entity identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.keys().copied()
    }

    /// (identifier, force) pairs in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.values.iter().map(|(&id, &force)| (id, force))
    }
}

impl FromIterator<(i64, f64)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse one marked data line into an (id, force) pair.
///
/// The format is fixed: a comma splits the line into exactly two segments,
/// the first carrying `ID: <int>` and the second `Force = <float>`.
fn parse_data_line(line: &str, line_no: usize) -> Result<(i64, f64), ParseError> {
    let malformed = || ParseError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let segments: Vec<&str> = line.split(',').collect();
    let (id_segment, force_segment) = match segments.as_slice() {
        [id, force] => (*id, *force),
        _ => return Err(malformed()),
    };

    let (_, id_text) = id_segment.split_once(':').ok_or_else(malformed)?;
    let id = id_text
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidId {
            line: line_no,
            text: id_text.trim().to_string(),
        })?;

    let (_, force_text) = force_segment.split_once('=').ok_or_else(malformed)?;
    let force = force_text
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidForce {
            line: line_no,
            text: force_text.trim().to_string(),
        })?;

    Ok((id, force))
}
