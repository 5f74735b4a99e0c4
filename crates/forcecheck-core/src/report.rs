//! Human- and machine-readable comparison reports.
//!
//! `Display` renders the exact lines users see on stdout; the serde form is
//! for `--format json` and carries the structured verdict alongside the
//! threshold used and a timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::compare::Verdict;

/// The outcome of one verification run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub verdict: Verdict,
    pub threshold: f64,
    pub compared_at: DateTime<Utc>,
}

impl ComparisonReport {
    pub fn new(verdict: Verdict, threshold: f64) -> Self {
        Self {
            verdict,
            threshold,
            compared_at: Utc::now(),
        }
    }

    /// True when coverage matched and every shared force agreed.
    pub fn is_all_correct(&self) -> bool {
        self.verdict.is_all_correct()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::DifferentIds { .. } => write!(f, "The files have different IDs!"),
            Verdict::Compared { discrepancies } if discrepancies.is_empty() => {
                write!(f, "all correct!")
            }
            Verdict::Compared { discrepancies } => {
                for (i, d) in discrepancies.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    // {:?} prints the shortest round-trip form, so 1.0 stays
                    // "1.0" rather than "1".
                    write!(
                        f,
                        "ID: {} has different forces. File1: {:?}, File2: {:?}",
                        d.id, d.first, d.second
                    )?;
                }
                Ok(())
            }
        }
    }
}
