//! Result set comparison.
//!
//! Two result sets agree when they cover the same entity identifiers and
//! every shared identifier's forces differ by at most the threshold. Coverage
//! is checked first and short-circuits: a single missing or extra identifier
//! suppresses all numeric comparison.

use serde::{Deserialize, Serialize};

use crate::parser::ResultSet;

/// Maximum allowed absolute difference before a value pair is flagged.
pub const DEFAULT_THRESHOLD: f64 = 1e-10;

/// One identifier whose forces disagree beyond the threshold.
///
/// Both values are carried unmodified from their source files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub id: i64,
    pub first: f64,
    pub second: f64,
}

/// Outcome of comparing two result sets.
///
/// Coverage mismatch and numeric discrepancies are mutually exclusive: when
/// the identifier sets differ, no per-identifier comparison happens at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The identifier sets differ; lists carry the ids unique to each side.
    DifferentIds {
        only_in_first: Vec<i64>,
        only_in_second: Vec<i64>,
    },
    /// Coverage matched; `discrepancies` is empty when all forces agree.
    Compared { discrepancies: Vec<Discrepancy> },
}

impl Verdict {
    /// True when coverage matched and no discrepancy was recorded.
    pub fn is_all_correct(&self) -> bool {
        matches!(self, Verdict::Compared { discrepancies } if discrepancies.is_empty())
    }
}

/// Compare two result sets under an absolute-difference threshold.
///
/// A pair is flagged only when `|first - second|` strictly exceeds the
/// threshold; equality at exactly the boundary does not flag. Discrepancies
/// are emitted in ascending identifier order.
pub fn compare(first: &ResultSet, second: &ResultSet, threshold: f64) -> Verdict {
    if !first.ids().eq(second.ids()) {
        let only_in_first: Vec<i64> = first.ids().filter(|&id| second.get(id).is_none()).collect();
        let only_in_second: Vec<i64> = second.ids().filter(|&id| first.get(id).is_none()).collect();
        tracing::debug!(
            ?only_in_first,
            ?only_in_second,
            "identifier coverage mismatch"
        );
        return Verdict::DifferentIds {
            only_in_first,
            only_in_second,
        };
    }

    let discrepancies: Vec<Discrepancy> = first
        .iter()
        .filter_map(|(id, v1)| {
            let v2 = second.get(id)?;
            ((v1 - v2).abs() > threshold).then_some(Discrepancy {
                id,
                first: v1,
                second: v2,
            })
        })
        .collect();

    tracing::debug!(
        shared = first.len(),
        flagged = discrepancies.len(),
        threshold,
        "numeric comparison complete"
    );
    Verdict::Compared { discrepancies }
}
