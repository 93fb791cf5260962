//! Round (completed draw) model.
//!
//! A round is one completed assignment run: a sequential id, a generated
//! name, a creation timestamp, and the resulting assignments. Rounds are
//! immutable once recorded; the history is append-only and can only be
//! cleared in bulk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The competitors allocated to a single judge within a round.
///
/// Holds display forms (title-cased names) so stored rounds render without
/// consulting the live roster, which may have changed since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Judge display name.
    pub judge: String,
    /// Room label, verbatim.
    pub room: String,
    /// Competitor display names, in assignment order.
    pub competitors: Vec<String>,
}

/// One completed assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Sequential id, starting at 1. Resets when the history is cleared.
    pub id: u32,
    /// Generated name, `"Round N"`.
    pub name: String,
    /// Creation timestamp.
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    /// Per-judge assignments, in judge selection order.
    ///
    /// Files written by earlier versions spelled this field `schematics`;
    /// the alias keeps them readable.
    #[serde(alias = "schematics")]
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    /// Creates an assignment record.
    pub fn new(
        judge: impl Into<String>,
        room: impl Into<String>,
        competitors: Vec<String>,
    ) -> Self {
        Self {
            judge: judge.into(),
            room: room.into(),
            competitors,
        }
    }

    /// Number of competitors assigned to this judge.
    #[inline]
    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }
}

impl Round {
    /// Creates a round with a generated `"Round N"` name.
    pub fn new(id: u32, created_at: DateTime<Utc>, assignments: Vec<Assignment>) -> Self {
        Self {
            id,
            name: format!("Round {id}"),
            created_at,
            assignments,
        }
    }

    /// Total competitors assigned across all judges.
    pub fn competitor_count(&self) -> usize {
        self.assignments.iter().map(|a| a.competitor_count()).sum()
    }

    /// Finds the assignment for a judge by display name.
    pub fn assignment_for_judge(&self, judge: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.judge == judge)
    }
}
