//! Roster aggregate.
//!
//! The roster is the unit of persistence: competitors, judges, and the
//! round history, matching the flat file's top-level shape. All name
//! lookups go through lowercase normalization, so callers may pass names
//! in any casing.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::name;
use super::{Assignment, Competitor, Judge, Round};

/// Errors from roster mutations and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("competitor name cannot be empty")]
    EmptyCompetitorName,
    #[error("judge name cannot be empty")]
    EmptyJudgeName,
    #[error("room cannot be empty")]
    EmptyRoom,
    #[error("competitor '{0}' already exists")]
    DuplicateCompetitor(String),
    #[error("judge '{0}' already exists")]
    DuplicateJudge(String),
    #[error("no competitor named '{0}'")]
    UnknownCompetitor(String),
    #[error("no judge named '{0}'")]
    UnknownJudge(String),
    #[error("no round with id {0}")]
    UnknownRound(u32),
}

/// Competitors, judges, and round history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Registered competitors, in registration order.
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    /// Registered judges, in registration order.
    #[serde(default)]
    pub judges: Vec<Judge>,
    /// Recorded rounds, oldest first.
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a competitor by name (any casing).
    pub fn competitor(&self, name: &str) -> Option<&Competitor> {
        let key = name::normalize(name);
        self.competitors.iter().find(|c| c.name == key)
    }

    /// Finds a judge by name (any casing).
    pub fn judge(&self, name: &str) -> Option<&Judge> {
        let key = name::normalize(name);
        self.judges.iter().find(|j| j.name == key)
    }

    /// Registers a competitor.
    ///
    /// Rejects blank names and names already present under
    /// case-insensitive comparison.
    pub fn add_competitor(&mut self, name: &str) -> Result<&Competitor, RosterError> {
        let competitor = Competitor::new(name);
        if competitor.name.is_empty() {
            return Err(RosterError::EmptyCompetitorName);
        }
        if self.competitor(&competitor.name).is_some() {
            return Err(RosterError::DuplicateCompetitor(competitor.display_name()));
        }
        let idx = self.competitors.len();
        self.competitors.push(competitor);
        Ok(&self.competitors[idx])
    }

    /// Registers a judge with a room.
    pub fn add_judge(&mut self, name: &str, room: &str) -> Result<&Judge, RosterError> {
        let judge = Judge::new(name, room);
        if judge.name.is_empty() {
            return Err(RosterError::EmptyJudgeName);
        }
        if judge.room.trim().is_empty() {
            return Err(RosterError::EmptyRoom);
        }
        if self.judge(&judge.name).is_some() {
            return Err(RosterError::DuplicateJudge(judge.display_name()));
        }
        let idx = self.judges.len();
        self.judges.push(judge);
        Ok(&self.judges[idx])
    }

    /// Removes a competitor by name, returning the removed record.
    pub fn remove_competitor(&mut self, name: &str) -> Result<Competitor, RosterError> {
        let key = name::normalize(name);
        match self.competitors.iter().position(|c| c.name == key) {
            Some(idx) => Ok(self.competitors.remove(idx)),
            None => Err(RosterError::UnknownCompetitor(key)),
        }
    }

    /// Removes a judge by name, returning the removed record.
    pub fn remove_judge(&mut self, name: &str) -> Result<Judge, RosterError> {
        let key = name::normalize(name);
        match self.judges.iter().position(|j| j.name == key) {
            Some(idx) => Ok(self.judges.remove(idx)),
            None => Err(RosterError::UnknownJudge(key)),
        }
    }

    /// Resolves a list of competitor names to owned records, preserving
    /// the given order. Any unknown name fails the whole selection.
    pub fn select_competitors(&self, names: &[String]) -> Result<Vec<Competitor>, RosterError> {
        names
            .iter()
            .map(|n| {
                self.competitor(n)
                    .cloned()
                    .ok_or_else(|| RosterError::UnknownCompetitor(name::normalize(n)))
            })
            .collect()
    }

    /// Resolves a list of judge names to owned records, preserving the
    /// given order.
    pub fn select_judges(&self, names: &[String]) -> Result<Vec<Judge>, RosterError> {
        names
            .iter()
            .map(|n| {
                self.judge(n)
                    .cloned()
                    .ok_or_else(|| RosterError::UnknownJudge(name::normalize(n)))
            })
            .collect()
    }

    /// Records a completed draw as the next round.
    ///
    /// The id is `existing rounds + 1`, so numbering restarts after
    /// [`clear_rounds`](Self::clear_rounds).
    pub fn record_round(&mut self, assignments: Vec<Assignment>) -> &Round {
        let idx = self.rounds.len();
        let id = idx as u32 + 1;
        self.rounds.push(Round::new(id, Utc::now(), assignments));
        &self.rounds[idx]
    }

    /// Finds a round by id.
    pub fn round(&self, id: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    /// Deletes the entire round history.
    pub fn clear_rounds(&mut self) {
        self.rounds.clear();
    }

    /// Re-applies name normalization after deserialization, so files
    /// edited by hand or written by older versions converge.
    pub(crate) fn normalize_names(&mut self) {
        for c in &mut self.competitors {
            c.name = name::normalize(&c.name);
        }
        for j in &mut self.judges {
            j.name = name::normalize(&j.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add_competitor("alice").unwrap();
        roster.add_competitor("bob").unwrap();
        roster.add_judge("erin", "101").unwrap();
        roster
    }

    #[test]
    fn test_add_competitor_rejects_duplicates_case_insensitively() {
        let mut roster = sample_roster();
        let err = roster.add_competitor("ALICE").unwrap_err();
        assert_eq!(err, RosterError::DuplicateCompetitor("Alice".into()));
        assert_eq!(roster.competitors.len(), 2);
    }

    #[test]
    fn test_add_competitor_rejects_blank_name() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.add_competitor("   "),
            Err(RosterError::EmptyCompetitorName)
        );
    }

    #[test]
    fn test_add_judge_rejects_blank_room() {
        let mut roster = Roster::new();
        assert_eq!(roster.add_judge("erin", "  "), Err(RosterError::EmptyRoom));
    }

    #[test]
    fn test_add_judge_rejects_duplicates() {
        let mut roster = sample_roster();
        let err = roster.add_judge("Erin", "202").unwrap_err();
        assert_eq!(err, RosterError::DuplicateJudge("Erin".into()));
    }

    #[test]
    fn test_lookup_any_casing() {
        let roster = sample_roster();
        assert!(roster.competitor("Alice").is_some());
        assert!(roster.judge("ERIN").is_some());
        assert!(roster.competitor("carol").is_none());
    }

    #[test]
    fn test_remove_competitor() {
        let mut roster = sample_roster();
        let removed = roster.remove_competitor("Bob").unwrap();
        assert_eq!(removed.name, "bob");
        assert_eq!(roster.competitors.len(), 1);
        assert_eq!(
            roster.remove_competitor("bob"),
            Err(RosterError::UnknownCompetitor("bob".into()))
        );
    }

    #[test]
    fn test_select_competitors_preserves_order_and_fails_on_unknown() {
        let roster = sample_roster();
        let picked = roster
            .select_competitors(&["Bob".into(), "alice".into()])
            .unwrap();
        assert_eq!(picked[0].name, "bob");
        assert_eq!(picked[1].name, "alice");

        let err = roster
            .select_competitors(&["alice".into(), "Zed".into()])
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownCompetitor("zed".into()));
    }

    #[test]
    fn test_round_numbering_is_sequential_and_resets_on_clear() {
        let mut roster = sample_roster();
        assert_eq!(roster.record_round(Vec::new()).id, 1);
        assert_eq!(roster.record_round(Vec::new()).id, 2);
        assert_eq!(roster.round(2).map(|r| r.name.as_str()), Some("Round 2"));

        roster.clear_rounds();
        assert!(roster.round(1).is_none());
        assert_eq!(roster.record_round(Vec::new()).id, 1);
    }

    #[test]
    fn test_normalize_names_converges_hand_edited_data() {
        let mut roster = Roster {
            competitors: vec![Competitor {
                name: "Alice Smith".into(),
            }],
            judges: vec![Judge {
                name: "ERIN".into(),
                room: "Main Hall".into(),
            }],
            rounds: Vec::new(),
        };
        roster.normalize_names();
        assert_eq!(roster.competitors[0].name, "alice smith");
        assert_eq!(roster.judges[0].name, "erin");
        assert_eq!(roster.judges[0].room, "Main Hall");
    }
}
