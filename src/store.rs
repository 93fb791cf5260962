//! Flat-file JSON persistence for the roster.
//!
//! One file holds the entire aggregate (competitors, judges, round
//! history). Load and save are explicit; there is no caching or locking,
//! which is fine for the single-user, low-frequency-write usage this
//! tool sees.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Roster;
use crate::validation::validate_roster;

/// Errors from loading or saving the roster file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed roster file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Flat-file JSON repository for a [`Roster`].
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the roster.
    ///
    /// A missing file yields an empty roster. Names are re-normalized to
    /// lowercase after deserialization, and structural problems found by
    /// [`validate_roster`] are logged at WARN without failing the load.
    pub fn load(&self) -> Result<Roster, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "roster file missing, starting empty");
            return Ok(Roster::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut roster: Roster = serde_json::from_str(&contents)?;
        roster.normalize_names();

        if let Err(errors) = validate_roster(&roster) {
            for e in &errors {
                warn!(path = %self.path.display(), "{}", e.message);
            }
        }

        debug!(
            path = %self.path.display(),
            competitors = roster.competitors.len(),
            judges = roster.judges.len(),
            rounds = roster.rounds.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Saves the roster, pretty-printed, creating the parent directory if
    /// needed.
    pub fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(roster)?)?;
        debug!(path = %self.path.display(), "roster saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty_roster() {
        let dir = tempdir().unwrap();
        let store = RosterStore::new(dir.path().join("data.json"));

        let roster = store.load().unwrap();
        assert!(roster.competitors.is_empty());
        assert!(roster.judges.is_empty());
        assert!(roster.rounds.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = RosterStore::new(dir.path().join("data.json"));

        let mut roster = Roster::new();
        roster.add_competitor("alice").unwrap();
        roster.add_judge("erin", "101").unwrap();
        store.save(&roster).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.competitors, roster.competitors);
        assert_eq!(reloaded.judges, roster.judges);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store = RosterStore::new(dir.path().join("nested/dir/data.json"));

        store.save(&Roster::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_lowercases_hand_edited_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{
                "competitors": [{"name": "Alice Smith"}],
                "judges": [{"name": "ERIN", "room": "Main Hall"}],
                "rounds": []
            }"#,
        )
        .unwrap();

        let roster = RosterStore::new(&path).load().unwrap();
        assert_eq!(roster.competitors[0].name, "alice smith");
        assert_eq!(roster.judges[0].name, "erin");
        assert_eq!(roster.judges[0].room, "Main Hall");
    }

    #[test]
    fn test_load_accepts_legacy_schematics_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{
                "competitors": [],
                "judges": [],
                "rounds": [{
                    "id": 1,
                    "name": "Round 1",
                    "date": "2024-03-01T10:00:00Z",
                    "schematics": [
                        {"judge": "Erin", "room": "101", "competitors": ["Alice", "Bob"]}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let roster = RosterStore::new(&path).load().unwrap();
        assert_eq!(roster.rounds.len(), 1);
        assert_eq!(roster.rounds[0].competitor_count(), 2);
    }

    #[test]
    fn test_load_tolerates_missing_rounds_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"competitors": [], "judges": []}"#).unwrap();

        let roster = RosterStore::new(&path).load().unwrap();
        assert!(roster.rounds.is_empty());
    }

    #[test]
    fn test_malformed_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();

        let err = RosterStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }
}
