//! Judge model.

use serde::{Deserialize, Serialize};

use super::name;

/// A judge on the roster, tied to a room.
///
/// The name follows the same lowercase normalization as [`Competitor`];
/// the room label is free-form and preserved verbatim.
///
/// [`Competitor`]: super::Competitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    /// Normalized (lowercase) name. Unique within a roster.
    pub name: String,
    /// Room label, e.g. `"101"` or `"Main Hall"`.
    pub room: String,
}

impl Judge {
    /// Creates a judge, normalizing the name. The room is kept as given.
    pub fn new(name: impl AsRef<str>, room: impl Into<String>) -> Self {
        Self {
            name: name::normalize(name.as_ref()),
            room: room.into(),
        }
    }

    /// Title-cased form for display.
    pub fn display_name(&self) -> String {
        name::title_case(&self.name)
    }
}
