//! Competitor model.

use serde::{Deserialize, Serialize};

use super::name;

/// A competitor on the roster.
///
/// Identified by name alone. The stored name is lowercase; equality between
/// competitors is therefore case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Normalized (lowercase) name. Unique within a roster.
    pub name: String,
}

impl Competitor {
    /// Creates a competitor, normalizing the name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name::normalize(name.as_ref()),
        }
    }

    /// Title-cased form for display.
    pub fn display_name(&self) -> String {
        name::title_case(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_normalizes_name() {
        let c = Competitor::new(" Alice Smith ");
        assert_eq!(c.name, "alice smith");
        assert_eq!(c.display_name(), "Alice Smith");
    }

    #[test]
    fn test_competitor_equality_is_case_insensitive() {
        assert_eq!(Competitor::new("ALICE"), Competitor::new("alice"));
    }
}
