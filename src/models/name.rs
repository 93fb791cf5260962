//! Name normalization and display formatting.
//!
//! Names are stored lowercase so comparisons are case-insensitive; the
//! title-cased form is derived whenever a name is shown to a user.

/// Normalizes a name for storage and comparison: trimmed and lowercased.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Title-cases a stored name for display.
///
/// Every alphabetic character that follows a non-alphabetic character (or
/// starts the string) is uppercased, the rest are lowercased. Word
/// separators other than spaces count as boundaries, so `"mary-jane
/// o'neil"` becomes `"Mary-Jane O'Neil"`.
pub(crate) fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Alice "), "alice");
        assert_eq!(normalize("BOB"), "bob");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_title_case_simple() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("alice smith"), "Alice Smith");
    }

    #[test]
    fn test_title_case_separators() {
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("jean-luc"), "Jean-Luc");
    }

    #[test]
    fn test_title_case_idempotent_on_mixed_input() {
        assert_eq!(title_case("ALICE smith"), "Alice Smith");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
