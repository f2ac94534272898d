//! Filename-safe slugs.
//!
//! Anything other than ASCII letters, digits, `-` and `.` acts as a
//! separator. Separator runs (whitespace, underscores, replaced characters)
//! collapse into a single `_`, and leading/trailing separators are dropped.

/// Characters kept verbatim in a slug besides ASCII alphanumerics.
const KEPT_PUNCTUATION: &[char] = &['-', '.'];

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || KEPT_PUNCTUATION.contains(&c)
}

/// Sanitize `text` into a slug such as `The_Matrix`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;

    for c in text.chars() {
        if is_kept(c) {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            slug.push(c);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spaces_become_single_underscores() {
        assert_eq!(slugify("The Matrix"), "The_Matrix");
        assert_eq!(slugify("  The   Matrix  "), "The_Matrix");
    }

    #[test]
    fn punctuation_is_replaced() {
        assert_eq!(
            slugify("Mission: Impossible - Fallout"),
            "Mission_Impossible_-_Fallout"
        );
        assert_eq!(slugify("2001: A Space Odyssey"), "2001_A_Space_Odyssey");
        assert_eq!(slugify("Dr. Strangelove"), "Dr._Strangelove");
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(slugify("Amélie"), "Am_lie");
        assert_eq!(slugify("WALL·E"), "WALL_E");
    }

    #[test]
    fn underscore_runs_collapse() {
        assert_eq!(slugify("a _ b"), "a_b");
        assert_eq!(slugify("a__b"), "a_b");
        assert_eq!(slugify("__leading and trailing__"), "leading_and_trailing");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn imdb_id_survives_unchanged() {
        assert_eq!(slugify("tt0133093"), "tt0133093");
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent(input in any::<String>()) {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn slug_alphabet_without_underscore_runs(input in "[A-Za-z0-9 ._-]{0,64}") {
            let slug = slugify(&input);
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')),
                "unexpected character in {:?}", slug
            );
            prop_assert!(!slug.contains("__"), "underscore run in {:?}", slug);
            prop_assert!(!slug.starts_with('_') && !slug.ends_with('_'), "{:?}", slug);
        }
    }
}
