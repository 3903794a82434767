//! Property test generators for transfer utilities
//!
//! Strategies for path strings, free text, CSV lines and small on-disk
//! trees used by the property tests in this crate.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a single path segment (no separators, never `.` or `..`)
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}".prop_filter("Not a dot segment", |s| {
            s != "." && s != ".."
        })
    }

    /// Generate a relative path of plain segments
    pub fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 1..=5).prop_map(|parts| parts.join("/"))
    }

    /// Generate an absolute path of plain segments
    pub fn absolute_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| format!("/{}", path))
    }

    /// Generate paths sprinkled with `.`, `..`, empty segments and trailing slashes
    pub fn messy_path() -> impl Strategy<Value = String> {
        (
            any::<bool>(),
            prop::collection::vec(
                prop_oneof![
                    4 => Self::segment(),
                    1 => Just(".".to_string()),
                    1 => Just("..".to_string()),
                    1 => Just(String::new()),
                ],
                0..=8,
            ),
            any::<bool>(),
        )
            .prop_map(|(absolute, parts, trailing)| {
                let mut path = parts.join("/");
                if absolute {
                    path.insert(0, '/');
                }
                if trailing {
                    path.push('/');
                }
                path
            })
    }
}

/// Generators for text utilities
pub struct TextGenerators;

impl TextGenerators {
    /// Generate a word with no whitespace
    pub fn word() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9!?.,-]{1,15}"
    }

    /// Generate a paragraph with irregular whitespace between words
    pub fn paragraph() -> impl Strategy<Value = String> {
        prop::collection::vec((Self::word(), "[ \t\n]{1,3}"), 0..=30).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(word, gap)| format!("{}{}", word, gap))
                .collect()
        })
    }

    /// Generate arbitrary printable input for normalization
    pub fn any_text() -> impl Strategy<Value = String> {
        "\\PC{0,40}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_have_no_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(segment != "." && segment != "..");
        }

        #[test]
        fn absolute_paths_start_at_root(path in PathGenerators::absolute_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn words_have_no_whitespace(word in TextGenerators::word()) {
            prop_assert!(!word.chars().any(char::is_whitespace));
        }

        #[test]
        fn generators_dont_panic(
            _messy in PathGenerators::messy_path(),
            _text in TextGenerators::paragraph()
        ) {
            // This test just ensures our generators don't panic
        }
    }
}
