//! String normalization, joining, CSV splitting and word wrapping
//!
//! Every function here is total: `None` input is treated as the empty string
//! and no input makes them fail.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

static NORM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z_0-9\-+,.]+").expect("valid normalize pattern"));

static WS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static CSV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(,\s*)+").expect("valid csv pattern"));

/// Normalize a string into a lowercase identifier-like token
///
/// The input is lowercased, every run of characters outside `a-z`, `0-9`
/// and `-_+,.` becomes a single space, the result is trimmed and remaining
/// whitespace runs become `_`.
///
/// # Examples
/// ```
/// use transfer_utils::normalize;
///
/// assert_eq!(normalize("Hello  World!!"), "hello_world");
/// assert_eq!(normalize("GridFTP v2.0"), "gridftp_v2.0");
/// assert_eq!(normalize(None::<&str>), "");
/// ```
pub fn normalize<'a>(s: impl Into<Option<&'a str>>) -> String {
    let Some(s) = s.into() else {
        return String::new();
    };

    let lowered = s.to_lowercase();
    let spaced = NORM_PATTERN.replace_all(&lowered, " ");
    WS_PATTERN.replace_all(spaced.trim(), "_").into_owned()
}

/// Split a comma-separated list into normalized pieces
///
/// Commas and the whitespace around them separate pieces; a run of commas
/// counts as one separator. Each piece is normalized after splitting.
/// Trailing empty pieces are dropped, so `"a,"` yields `["a"]`.
///
/// # Examples
/// ```
/// use transfer_utils::split_csv;
///
/// assert_eq!(split_csv("Alpha, Beta ,gamma"), vec!["alpha", "beta", "gamma"]);
/// assert_eq!(split_csv("a, b,,c"), vec!["a", "b", "c"]);
/// ```
pub fn split_csv<'a>(s: impl Into<Option<&'a str>>) -> Vec<String> {
    let s = s.into().unwrap_or("");

    if !CSV_PATTERN.is_match(s) {
        return vec![normalize(s)];
    }

    let mut pieces: Vec<&str> = CSV_PATTERN.split(s).collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }

    pieces.into_iter().map(normalize).collect()
}

/// Join the present items with `delimiter`
///
/// `None` items are skipped without leaving a stray delimiter behind, and
/// a `None` delimiter joins with nothing in between.
///
/// # Examples
/// ```
/// use transfer_utils::join_with;
///
/// assert_eq!(join_with(",", [Some("a"), None, Some("b")]), "a,b");
/// assert_eq!(join_with(None::<&str>, [Some(1), Some(2)]), "12");
/// ```
pub fn join_with<'a, I, T>(delimiter: impl Into<Option<&'a str>>, items: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    let delimiter = delimiter.into().unwrap_or("");
    let mut joined = String::new();
    let mut first = true;

    for item in items.into_iter().flatten() {
        if !first {
            joined.push_str(delimiter);
        }
        joined.push_str(&item.to_string());
        first = false;
    }

    joined
}

/// Join the present items with a single space
pub fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    join_with(" ", items)
}

/// Join the present items back into a CSV string (`", "` separated)
pub fn join_csv<I, T>(items: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    join_with(", ", items)
}

/// Greedy word wrap to `width` characters
///
/// A word moves to the next line when the current line plus the word would
/// reach `width`, so wrapped lines never exceed `width`. A single word longer
/// than `width` stays unbroken on its own line.
///
/// # Examples
/// ```
/// use transfer_utils::wrap;
///
/// assert_eq!(wrap("one two three four", 10), "one two\nthree four");
/// ```
pub fn wrap<'a>(text: impl Into<Option<&'a str>>, width: usize) -> String {
    let text = text.into().unwrap_or("");
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if !line.is_empty() && line_len + word_len >= width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        } else if !line.is_empty() {
            line.push(' ');
            line_len += 1;
        }

        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::TextGenerators;
    use proptest::prelude::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(None::<&str>), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("Hello  World!!"), "hello_world");
        assert_eq!(normalize("  leading and trailing  "), "leading_and_trailing");
        assert_eq!(normalize("keep-these_+,.chars"), "keep-these_+,.chars");
        assert_eq!(normalize("tab\tand\nnewline"), "tab_and_newline");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("Ünïcode ok"), "n_code_ok");
    }

    #[test]
    fn test_split_csv_normalizes_each_piece() {
        assert_eq!(split_csv(None::<&str>), vec![""]);
        assert_eq!(split_csv(""), vec![""]);
        assert_eq!(split_csv("single"), vec!["single"]);
        assert_eq!(split_csv("A B, C!D"), vec!["a_b", "c_d"]);
        assert_eq!(split_csv("a , , b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_csv_empty_pieces() {
        // Leading separator leaves an empty first piece
        assert_eq!(split_csv(",a"), vec!["", "a"]);
        // Pieces that normalize away stay as empty strings
        assert_eq!(split_csv("a,??,b"), vec!["a", "", "b"]);
        // Trailing separators are dropped
        assert_eq!(split_csv("a,b,,"), vec!["a", "b"]);
        assert!(split_csv(",").is_empty());
    }

    #[test]
    fn test_join_functions() {
        assert_eq!(join([Some("a"), Some("b"), Some("c")]), "a b c");
        assert_eq!(join_csv([Some("x"), None, Some("y")]), "x, y");
        assert_eq!(join_with(",", [Some("a"), None, Some("b")]), "a,b");
        assert_eq!(join_with(",", [None, Some("a")]), "a");
        assert_eq!(join_with(",", [Some("a"), None]), "a");
        assert_eq!(join_with(None::<&str>, [Some("a"), Some("b")]), "ab");
        assert_eq!(join_with("-", Vec::<Option<&str>>::new()), "");
        assert_eq!(join_with("-", [None::<&str>, None]), "");
        assert_eq!(join_with(":", [Some(1), Some(22)]), "1:22");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three four", 10), "one two\nthree four");
        assert_eq!(wrap(None::<&str>, 10), "");
        assert_eq!(wrap("   ", 10), "");
        assert_eq!(wrap("  padded   words ", 80), "padded words");
    }

    #[test]
    fn test_wrap_long_word_stays_whole() {
        assert_eq!(
            wrap("a supercalifragilistic word", 5),
            "a\nsupercalifragilistic\nword"
        );
    }

    #[test]
    fn test_wrap_lines_fit_width() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for line in wrap(text, 12).lines() {
            assert!(line.chars().count() <= 12, "line too long: {line:?}");
        }
    }

    proptest! {
        #[test]
        fn normalize_leaves_no_whitespace(s in TextGenerators::any_text()) {
            let normalized = normalize(s.as_str());
            prop_assert!(!normalized.chars().any(char::is_whitespace));
        }

        #[test]
        fn wrap_keeps_every_word(text in TextGenerators::paragraph(), width in 1usize..30) {
            let wrapped = wrap(text.as_str(), width);
            prop_assert_eq!(
                wrapped.split_whitespace().count(),
                text.split_whitespace().count()
            );
        }
    }
}
