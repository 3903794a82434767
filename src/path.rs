//! Path string decomposition and normalization
//!
//! Paths are handled as `/`-delimited strings. A leading `/` marks an
//! absolute path and a trailing `/` marks a directory.

use crate::error::{Result, UtilError};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) static SLASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/+").expect("valid slash pattern"));

/// Split a path into its components
///
/// The first element is `"/"` for an absolute path and the last element is
/// an empty string when the path names a directory (trailing slash). Runs of
/// slashes count as a single separator.
///
/// # Examples
/// ```
/// use transfer_utils::split_path;
///
/// assert_eq!(split_path("/a/b/"), vec!["/", "a", "b", ""]);
/// assert_eq!(split_path("a//b"), vec!["a", "b"]);
/// ```
pub fn split_path<'a>(path: impl Into<Option<&'a str>>) -> Vec<String> {
    let path = path.into().unwrap_or("");
    let mut components = Vec::new();

    let rest = if path.starts_with('/') {
        components.push("/".to_string());
        path.trim_start_matches('/')
    } else {
        path
    };

    components.extend(SLASH_RUN.split(rest).map(str::to_string));
    components
}

/// True when the path starts at the root
pub fn is_absolute<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into().is_some_and(|p| p.starts_with('/'))
}

/// True when the path carries a trailing directory marker
pub fn is_directory<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into().is_some_and(|p| p.ends_with('/'))
}

/// Everything after the last `/`, or the whole string if there is none
///
/// # Examples
/// ```
/// use transfer_utils::basename;
///
/// assert_eq!(basename("/a/b.txt"), "b.txt");
/// assert_eq!(basename("/a/b/"), "");
/// assert_eq!(basename("plain"), "plain");
/// ```
pub fn basename<'a>(path: impl Into<Option<&'a str>>) -> String {
    let path = path.into().unwrap_or("");
    match path.rfind('/') {
        Some(i) => path[i + 1..].to_string(),
        None => path.to_string(),
    }
}

/// Everything before the last `/`, or the empty string if there is none
///
/// The trailing slash is not included and the root is not special-cased, so
/// `dirname("/a")` is `""`.
///
/// # Examples
/// ```
/// use transfer_utils::dirname;
///
/// assert_eq!(dirname("/a/b"), "/a");
/// assert_eq!(dirname("/a/b/"), "/a/b");
/// assert_eq!(dirname("plain"), "");
/// ```
pub fn dirname<'a>(path: impl Into<Option<&'a str>>) -> String {
    let path = path.into().unwrap_or("");
    match path.rfind('/') {
        Some(i) => path[..i].to_string(),
        None => String::new(),
    }
}

/// Join two relative path pieces with exactly one `/` between them
///
/// Empty pieces are dropped rather than producing a leading or doubled
/// slash.
///
/// # Examples
/// ```
/// use transfer_utils::join_path;
///
/// assert_eq!(join_path("sub/", "/f.txt"), "sub/f.txt");
/// assert_eq!(join_path("", "f.txt"), "f.txt");
/// ```
pub fn join_path(base: &str, child: &str) -> String {
    let base_trimmed = base.trim_end_matches('/');
    let child_trimmed = child.trim_start_matches('/');

    if base_trimmed.is_empty() {
        child_trimmed.to_string()
    } else if child_trimmed.is_empty() {
        base_trimmed.to_string()
    } else {
        format!("{}/{}", base_trimmed, child_trimmed)
    }
}

/// Normalize a path string the way a URI path is normalized
///
/// This function:
/// - Collapses repeated slashes
/// - Drops `.` segments
/// - Resolves `..` against the preceding segment (above the root they vanish,
///   at the front of a relative path they are kept)
/// - Keeps a trailing slash when the input named a directory
/// - Rewrites a leading `/~` to `~` so home shorthand survives
///
/// Fails with [`UtilError::PathParse`] for strings that cannot be a URI path:
/// characters outside the URI path alphabet, malformed `%` escapes, or a
/// relative path whose first segment contains `:` (it would read as a scheme).
///
/// # Examples
/// ```
/// use transfer_utils::normalize_path;
///
/// assert_eq!(normalize_path("/a/./b/../c").unwrap(), "/a/c");
/// assert_eq!(normalize_path("/~/x").unwrap(), "~/x");
/// assert!(normalize_path("c:stuff").is_err());
/// ```
pub fn normalize_path(path: &str) -> Result<String> {
    validate_uri_path(path)?;

    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    let mut trailing = path.ends_with('/');

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        trailing = path.ends_with('/');
        match segment {
            "." => trailing = true,
            ".." => {
                trailing = true;
                match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ if absolute => {}
                    _ => segments.push(".."),
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut normalized = String::new();
    if absolute {
        normalized.push('/');
    }
    normalized.push_str(&segments.join("/"));
    if trailing && !segments.is_empty() {
        normalized.push('/');
    }

    if normalized.starts_with("/~") {
        normalized.remove(0);
    }

    Ok(normalized)
}

fn validate_uri_path(path: &str) -> Result<()> {
    let reject = |reason: String| {
        tracing::trace!(path, %reason, "path is not a uri path");
        Err(UtilError::PathParse {
            path: path.to_string(),
            reason,
        })
    };

    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
                if !escaped {
                    return reject(format!("malformed percent escape at byte {}", i));
                }
                i += 3;
                continue;
            }
            b if is_path_char(b) => {}
            _ => {
                let c = path[i..].chars().next().unwrap_or_default();
                return reject(format!("illegal character {:?}", c));
            }
        }
        i += 1;
    }

    if !path.starts_with('/') {
        let first = path.split('/').next().unwrap_or("");
        if first.contains(':') {
            return reject("relative path with ':' in first segment".to_string());
        }
    }

    Ok(())
}

/// RFC 3986 `pchar` (minus `%`, handled separately) plus `/`
fn is_path_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'@'
                | b'/'
        )
}
