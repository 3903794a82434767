//! Strict URI parsing
//!
//! Transfer endpoints are always addressed by absolute URIs; a string
//! without a scheme is rejected instead of being guessed at.

use crate::error::{Result, UtilError};
use crate::path::SLASH_RUN;
use url::{ParseError, Url};

/// Parse and normalize an absolute URI
///
/// Dot segments in the path are resolved during parsing and runs of
/// slashes in the path collapse to one. Fails with
/// [`UtilError::MissingScheme`] when no scheme is present and with
/// [`UtilError::UriParse`] (carrying the parser's reason) for any other
/// syntax error.
///
/// # Examples
/// ```
/// use transfer_utils::make_uri;
///
/// let uri = make_uri("http://example.com/a/../b").unwrap();
/// assert_eq!(uri.path(), "/b");
/// assert!(make_uri("example.com/path").is_err());
/// ```
pub fn make_uri(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        tracing::trace!(uri = raw, error = %e, "uri rejected");
        match e {
            ParseError::RelativeUrlWithoutBase => UtilError::MissingScheme {
                uri: raw.to_string(),
            },
            other => UtilError::UriParse {
                uri: raw.to_string(),
                reason: other.to_string(),
            },
        }
    })?;

    if !url.cannot_be_a_base() && url.path().contains("//") {
        let collapsed = SLASH_RUN.replace_all(url.path(), "/").into_owned();
        url.set_path(&collapsed);
    }

    Ok(url)
}

/// Normalized path component of `raw`
pub fn uri_path(raw: &str) -> Result<String> {
    make_uri(raw).map(|url| url.path().to_string())
}
