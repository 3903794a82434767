//! # transfer-utils
//!
//! String, path, URI and local-listing helpers for file-transfer tooling.
//!
//! Everything here is a free function over its inputs. Only the listing
//! functions touch the filesystem, and only to read it.
//!
//! ## Features
//!
//! - **Text**: identifier-style normalization, CSV splitting, joining, word wrap
//! - **Paths**: component splitting, basename/dirname, URI-style normalization
//! - **Listing**: breadth-first walk of a local tree into a [`TransferList`]
//! - **URIs**: strict parsing that rejects scheme-less strings
//! - **Bytes**: printf-style per-byte formatting
//!
//! ## Examples
//!
//! ### Text
//!
//! ```rust
//! use transfer_utils::{join_with, normalize, split_csv};
//!
//! assert_eq!(normalize("Hello  World!!"), "hello_world");
//! assert_eq!(split_csv("GridFTP, HTTP"), vec!["gridftp", "http"]);
//! assert_eq!(join_with(",", [Some("a"), None, Some("b")]), "a,b");
//! ```
//!
//! ### Paths and URIs
//!
//! ```rust
//! use transfer_utils::{make_uri, normalize_path, split_path};
//!
//! assert_eq!(split_path("/a/b/"), vec!["/", "a", "b", ""]);
//! assert_eq!(normalize_path("/~/data/../x").unwrap(), "~/x");
//!
//! let uri = make_uri("ftp://host/a/../b").unwrap();
//! assert_eq!(uri.path(), "/b");
//! assert!(make_uri("host/path").is_err());
//! ```
//!
//! ### Listing a tree
//!
//! ```rust
//! use transfer_utils::list;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
//! std::fs::write(temp_dir.path().join("sub/f.txt"), b"0123456789").unwrap();
//!
//! let listing = list(temp_dir.path()).unwrap();
//! let paths: Vec<&str> = listing.iter().map(|e| e.path()).collect();
//! assert_eq!(paths, vec!["sub", "sub/f.txt"]);
//! assert_eq!(listing.total_size(), 10);
//! ```
//!
//! ## Logging
//!
//! Listing and parse failures are reported through [`tracing`] events. The
//! crate never installs a subscriber.

mod bytes;
mod error;
mod listing;
mod path;
mod text;
mod uri;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use bytes::{format_bytes, hex_string, ByteFormat};
pub use error::{Result, UtilError};
pub use listing::{list, size, TransferEntry, TransferList};
pub use path::{
    basename, dirname, is_absolute, is_directory, join_path, normalize_path, split_path,
};
pub use text::{join, join_csv, join_with, normalize, split_csv, wrap};
pub use uri::{make_uri, uri_path};

// Re-exported so callers can name the parsed URI type
pub use url::Url;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
