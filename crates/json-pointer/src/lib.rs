//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements the string half of [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901):
//! parsing pointer strings into unescaped segments, formatting segments back
//! into pointer strings, and compiling the ancestor paths of a pointer set.
//! It never touches documents; resolving a pointer against a value is the
//! consumer's job.
//!
//! # Example
//!
//! ```
//! use json_pointer::{parse_pointer, format_pointer};
//!
//! let segments = parse_pointer("/foo/b~1r").unwrap();
//! assert_eq!(segments, vec!["foo".to_string(), "b/r".to_string()]);
//!
//! let pointer = format_pointer(&segments);
//! assert_eq!(pointer, "/foo/b~1r");
//! ```

use thiserror::Error;

pub mod ancestors;
pub use ancestors::compile_ancestor_paths;

/// Unescapes a JSON Pointer segment.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_pointer::unescape_segment;
///
/// assert_eq!(unescape_segment("a~0b"), "a~b");
/// assert_eq!(unescape_segment("c~1d"), "c/d");
/// assert_eq!(unescape_segment("no-escapes"), "no-escapes");
/// ```
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~1 must be replaced before ~0, so that "~01"
    // decodes to "~1" rather than "/".
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer segment.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_pointer::escape_segment;
///
/// assert_eq!(escape_segment("a~b"), "a~0b");
/// assert_eq!(escape_segment("c/d"), "c~1d");
/// assert_eq!(escape_segment("no-escapes"), "no-escapes");
/// ```
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('/') && !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~ must be escaped before /
    segment.replace('~', "~0").replace('/', "~1")
}

/// Check whether a pointer string addresses the whole document.
///
/// Both the empty string and `"/"` are accepted root spellings.
///
/// # Example
///
/// ```
/// use json_pointer::is_root;
///
/// assert!(is_root(""));
/// assert!(is_root("/"));
/// assert!(!is_root("/foo"));
/// ```
pub fn is_root(pointer: &str) -> bool {
    pointer.is_empty() || pointer == "/"
}

/// Validate the format of a pointer string without parsing it.
///
/// Root pointers (see [`is_root`]) are always valid. Any other pointer must
/// start with `/`, contain no whitespace, and contain no empty segment
/// (`//`). A trailing `/` is allowed and names an empty *final* segment.
///
/// # Example
///
/// ```
/// use json_pointer::{validate_pointer, PointerError};
///
/// assert!(validate_pointer("/foo/bar").is_ok());
/// assert_eq!(validate_pointer("foo"), Err(PointerError::MissingLeadingSlash));
/// assert_eq!(validate_pointer("/fo o"), Err(PointerError::ContainsWhitespace));
/// assert_eq!(validate_pointer("/foo//bar"), Err(PointerError::EmptySegment));
/// ```
pub fn validate_pointer(pointer: &str) -> Result<(), PointerError> {
    if is_root(pointer) {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::MissingLeadingSlash);
    }
    if pointer.chars().any(char::is_whitespace) {
        return Err(PointerError::ContainsWhitespace);
    }
    if pointer.contains("//") {
        return Err(PointerError::EmptySegment);
    }
    Ok(())
}

/// Parse a JSON Pointer string into unescaped segments.
///
/// Root pointers parse to an empty segment sequence; everything else is
/// validated (see [`validate_pointer`]), split on `/`, and unescaped.
///
/// # Example
///
/// ```
/// use json_pointer::parse_pointer;
///
/// assert_eq!(parse_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_pointer("/").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_pointer("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_pointer("foo/bar").is_err());
/// ```
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    if is_root(pointer) {
        return Ok(Vec::new());
    }
    validate_pointer(pointer)?;
    Ok(pointer[1..].split('/').map(unescape_segment).collect())
}

/// Format segments into a JSON Pointer string.
///
/// Each segment is escaped; the root (no segments) formats as the empty
/// string, the canonical RFC 6901 spelling.
///
/// # Example
///
/// ```
/// use json_pointer::format_pointer;
///
/// assert_eq!(format_pointer(&[]), "");
/// assert_eq!(format_pointer(&["foo".to_string()]), "/foo");
/// assert_eq!(
///     format_pointer(&["a~b".to_string(), "c/d".to_string()]),
///     "/a~0b/c~1d"
/// );
/// ```
pub fn format_pointer(segments: &[String]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(&escape_segment(segment));
    }
    out
}

/// Error returned when a pointer string violates RFC 6901 syntax.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PointerError {
    #[error("the path must start with a forward slash")]
    MissingLeadingSlash,
    #[error("the path must not contain any whitespace")]
    ContainsWhitespace,
    #[error("the path must not contain any empty segments")]
    EmptySegment,
}
