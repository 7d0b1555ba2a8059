//! Ancestor-path compilation for pointer sets.

use indexmap::IndexSet;

use crate::{escape_segment, parse_pointer, PointerError};

/// Compile every strict-ancestor pointer of the given pointer strings.
///
/// For each input, every proper prefix split at a segment boundary is
/// produced, re-escaped so the output is comparable against other escaped
/// pointers. The root (spelled `"/"`) is an ancestor of every non-root
/// pointer and is included whenever at least one input is given. The result
/// is deduplicated and keeps first-seen order.
///
/// # Errors
///
/// Fails with the first [`PointerError`] if any input is not a valid
/// pointer.
///
/// # Example
///
/// ```
/// use json_pointer::compile_ancestor_paths;
///
/// let ancestors = compile_ancestor_paths(["/a/b/c", "/a/d"]).unwrap();
/// assert_eq!(ancestors, vec!["/", "/a", "/a/b"]);
/// ```
pub fn compile_ancestor_paths<I, S>(paths: I) -> Result<Vec<String>, PointerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<S> = paths.into_iter().collect();

    let mut ancestors: IndexSet<String> = IndexSet::new();
    if !paths.is_empty() {
        ancestors.insert("/".to_string());
    }

    for path in &paths {
        let mut segments = parse_pointer(path.as_ref())?;
        // Only strict ancestors: the path itself is not its own ancestor.
        segments.pop();

        let mut prefix = String::new();
        for segment in &segments {
            prefix.push('/');
            prefix.push_str(&escape_segment(segment));
            ancestors.insert(prefix.clone());
        }
    }

    Ok(ancestors.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_paths() {
        let ancestors = compile_ancestor_paths(Vec::<&str>::new()).unwrap();
        assert!(ancestors.is_empty());
    }

    #[test]
    fn test_root_only_input() {
        assert_eq!(compile_ancestor_paths(["/"]).unwrap(), vec!["/"]);
        assert_eq!(compile_ancestor_paths([""]).unwrap(), vec!["/"]);
    }

    #[test]
    fn test_top_level_path() {
        // A single-segment pointer has only the root as an ancestor.
        assert_eq!(compile_ancestor_paths(["/a"]).unwrap(), vec!["/"]);
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            compile_ancestor_paths(["/a/b/c"]).unwrap(),
            vec!["/", "/a", "/a/b"]
        );
    }

    #[test]
    fn test_deduplicates_across_inputs() {
        assert_eq!(
            compile_ancestor_paths(["/a/b/c", "/a/b/d", "/e/f"]).unwrap(),
            vec!["/", "/a", "/a/b", "/e"]
        );
    }

    #[test]
    fn test_reescapes_segments() {
        assert_eq!(
            compile_ancestor_paths(["/a/a~0a/a~0b~1c/1"]).unwrap(),
            vec!["/", "/a", "/a/a~0a", "/a/a~0a/a~0b~1c"]
        );
    }

    #[test]
    fn test_invalid_input_fails() {
        assert_eq!(
            compile_ancestor_paths(["/a", "b/c"]),
            Err(PointerError::MissingLeadingSlash)
        );
    }
}
