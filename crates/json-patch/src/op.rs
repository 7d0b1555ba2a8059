//! The six patch operations and their application semantics.

use json_pointer::{is_root, parse_pointer};
use serde_json::{json, Map, Value};

use crate::equal::deep_equal;
use crate::error::PatchError;

/// One parsed patch operation.
///
/// `path` and `from` are kept as the raw pointer strings from the record:
/// the protected-path guard matches them textually, and they are parsed
/// into segments only when the operation is applied. `index` is the
/// operation's 0-based position in its patch, carried for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Insert `value` at `path`, overwriting an existing object member.
    Add {
        index: usize,
        path: String,
        value: Value,
    },
    /// Delete the value at `path`.
    Remove { index: usize, path: String },
    /// Overwrite the existing value at `path`.
    Replace {
        index: usize,
        path: String,
        value: Value,
    },
    /// Remove the value at `from`, then add it at `path`.
    Move {
        index: usize,
        path: String,
        from: String,
    },
    /// Add a structural copy of the value at `from` at `path`.
    Copy {
        index: usize,
        path: String,
        from: String,
    },
    /// Assert that the value at `path` deep-equals `value`.
    Test {
        index: usize,
        path: String,
        value: Value,
    },
}

impl Operation {
    /// The operation's 0-based position in its patch.
    pub fn index(&self) -> usize {
        match self {
            Operation::Add { index, .. }
            | Operation::Remove { index, .. }
            | Operation::Replace { index, .. }
            | Operation::Move { index, .. }
            | Operation::Copy { index, .. }
            | Operation::Test { index, .. } => *index,
        }
    }

    /// The target path, exactly as spelled in the raw record.
    pub fn path(&self) -> &str {
        match self {
            Operation::Add { path, .. }
            | Operation::Remove { path, .. }
            | Operation::Replace { path, .. }
            | Operation::Move { path, .. }
            | Operation::Copy { path, .. }
            | Operation::Test { path, .. } => path,
        }
    }

    /// The source path of a `move` or `copy`.
    pub fn from(&self) -> Option<&str> {
        match self {
            Operation::Move { from, .. } | Operation::Copy { from, .. } => Some(from),
            _ => None,
        }
    }

    /// The RFC 6902 name of this operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Replace { .. } => "replace",
            Operation::Move { .. } => "move",
            Operation::Copy { .. } => "copy",
            Operation::Test { .. } => "test",
        }
    }

    /// Whether this operation only reads the document.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Operation::Test { .. })
    }

    /// Apply this operation to a document, producing the next document.
    ///
    /// The document is consumed; on failure it is dropped, so a caller that
    /// keeps its own copy observes no change.
    pub fn apply(&self, document: Value) -> Result<Value, PatchError> {
        match self {
            Operation::Add { index, path, value } => {
                apply_add(*index, path, value.clone(), document)
            }
            Operation::Remove { index, path } => apply_remove(*index, path, document),
            Operation::Replace { index, path, value } => {
                apply_replace(*index, path, value.clone(), document)
            }
            Operation::Move { index, path, from } => apply_move(*index, path, from, document),
            Operation::Copy { index, path, from } => apply_copy(*index, path, from, document),
            Operation::Test { index, path, value } => apply_test(*index, path, value, document),
        }
    }

    /// Re-encode the operation into its raw record form.
    pub fn to_value(&self) -> Value {
        match self {
            Operation::Add { path, value, .. } => json!({
                "op": "add",
                "path": path,
                "value": value,
            }),
            Operation::Remove { path, .. } => json!({
                "op": "remove",
                "path": path,
            }),
            Operation::Replace { path, value, .. } => json!({
                "op": "replace",
                "path": path,
                "value": value,
            }),
            Operation::Move { path, from, .. } => json!({
                "op": "move",
                "path": path,
                "from": from,
            }),
            Operation::Copy { path, from, .. } => json!({
                "op": "copy",
                "path": path,
                "from": from,
            }),
            Operation::Test { path, value, .. } => json!({
                "op": "test",
                "path": path,
                "value": value,
            }),
        }
    }
}

// ── Path resolution ────────────────────────────────────────────────────────

fn parse_segments(index: usize, pointer: &str) -> Result<Vec<String>, PatchError> {
    parse_pointer(pointer).map_err(|source| PatchError::InvalidPathSyntax { index, source })
}

/// Parse a segment as a list index: ASCII digits only, no sign, no append
/// token. Leading zeros are tolerated.
fn parse_list_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Walk `segments` down from `document` and hand back the addressed value.
///
/// A container that lacks the named member is `PathNotFound`; descending
/// into a scalar or null is `TypeMismatch`.
fn resolve_mut<'a>(
    document: &'a mut Value,
    segments: &[String],
    index: usize,
) -> Result<&'a mut Value, PatchError> {
    let mut current = document;
    for segment in segments {
        current = match current {
            Value::Object(map) => map
                .get_mut(segment)
                .ok_or(PatchError::PathNotFound { index })?,
            Value::Array(list) => {
                let i = parse_list_index(segment).ok_or(PatchError::PathNotFound { index })?;
                list.get_mut(i).ok_or(PatchError::PathNotFound { index })?
            }
            _ => return Err(PatchError::TypeMismatch { index }),
        };
    }
    Ok(current)
}

// ── Individual operation applicators ───────────────────────────────────────

fn apply_add(
    index: usize,
    path: &str,
    value: Value,
    mut document: Value,
) -> Result<Value, PatchError> {
    if is_root(path) {
        // Whole-document replacement; only an object may stand in for the
        // root.
        return match value {
            Value::Object(_) => Ok(value),
            _ => Err(PatchError::InvalidOperationTarget { index }),
        };
    }

    let segments = parse_segments(index, path)?;
    let (parent_path, key) = segments.split_at(segments.len() - 1);
    let key = &key[0];
    let parent = resolve_mut(&mut document, parent_path, index)?;
    insert_into(parent, key, value, index)?;
    Ok(document)
}

/// Add's last-segment rules.
fn insert_into(
    parent: &mut Value,
    segment: &str,
    value: Value,
    index: usize,
) -> Result<(), PatchError> {
    if segment == "-" {
        // The append token only ever means "past the end of a list".
        return match parent {
            Value::Array(list) => {
                list.push(value);
                Ok(())
            }
            _ => Err(PatchError::TypeMismatch { index }),
        };
    }

    match parent {
        Value::Object(map) => {
            map.insert(segment.to_string(), value);
            Ok(())
        }
        Value::Array(list) => match parse_list_index(segment) {
            Some(i) if i <= list.len() => {
                list.insert(i, value);
                Ok(())
            }
            Some(_) => Err(PatchError::IndexOutOfBounds { index }),
            // An empty list is still ambiguous; a keyed insert settles it
            // as an object.
            None if list.is_empty() => {
                let mut map = Map::new();
                map.insert(segment.to_string(), value);
                *parent = Value::Object(map);
                Ok(())
            }
            None => Err(PatchError::TypeMismatch { index }),
        },
        _ => Err(PatchError::TypeMismatch { index }),
    }
}

fn apply_remove(index: usize, path: &str, mut document: Value) -> Result<Value, PatchError> {
    if is_root(path) {
        return Err(PatchError::InvalidOperationTarget { index });
    }

    let segments = parse_segments(index, path)?;
    let (parent_path, key) = segments.split_at(segments.len() - 1);
    let parent = resolve_mut(&mut document, parent_path, index)?;
    remove_from(parent, &key[0], index)?;
    Ok(document)
}

/// Remove `segment` from a container, handing back the removed value.
fn remove_from(parent: &mut Value, segment: &str, index: usize) -> Result<Value, PatchError> {
    match parent {
        Value::Object(map) => map
            .shift_remove(segment)
            .ok_or(PatchError::PathNotFound { index }),
        Value::Array(list) => match parse_list_index(segment) {
            // Vec::remove shifts the tail left, which is exactly the
            // contiguous re-index the list needs.
            Some(i) if i < list.len() => Ok(list.remove(i)),
            _ => Err(PatchError::PathNotFound { index }),
        },
        _ => Err(PatchError::TypeMismatch { index }),
    }
}

fn apply_replace(
    index: usize,
    path: &str,
    value: Value,
    mut document: Value,
) -> Result<Value, PatchError> {
    if is_root(path) {
        return Err(PatchError::InvalidOperationTarget { index });
    }

    let segments = parse_segments(index, path)?;
    let target = resolve_mut(&mut document, &segments, index)?;
    *target = value;
    Ok(document)
}

fn apply_move(
    index: usize,
    path: &str,
    from: &str,
    mut document: Value,
) -> Result<Value, PatchError> {
    if is_root(path) || is_root(from) {
        return Err(PatchError::InvalidOperationTarget { index });
    }

    let from_segments = parse_segments(index, from)?;
    let (parent_path, key) = from_segments.split_at(from_segments.len() - 1);
    let parent = resolve_mut(&mut document, parent_path, index)?;
    let value = remove_from(parent, &key[0], index)?;

    // Target indices are resolved against the document after the removal.
    apply_add(index, path, value, document)
}

fn apply_copy(
    index: usize,
    path: &str,
    from: &str,
    mut document: Value,
) -> Result<Value, PatchError> {
    if is_root(path) || is_root(from) {
        return Err(PatchError::InvalidOperationTarget { index });
    }

    let from_segments = parse_segments(index, from)?;
    let value = resolve_mut(&mut document, &from_segments, index)?.clone();
    apply_add(index, path, value, document)
}

fn apply_test(
    index: usize,
    path: &str,
    expected: &Value,
    mut document: Value,
) -> Result<Value, PatchError> {
    let segments = parse_segments(index, path)?;
    let actual = resolve_mut(&mut document, &segments, index)?;
    if !deep_equal(expected, actual) {
        return Err(PatchError::TestFailed { index });
    }
    Ok(document)
}
