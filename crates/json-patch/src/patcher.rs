//! Patch orchestration: parse, guard, apply.

use json_pointer::PointerError;
use serde_json::Value;

use crate::error::PatchError;
use crate::guard::ProtectedPaths;
use crate::op::Operation;
use crate::parse::{parse_operations, parse_operations_lazy};

/// When the raw records of a patch are shape-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Check every record before anything is applied.
    #[default]
    Eager,
    /// Check each record right before it is applied.
    Lazy,
}

/// Applies patch sequences to documents.
///
/// A `Patcher` owns a protected-path policy and a parse mode. Applying a
/// patch folds a working copy of the document through the operations; the
/// caller's document is never mutated, and a failing patch leaves nothing
/// behind.
///
/// # Example
///
/// ```
/// use json_patch::Patcher;
/// use serde_json::json;
///
/// let patcher = Patcher::new().with_protected_path("/id").unwrap();
/// let doc = json!({"id": 7, "name": "original"});
///
/// let patched = patcher
///     .patch(&doc, &[json!({"op": "replace", "path": "/name", "value": "renamed"})])
///     .unwrap();
/// assert_eq!(patched, json!({"id": 7, "name": "renamed"}));
///
/// assert!(patcher
///     .patch(&doc, &[json!({"op": "remove", "path": "/id"})])
///     .is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Patcher {
    protected: ProtectedPaths,
    parse_mode: ParseMode,
}

impl Patcher {
    /// A patcher with no protected paths, parsing eagerly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a protected path.
    pub fn add_protected_path(&mut self, path: &str) -> Result<(), PointerError> {
        self.protected.add(path)
    }

    /// Register several protected paths.
    pub fn add_protected_paths<I, S>(&mut self, paths: I) -> Result<(), PointerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.protected.add(path.as_ref())?;
        }
        Ok(())
    }

    /// Builder form of [`Patcher::add_protected_path`].
    pub fn with_protected_path(mut self, path: &str) -> Result<Self, PointerError> {
        self.protected.add(path)?;
        Ok(self)
    }

    /// Builder form of [`Patcher::add_protected_paths`].
    pub fn with_protected_paths<I, S>(mut self, paths: I) -> Result<Self, PointerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_protected_paths(paths)?;
        Ok(self)
    }

    /// Choose when record shapes are checked.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// The registered protected paths, in registration order.
    pub fn protected_paths(&self) -> &[String] {
        self.protected.paths()
    }

    /// Apply a patch to `document`, returning the patched document.
    ///
    /// The input document is cloned once; all operations run against the
    /// clone, so any failure leaves the caller's document untouched.
    pub fn patch(&self, document: &Value, operations: &[Value]) -> Result<Value, PatchError> {
        match self.parse_mode {
            ParseMode::Eager => {
                let operations = parse_operations(operations)?;
                self.fold(document.clone(), operations.into_iter().map(Ok))
            }
            ParseMode::Lazy => self.fold(document.clone(), parse_operations_lazy(operations)),
        }
    }

    /// Apply a patch given as encoded JSON text.
    ///
    /// The text must decode to an array of operation records; anything else
    /// is malformed input, pinned at position 0 since no record sequence
    /// exists.
    pub fn patch_from_json(&self, document: &Value, patch_json: &str) -> Result<Value, PatchError> {
        let records: Vec<Value> = serde_json::from_str(patch_json)
            .map_err(|_| PatchError::MalformedPatchInput { index: 0 })?;
        self.patch(document, &records)
    }

    fn fold<I>(&self, mut document: Value, operations: I) -> Result<Value, PatchError>
    where
        I: Iterator<Item = Result<Operation, PatchError>>,
    {
        for operation in operations {
            let operation = operation?;
            self.protected.check(&operation)?;
            document = operation.apply(document)?;
        }
        Ok(document)
    }
}

/// Apply a patch with no protected paths.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"foo": "bar"});
/// let patched = json_patch::patch(
///     &doc,
///     &[json!({"op": "add", "path": "/baz", "value": "qux"})],
/// )
/// .unwrap();
/// assert_eq!(patched, json!({"foo": "bar", "baz": "qux"}));
/// ```
pub fn patch(document: &Value, operations: &[Value]) -> Result<Value, PatchError> {
    Patcher::new().patch(document, operations)
}
