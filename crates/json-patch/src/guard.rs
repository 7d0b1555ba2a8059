//! Protected-path policy: compilation and per-operation enforcement.

use indexmap::IndexSet;
use json_pointer::{compile_ancestor_paths, validate_pointer, PointerError};

use crate::error::PatchError;
use crate::op::Operation;

/// A compiled set of protected pointers.
///
/// A mutating operation is blocked when its target equals a protected
/// pointer, lies underneath one, or addresses one of the containers above
/// one. `test` operations are exempt; `move` is checked on both of its
/// ends, `copy` only on its target.
#[derive(Debug, Clone, Default)]
pub struct ProtectedPaths {
    paths: Vec<String>,
    ancestors: IndexSet<String>,
}

impl ProtectedPaths {
    /// An empty policy; everything is allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a policy from pointer strings.
    ///
    /// # Example
    ///
    /// ```
    /// use json_patch::ProtectedPaths;
    ///
    /// let protected = ProtectedPaths::compile(["/users/0/id"]).unwrap();
    /// assert_eq!(protected.paths(), ["/users/0/id"]);
    /// assert!(ProtectedPaths::compile(["not a pointer"]).is_err());
    /// ```
    pub fn compile<I, S>(paths: I) -> Result<Self, PointerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut protected = Self::new();
        for path in paths {
            protected.add(path.as_ref())?;
        }
        Ok(protected)
    }

    /// Register one more protected pointer.
    ///
    /// The pointer must be syntactically valid; duplicates are kept once.
    pub fn add(&mut self, path: &str) -> Result<(), PointerError> {
        validate_pointer(path)?;
        if !self.paths.iter().any(|existing| existing == path) {
            self.paths.push(path.to_string());
        }
        self.ancestors = compile_ancestor_paths(&self.paths)?.into_iter().collect();
        Ok(())
    }

    /// The registered pointers, in registration order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check one operation against the policy.
    pub fn check(&self, operation: &Operation) -> Result<(), PatchError> {
        if self.paths.is_empty() || operation.is_read_only() {
            return Ok(());
        }
        self.check_target(operation.index(), operation.path())?;
        if let Operation::Move { from, .. } = operation {
            self.check_target(operation.index(), from)?;
        }
        Ok(())
    }

    fn check_target(&self, index: usize, target: &str) -> Result<(), PatchError> {
        // Both root spellings address the same location; the ancestor set
        // spells it "/".
        let target = if target.is_empty() { "/" } else { target };

        if self.ancestors.contains(target) {
            return Err(PatchError::ProtectedPath { index });
        }
        for protected in &self.paths {
            if is_same_or_descendant(target, protected) {
                return Err(PatchError::ProtectedPath { index });
            }
        }
        Ok(())
    }
}

/// Boundary-aware prefix test: `/a/b` covers `/a/b` and `/a/b/c`, but not
/// the sibling `/a/b-2`.
fn is_same_or_descendant(target: &str, protected: &str) -> bool {
    if target == protected {
        return true;
    }
    target.len() > protected.len()
        && target.starts_with(protected)
        && target.as_bytes()[protected.len()] == b'/'
}
