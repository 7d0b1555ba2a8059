use json_pointer::PointerError;
use thiserror::Error;

/// Error produced while parsing or applying a patch.
///
/// Every variant names the 0-based position of the operation that failed;
/// any of these aborts the whole patch call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// The entry at `index` is not an operation record, or the payload as a
    /// whole could not be decoded into a record sequence.
    #[error("operation {index} is not a valid operation record")]
    MalformedPatchInput { index: usize },

    /// A required record field is absent.
    #[error("operation {index} is missing the required \"{field}\" field")]
    MissingField { index: usize, field: &'static str },

    /// The record's `op` is not one of the six RFC 6902 operations.
    #[error("operation {index} is not a supported operation")]
    UnsupportedOperation { index: usize },

    /// The record's `path` or `from` violates pointer syntax.
    #[error("operation {index} has an invalid path: {source}")]
    InvalidPathSyntax {
        index: usize,
        #[source]
        source: PointerError,
    },

    /// The operation may not be applied to the document root.
    #[error("operation {index} is not a valid operation against the document root")]
    InvalidOperationTarget { index: usize },

    /// The addressed member does not exist.
    #[error("the path of operation {index} does not exist")]
    PathNotFound { index: usize },

    /// The path descends into, or applies the operation onto, a value of
    /// the wrong kind.
    #[error("the path of operation {index} targets a value of an incompatible type")]
    TypeMismatch { index: usize },

    /// A list insertion index lies past the end of the list.
    #[error("operation {index} targets a list index that is out of bounds")]
    IndexOutOfBounds { index: usize },

    /// A `test` operation's expected value did not match the document.
    #[error("the expected value of operation {index} does not match the document")]
    TestFailed { index: usize },

    /// The operation touches a protected path.
    #[error("operation {index} targets a protected path")]
    ProtectedPath { index: usize },
}

impl PatchError {
    /// The 0-based position of the operation this error belongs to.
    pub fn index(&self) -> usize {
        match self {
            PatchError::MalformedPatchInput { index }
            | PatchError::MissingField { index, .. }
            | PatchError::UnsupportedOperation { index }
            | PatchError::InvalidPathSyntax { index, .. }
            | PatchError::InvalidOperationTarget { index }
            | PatchError::PathNotFound { index }
            | PatchError::TypeMismatch { index }
            | PatchError::IndexOutOfBounds { index }
            | PatchError::TestFailed { index }
            | PatchError::ProtectedPath { index } => *index,
        }
    }
}
