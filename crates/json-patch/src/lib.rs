//! JSON Patch (RFC 6902) with protected-path enforcement.
//!
//! A patch is an ordered sequence of `add`, `remove`, `replace`, `move`,
//! `copy`, and `test` operations, addressed by [RFC 6901 JSON
//! Pointers](https://tools.ietf.org/html/rfc6901) and applied all-or-nothing:
//! any failing operation aborts the whole patch and the caller's document is
//! left untouched. On top of the RFC semantics, a [`Patcher`] can declare
//! *protected* paths that no mutating operation may target, directly or via
//! an ancestor or descendant.
//!
//! Documents are [`serde_json::Value`]s; raw operation records are `Value`
//! objects in the RFC wire shape (`{"op": ..., "path": ..., ...}`).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"foo": "bar"});
//! let patched = json_patch::patch(
//!     &doc,
//!     &[
//!         json!({"op": "add", "path": "/baz", "value": "qux"}),
//!         json!({"op": "test", "path": "/foo", "value": "bar"}),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(patched, json!({"foo": "bar", "baz": "qux"}));
//! assert_eq!(doc, json!({"foo": "bar"}));
//! ```

pub mod equal;
pub mod error;
pub mod guard;
pub mod op;
pub mod parse;
pub mod patcher;

pub use equal::deep_equal;
pub use error::PatchError;
pub use guard::ProtectedPaths;
pub use op::Operation;
pub use parse::{parse_operation, parse_operations, parse_operations_lazy};
pub use patcher::{patch, ParseMode, Patcher};
