//! Declarative shape guards for JSON values.
//!
//! Describe the expected shape of a [`serde_json::Value`] with a small
//! combinator DSL, then check candidates against it:
//!
//! ```
//! use json_guard::{create, Guard};
//! use serde_json::json;
//!
//! let guard = create(|t| {
//!     t.object().field(
//!         "attributes",
//!         t.object()
//!             .field("text", t.str())
//!             .field("num", t.num().opt())
//!             .field("bool", t.bool().ro())
//!             .field("textOrNumber", t.compose(t.str(), t.num())),
//!     )
//! });
//!
//! assert!(guard.is(&json!({
//!     "attributes": { "text": "text", "bool": true, "textOrNumber": 1 }
//! })));
//!
//! let err = guard
//!     .assert(&json!({
//!         "attributes": { "bool": true, "textOrNumber": 1 }
//!     }))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "attributes.text");
//! ```
//!
//! [`create`] returns a handle with three operations: [`build`] pins a
//! statically typed literal to the schema's typed mirror and passes it
//! through untouched, [`is`] answers yes or no, and [`assert`] reports
//! the first failing field as a dot-joined path error.
//!
//! Field markers mirror the schema tokens: unmarked fields are required,
//! `?` marks optional, `r` readonly and `r?` both. Custom leaf checks
//! implement [`Guard`] and slot in next to the built-in nodes.
//!
//! [`build`]: SchemaGuard::build
//! [`is`]: SchemaGuard::is
//! [`assert`]: SchemaGuard::assert

pub mod error;
pub mod factory;
pub mod guard;
pub mod modifier;

// Re-export the everyday surface at the crate root.
pub use error::{ErrorPath, GuardError};
pub use factory::{create, GuardBuilder, SchemaGuard};
pub use guard::{
    BoolGuard, ComposeGuard, Guard, NullGuard, NumGuard, ObjectGuard, StrGuard, UndefGuard,
};
pub use modifier::Modifier;
