//! Schema construction: the helper table, [`create`] and the check handle.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorPath, GuardError};
use crate::guard::{
    BoolGuard, ComposeGuard, Guard, NullGuard, NumGuard, ObjectGuard, StrGuard, UndefGuard,
};

/// Table of node constructors handed to the builder closure of [`create`].
///
/// Every helper returns its concrete node type, so the fluent marker
/// methods of [`Guard`] stay available, as in `t.num().opt()`. Checks not
/// covered here need no registration: the closure can construct any
/// [`Guard`] implementor directly, and downstream code can graft its own
/// helpers onto this table with an extension trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardBuilder;

impl GuardBuilder {
    pub fn new() -> Self {
        Self
    }

    /// String leaf.
    pub fn str(&self) -> StrGuard {
        StrGuard::new()
    }

    /// Number leaf.
    pub fn num(&self) -> NumGuard {
        NumGuard::new()
    }

    /// Boolean leaf.
    pub fn bool(&self) -> BoolGuard {
        BoolGuard::new()
    }

    /// Explicit-null leaf.
    pub fn nil(&self) -> NullGuard {
        NullGuard::new()
    }

    /// Absent-value leaf.
    pub fn undef(&self) -> UndefGuard {
        UndefGuard::new()
    }

    /// Empty record guard. Chain [`ObjectGuard::field`] to declare fields.
    pub fn object(&self) -> ObjectGuard {
        ObjectGuard::new()
    }

    /// Union of two alternatives; `first` is tried first.
    pub fn compose(
        &self,
        first: impl Guard + 'static,
        second: impl Guard + 'static,
    ) -> ComposeGuard {
        ComposeGuard::new(first, second)
    }
}

/// Build a guard tree once and wrap it in a [`SchemaGuard`] handle.
///
/// The builder closure is invoked exactly once with the helper table; its
/// return value becomes the root of the tree, owned by the handle.
///
/// # Example
///
/// ```
/// use json_guard::{create, Guard};
/// use serde_json::json;
///
/// let guard = create(|t| {
///     t.object().field(
///         "attributes",
///         t.object()
///             .field("text", t.str())
///             .field("num", t.num().opt()),
///     )
/// });
///
/// assert!(guard.is(&json!({ "attributes": { "text": "hi" } })));
///
/// let err = guard
///     .assert(&json!({ "attributes": { "text": 1 } }))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "attributes.text");
/// ```
pub fn create<F, G>(build: F) -> SchemaGuard
where
    F: FnOnce(&GuardBuilder) -> G,
    G: Guard + 'static,
{
    let builder = GuardBuilder::new();
    let root = build(&builder);
    SchemaGuard {
        root: Box::new(root),
    }
}

/// Handle over a constructed guard tree.
///
/// Three operations: [`build`](Self::build) passes a statically typed
/// literal through untouched, [`is`](Self::is) answers yes or no, and
/// [`assert`](Self::assert) reports the first failing field path as an
/// error. The tree is immutable behind the handle and can be shared
/// across threads, for example in an `Arc`; every check allocates its own
/// error path.
pub struct SchemaGuard {
    root: Box<dyn Guard>,
}

impl SchemaGuard {
    /// Identity passthrough for a literal whose shape the type system has
    /// already checked against the schema's typed mirror.
    ///
    /// Nothing happens at runtime; keep a `Serialize` struct next to the
    /// schema and `build` pins literals to it at compile time. Runtime
    /// checking stays with [`is`](Self::is) and [`assert`](Self::assert).
    ///
    /// ```
    /// use json_guard::create;
    /// use serde_json::json;
    ///
    /// let guard = create(|t| t.object().field("text", t.str()));
    /// let note = guard.build(json!({ "text": "hello" }));
    /// assert!(guard.is(&note));
    /// ```
    pub fn build<T: Serialize>(&self, value: T) -> T {
        value
    }

    /// Does the candidate match the schema? Never panics.
    pub fn is(&self, value: &Value) -> bool {
        let mut path = ErrorPath::new();
        self.root.test(Some(value), &mut path)
    }

    /// Check the candidate, reporting the first failing field path.
    ///
    /// # Errors
    ///
    /// [`GuardError::Field`] carries the dot-joined root-to-leaf path of
    /// the first failure, for example `attributes.text`.
    /// [`GuardError::Root`] means the candidate failed at the root with no
    /// field to name.
    pub fn assert(&self, value: &Value) -> Result<(), GuardError> {
        self.assert_as::<GuardError>(value)
    }

    /// Like [`assert`](Self::assert), surfacing the failure as any error
    /// type convertible from [`GuardError`].
    ///
    /// # Errors
    ///
    /// Returns the converted error when the candidate does not match.
    pub fn assert_as<E>(&self, value: &Value) -> Result<(), E>
    where
        E: From<GuardError>,
    {
        let mut path = ErrorPath::new();
        if self.root.test(Some(value), &mut path) {
            Ok(())
        } else {
            Err(E::from(path.into_error()))
        }
    }

    /// Introspection tag of the root node.
    pub fn kind(&self) -> &'static str {
        self.root.kind()
    }
}

impl fmt::Debug for SchemaGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaGuard")
            .field("root", &self.root.kind())
            .finish()
    }
}
