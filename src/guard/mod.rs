//! Guard nodes: the shared node contract and the built-in node kinds.

pub mod compose;
pub mod leaf;
pub mod object;

pub use compose::ComposeGuard;
pub use leaf::{BoolGuard, NullGuard, NumGuard, StrGuard, UndefGuard};
pub use object::ObjectGuard;

use serde_json::Value;

use crate::error::ErrorPath;
use crate::modifier::Modifier;

/// One node of a shape schema: decides whether a candidate value matches.
///
/// The candidate arrives as `Option<&Value>`. `None` is an absent value
/// (a missing object key), which is distinct from an explicit
/// `Some(Value::Null)`.
///
/// Implementations outside this crate slot in anywhere a built-in node
/// does, as object fields and as union alternatives alike. The contract:
///
/// - [`test`](Self::test) must be a pure function of the candidate and
///   must not touch shared state beyond the supplied `path`.
/// - A leaf with no named sub-structure never writes to `path`; when it
///   fails, the enclosing object guard records the field name. A guard
///   that checks further named structure of its own records those inner
///   names itself, innermost first.
/// - Built trees are shared across threads, hence `Send + Sync`.
pub trait Guard: Send + Sync {
    /// The access marker attached to this node.
    fn modifier(&self) -> Modifier;

    /// Replace the access marker. Composite nodes forward the new marker
    /// to children that share it (see [`ComposeGuard`]).
    fn set_modifier(&mut self, modifier: Modifier);

    /// Check a candidate, recording failing field names into `path` as
    /// described above. Returns whether the candidate matches.
    fn test(&self, value: Option<&Value>, path: &mut ErrorPath) -> bool;

    /// Short introspection tag, `"str"`, `"obj"` and so on.
    fn kind(&self) -> &'static str {
        "custom"
    }

    /// This node with `modifier` applied, builder-style.
    fn with_modifier(mut self, modifier: Modifier) -> Self
    where
        Self: Sized,
    {
        self.set_modifier(modifier);
        self
    }

    /// Mark this node optional (`?`).
    fn opt(self) -> Self
    where
        Self: Sized,
    {
        self.with_modifier(Modifier::Optional)
    }

    /// Mark this node readonly (`r`).
    fn ro(self) -> Self
    where
        Self: Sized,
    {
        self.with_modifier(Modifier::Readonly)
    }

    /// Mark this node readonly and optional (`r?`).
    fn ro_opt(self) -> Self
    where
        Self: Sized,
    {
        self.with_modifier(Modifier::ReadonlyOptional)
    }
}
