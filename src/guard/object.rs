//! Record guard: a fixed set of named fields.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ErrorPath;
use crate::modifier::Modifier;

use super::Guard;

/// Checks a fixed mapping of field names to child guards against an
/// object candidate.
///
/// Fields are checked in declaration order. A field whose guard carries an
/// optional marker passes when its key is absent; in every other case the
/// child guard runs against the looked-up value, absent or not. The first
/// failing field has its name recorded into the error path and fails the
/// whole object immediately; later fields are not examined.
///
/// A candidate that is not a JSON object, including `null` and an absent
/// value, fails before any field is looked at and contributes nothing to
/// the error path. Candidate keys with no declared field are ignored.
#[derive(Default)]
pub struct ObjectGuard {
    fields: IndexMap<String, Box<dyn Guard>>,
    modifier: Modifier,
}

impl ObjectGuard {
    /// Empty record guard. Declare fields with [`field`](Self::field).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a named field, builder-style. Redeclaring a name replaces
    /// the guard but keeps the original declaration position.
    pub fn field(mut self, name: impl Into<String>, guard: impl Guard + 'static) -> Self {
        self.fields.insert(name.into(), Box::new(guard));
        self
    }

    /// Look up a declared field's guard.
    pub fn get(&self, name: &str) -> Option<&dyn Guard> {
        self.fields.get(name).map(|guard| guard.as_ref())
    }
}

impl Guard for ObjectGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, path: &mut ErrorPath) -> bool {
        let candidate = match value {
            Some(Value::Object(map)) => map,
            _ => return false,
        };
        for (name, guard) in &self.fields {
            let field_value = candidate.get(name);
            if field_value.is_none() && guard.modifier().is_optional() {
                continue;
            }
            if !guard.test(field_value, path) {
                path.record(name);
                return false;
            }
        }
        true
    }

    fn kind(&self) -> &'static str {
        "obj"
    }
}

impl fmt::Debug for ObjectGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|(name, guard)| format!("{}: {}", name, guard.kind()))
            .collect();
        f.debug_struct("ObjectGuard")
            .field("modifier", &self.modifier)
            .field("fields", &fields)
            .finish()
    }
}
