//! Built-in leaf guards, one per primitive kind.
//!
//! Leaves never write to the error path. A failing leaf is attributed by
//! the enclosing object guard, which knows the field name.

use serde_json::Value;

use crate::error::ErrorPath;
use crate::modifier::Modifier;

use super::Guard;

// ── Str ──────────────────────────────────────────────────────────────────

/// Accepts any JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrGuard {
    modifier: Modifier,
}

impl StrGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for StrGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, _path: &mut ErrorPath) -> bool {
        matches!(value, Some(Value::String(_)))
    }

    fn kind(&self) -> &'static str {
        "str"
    }
}

// ── Num ──────────────────────────────────────────────────────────────────

/// Accepts any JSON number, integral or floating.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumGuard {
    modifier: Modifier,
}

impl NumGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for NumGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, _path: &mut ErrorPath) -> bool {
        matches!(value, Some(Value::Number(_)))
    }

    fn kind(&self) -> &'static str {
        "num"
    }
}

// ── Bool ─────────────────────────────────────────────────────────────────

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolGuard {
    modifier: Modifier,
}

impl BoolGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for BoolGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, _path: &mut ErrorPath) -> bool {
        matches!(value, Some(Value::Bool(_)))
    }

    fn kind(&self) -> &'static str {
        "bool"
    }
}

// ── Null ─────────────────────────────────────────────────────────────────

/// Accepts an explicit JSON `null` and nothing else. An absent value does
/// not pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGuard {
    modifier: Modifier,
}

impl NullGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for NullGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, _path: &mut ErrorPath) -> bool {
        matches!(value, Some(Value::Null))
    }

    fn kind(&self) -> &'static str {
        "nil"
    }
}

// ── Undef ────────────────────────────────────────────────────────────────

/// Accepts only an absent value. A present `null` does not pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefGuard {
    modifier: Modifier,
}

impl UndefGuard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Guard for UndefGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    fn test(&self, value: Option<&Value>, _path: &mut ErrorPath) -> bool {
        value.is_none()
    }

    fn kind(&self) -> &'static str {
        "undef"
    }
}
