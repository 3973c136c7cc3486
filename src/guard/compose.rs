//! Union of two alternatives.

use std::fmt;

use serde_json::Value;

use crate::error::ErrorPath;
use crate::modifier::Modifier;

use super::Guard;

/// Passes when either of two alternative guards passes.
///
/// The first alternative runs first and the second is skipped entirely
/// when it passes. Both alternatives receive the same error path, so named
/// structure nested inside an alternative still records its own field
/// names; the compose node itself never records one, leaving attribution
/// to the enclosing object guard.
///
/// The access marker describes the enclosing field, so setting it on the
/// compose node forwards it to both alternatives.
pub struct ComposeGuard {
    /// First alternative, always tried.
    pub first: Box<dyn Guard>,
    /// Second alternative, tried only when the first fails.
    pub second: Box<dyn Guard>,
    modifier: Modifier,
}

impl ComposeGuard {
    /// Combine two alternatives under the unmarked (required) marker.
    pub fn new(first: impl Guard + 'static, second: impl Guard + 'static) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
            modifier: Modifier::default(),
        }
    }
}

impl Guard for ComposeGuard {
    fn modifier(&self) -> Modifier {
        self.modifier
    }

    fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
        self.first.set_modifier(modifier);
        self.second.set_modifier(modifier);
    }

    fn test(&self, value: Option<&Value>, path: &mut ErrorPath) -> bool {
        self.first.test(value, path) || self.second.test(value, path)
    }

    fn kind(&self) -> &'static str {
        "compose"
    }
}

impl fmt::Debug for ComposeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeGuard")
            .field("first", &self.first.kind())
            .field("second", &self.second.kind())
            .field("modifier", &self.modifier)
            .finish()
    }
}
