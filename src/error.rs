//! Failure reporting: the per-check error path and the `assert` error type.

use thiserror::Error;

/// Mutable context threaded through one check of a guard tree.
///
/// When a field fails inside an object guard, the parent records the field
/// name here at the moment the failure surfaces, so the stack fills up
/// innermost name first. Guard implementations may only write; turning the
/// stack into an error is left to the owning handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPath {
    segments: Vec<String>,
}

impl ErrorPath {
    /// Fresh, empty path. Each check of a value starts from one of these.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name of a failing field.
    ///
    /// Called by the node that owns the name (an object guard recording
    /// one of its keys, or a custom guard naming its own sub-structure),
    /// never by the failing child itself.
    pub fn record(&mut self, name: &str) {
        self.segments.push(name.to_string());
    }

    /// Collapse the recorded stack into the error `assert` reports. The
    /// innermost-first recordings are reversed into root-first order and
    /// joined with `.`; an empty stack means the root itself failed.
    pub(crate) fn into_error(self) -> GuardError {
        if self.segments.is_empty() {
            return GuardError::Root;
        }
        let mut segments = self.segments;
        segments.reverse();
        GuardError::Field(segments.join("."))
    }
}

/// Failure reported by [`SchemaGuard::assert`](crate::SchemaGuard::assert).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// A named field failed. The payload is the dot-joined path from the
    /// root to the first failure, for example `attributes.text`.
    #[error("{0}")]
    Field(String),
    /// The candidate failed at the root before any field name could be
    /// attributed: a non-object root against an object guard, or a root
    /// leaf mismatch.
    #[error("root value mismatch")]
    Root,
}

impl GuardError {
    /// The dot-joined field path, when the failure names one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Field(path) => Some(path),
            Self::Root => None,
        }
    }
}
