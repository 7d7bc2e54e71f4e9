//! Validation diagnostics.
//!
//! A [`Diagnostic`] is one human-readable violation message; it has no
//! identity beyond its text. [`Diagnostics`] collects them in discovery
//! order, which for the traversal equals the insertion order of the
//! offending attributes.

use serde::Serialize;
use std::fmt;

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The violation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// An ordered collection of validation violations.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.entries.push(Diagnostic::new(message));
    }

    /// Number of collected violations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no violation was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the violations in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// All violations, in discovery order.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Consume self and return the inner Vec.
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diag) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diag}")?;
        }
        Ok(())
    }
}
