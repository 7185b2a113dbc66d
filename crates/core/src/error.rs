//! Aging error model.

use thiserror::Error;

/// Result type used across the aging layer.
pub type AgingResult<T> = Result<T, AgingError>;

/// Aging-level error.
///
/// Quality and sell-in arithmetic is total, so the only failure is a rule table
/// that leaves an item without a matching rule. That is a static
/// configuration gap and is never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgingError {
    /// No rule in the table matched the item (including the catch-all).
    #[error("no matching aging rule for item {name:?} at position {index}")]
    UnmatchedItem { name: String, index: usize },
}

impl AgingError {
    /// Error for the item at `index` that no rule accepted.
    pub fn unmatched(name: impl Into<String>, index: usize) -> Self {
        Self::UnmatchedItem {
            name: name.into(),
            index,
        }
    }

    /// Name of the item the error refers to.
    pub fn item_name(&self) -> &str {
        match self {
            AgingError::UnmatchedItem { name, .. } => name,
        }
    }
}
