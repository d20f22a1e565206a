//! Error type shared by the sandboxes.
//!
//! Most operations cannot fail: out-of-range deletes are no-ops, out-of-range
//! inserts clamp, and empty queries return `None`. The variants here cover the
//! few inputs with no sensible fallback.

use std::fmt;

/// Errors reported by sandbox operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandboxError {
    /// Regeneration was asked to sample from `[min, max]` with `min > max`.
    EmptyRange { min: i32, max: i32 },
    /// A map entry whose key is not the character reversal of its value.
    ReversalViolation { key: String, value: String },
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::EmptyRange { min, max } => {
                write!(f, "empty sampling range: min {} > max {}", min, max)
            }
            SandboxError::ReversalViolation { key, value } => {
                write!(
                    f,
                    "key '{}' is not the reversal of value '{}'",
                    key, value
                )
            }
        }
    }
}

impl std::error::Error for SandboxError {}
