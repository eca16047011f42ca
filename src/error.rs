use thiserror::Error;

/// Errors reported by the blackboard's reporting accessors
/// (`with`, `with_mut` and `fetch`)
///
/// The core accessors never return these; they signal a miss with a default
/// value, `false` or `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    /// The requested key was not found
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// The key holds a value of a different type than the one requested
    #[error("type mismatch for key {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
