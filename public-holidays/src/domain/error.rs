//! Domain error types.
//!
//! These errors represent records that violate a domain invariant.
//! They are distinct from API/IO errors.

/// Domain-level errors for record construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A holiday must carry at least one type tag
    #[error("holiday must have at least one type")]
    NoTypes,
}
