//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (storage, credit bureau).
//!
//! An ordinary registration rejection is *not* an error; see
//! [`RejectionReason`](crate::RejectionReason).

use thiserror::Error;

/// Domain-specific errors for broken invariants and malformed records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A client record carries a tier outside the known set
    #[error("Unknown client tier: {0}")]
    UnknownTier(String),
}

impl DomainError {
    /// Create an unknown tier error
    pub fn unknown_tier(tier: impl Into<String>) -> Self {
        DomainError::UnknownTier(tier.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
