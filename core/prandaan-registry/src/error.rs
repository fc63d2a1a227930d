//! Error types for registration.

use thiserror::Error;

/// Reasons a registration payload is rejected.
///
/// Messages are shown to API clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(&'static [&'static str]),

    #[error("{role} age must be between {min} and {max} years")]
    AgeOutOfRange {
        role: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Invalid blood type: {0}")]
    InvalidBloodType(String),

    #[error("Invalid urgency: {0} (expected Low, Medium or High)")]
    InvalidUrgency(String),
}

/// Registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The payload failed validation. Nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unexpected failure inside the store.
    #[error("internal registry error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Returns true for errors caused by client input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
