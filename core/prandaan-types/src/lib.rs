//! Core type definitions for Prandaan Connect.
//!
//! This crate defines the domain types shared by the matcher, the registry
//! and the HTTP server:
//! - Blood types and the donor-to-recipient compatibility table
//! - Recipient urgency levels
//! - Donor, recipient and match records with sequential identifiers

mod blood;
mod ids;
mod record;
mod urgency;

pub use blood::BloodType;
pub use ids::{DonorId, MatchId, RecipientId};
pub use record::{Donor, Match, Recipient};
pub use urgency::Urgency;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid blood type: {0}")]
    InvalidBloodType(String),

    #[error("invalid urgency: {0} (expected Low, Medium or High)")]
    InvalidUrgency(String),
}
