use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BloodType, DonorId, MatchId, RecipientId, Urgency};

/// A registered organ donor. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub age: u32,
    pub blood_type: BloodType,
    pub organ: String,
    pub phone: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// A registered transplant recipient. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: RecipientId,
    pub name: String,
    pub age: u32,
    pub blood_type: BloodType,
    pub organ: String,
    pub urgency: Urgency,
    pub phone: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// A scored donor/recipient pairing.
///
/// Matches are derived data: the whole set is recomputed whenever a donor
/// or recipient is registered, so a match carries copies of both records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub donor: Donor,
    pub recipient: Recipient,
    pub score: u8,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Urgency weight of the matched recipient.
    #[must_use]
    pub fn urgency_weight(&self) -> u8 {
        self.recipient.urgency.weight()
    }
}
