#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use prandaan_types::{BloodType, Donor, DonorId, Recipient, RecipientId, Urgency};

pub fn donor(id: u64, blood_type: BloodType, organ: &str, age: u32) -> Donor {
    Donor {
        id: DonorId::new(id),
        name: format!("donor-{id}"),
        age,
        blood_type,
        organ: organ.to_string(),
        phone: String::new(),
        email: String::new(),
        registered_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn recipient(
    id: u64,
    blood_type: BloodType,
    organ: &str,
    age: u32,
    urgency: Urgency,
) -> Recipient {
    Recipient {
        id: RecipientId::new(id),
        name: format!("recipient-{id}"),
        age,
        blood_type,
        organ: organ.to_string(),
        urgency,
        phone: String::new(),
        email: String::new(),
        registered_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
