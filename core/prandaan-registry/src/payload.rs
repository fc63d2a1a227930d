//! Registration payloads and their validation.
//!
//! Every field is optional at the type level so that a missing field is
//! reported as a validation error rather than a deserialization failure.

use chrono::{DateTime, Utc};
use prandaan_types::{BloodType, Donor, DonorId, Recipient, RecipientId, Urgency};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

const DONOR_REQUIRED: &[&str] = &["name", "age", "blood_type", "organ"];
const RECIPIENT_REQUIRED: &[&str] = &["name", "age", "blood_type", "organ", "urgency"];

const DONOR_AGE: (u32, u32) = (18, 65);
const RECIPIENT_AGE: (u32, u32) = (1, 80);

/// Donor registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDonor {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub blood_type: Option<String>,
    pub organ: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Recipient registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipient {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub blood_type: Option<String>,
    pub organ: Option<String>,
    pub urgency: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Fields shared by donors and recipients once presence is established.
struct Common<'a> {
    name: &'a str,
    age: i64,
    blood_type: &'a str,
    organ: &'a str,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn check_age(age: i64, role: &'static str, (min, max): (u32, u32)) -> Result<u32, ValidationError> {
    u32::try_from(age)
        .ok()
        .filter(|a| (min..=max).contains(a))
        .ok_or(ValidationError::AgeOutOfRange { role, min, max })
}

fn parse_blood_type(raw: &str) -> Result<BloodType, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidBloodType(raw.to_string()))
}

impl NewDonor {
    fn common(&self) -> Option<Common<'_>> {
        Some(Common {
            name: present(&self.name)?,
            age: self.age?,
            blood_type: present(&self.blood_type)?,
            organ: present(&self.organ)?,
        })
    }

    /// Validates the payload and builds the donor record.
    pub fn into_donor(
        self,
        id: DonorId,
        registered_at: DateTime<Utc>,
    ) -> Result<Donor, ValidationError> {
        let common = self
            .common()
            .ok_or(ValidationError::MissingFields(DONOR_REQUIRED))?;
        let age = check_age(common.age, "Donor", DONOR_AGE)?;
        let blood_type = parse_blood_type(common.blood_type)?;
        let name = common.name.trim().to_string();
        let organ = common.organ.to_string();

        Ok(Donor {
            id,
            name,
            age,
            blood_type,
            organ,
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            registered_at,
        })
    }
}

impl NewRecipient {
    fn common(&self) -> Option<(Common<'_>, &str)> {
        let common = Common {
            name: present(&self.name)?,
            age: self.age?,
            blood_type: present(&self.blood_type)?,
            organ: present(&self.organ)?,
        };
        Some((common, present(&self.urgency)?))
    }

    /// Validates the payload and builds the recipient record.
    pub fn into_recipient(
        self,
        id: RecipientId,
        registered_at: DateTime<Utc>,
    ) -> Result<Recipient, ValidationError> {
        let (common, urgency) = self
            .common()
            .ok_or(ValidationError::MissingFields(RECIPIENT_REQUIRED))?;
        let age = check_age(common.age, "Recipient", RECIPIENT_AGE)?;
        let blood_type = parse_blood_type(common.blood_type)?;
        let urgency = urgency
            .parse::<Urgency>()
            .map_err(|_| ValidationError::InvalidUrgency(urgency.to_string()))?;
        let name = common.name.trim().to_string();
        let organ = common.organ.to_string();

        Ok(Recipient {
            id,
            name,
            age,
            blood_type,
            organ,
            urgency,
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            registered_at,
        })
    }
}
