//! Compatibility scoring and match ranking.
//!
//! A donor/recipient pair is scored out of 100:
//! - 60 points if the donor's blood type can donate to the recipient's
//! - 30 points if both name the same organ
//! - 10 points if their ages are within 10 years, 5 if within 20
//!
//! Pairs scoring at least [`MATCH_THRESHOLD`] become matches, ranked by
//! recipient urgency first and score second.

use chrono::Utc;
use prandaan_types::{BloodType, Donor, Match, MatchId, Recipient};
use tracing::debug;

/// Points for a blood-compatible pair.
pub const BLOOD_POINTS: u8 = 60;
/// Points when donor and recipient name the same organ.
pub const ORGAN_POINTS: u8 = 30;
/// Points when ages differ by at most [`CLOSE_AGE_GAP`] years.
pub const CLOSE_AGE_POINTS: u8 = 10;
/// Points when ages differ by at most [`NEAR_AGE_GAP`] years.
pub const NEAR_AGE_POINTS: u8 = 5;
pub const CLOSE_AGE_GAP: u32 = 10;
pub const NEAR_AGE_GAP: u32 = 20;
/// Maximum score.
pub const MAX_SCORE: u8 = 100;
/// Minimum score for a pair to be reported as a match.
pub const MATCH_THRESHOLD: u8 = 60;

/// Checks a donor/recipient pair of raw blood type labels against the
/// compatibility table. Unknown labels on either side are incompatible.
pub fn compatibility(donor_blood_type: &str, recipient_blood_type: &str) -> bool {
    match (
        donor_blood_type.parse::<BloodType>(),
        recipient_blood_type.parse::<BloodType>(),
    ) {
        (Ok(donor), Ok(recipient)) => donor.can_donate_to(recipient),
        _ => false,
    }
}

/// Scores a donor/recipient pair, 0 to [`MAX_SCORE`].
pub fn score(donor: &Donor, recipient: &Recipient) -> u8 {
    let mut total: u8 = 0;

    if donor.blood_type.can_donate_to(recipient.blood_type) {
        total += BLOOD_POINTS;
    }

    if donor.organ == recipient.organ {
        total += ORGAN_POINTS;
    }

    total += age_points(donor.age, recipient.age);

    total.min(MAX_SCORE)
}

fn age_points(donor_age: u32, recipient_age: u32) -> u8 {
    match donor_age.abs_diff(recipient_age) {
        gap if gap <= CLOSE_AGE_GAP => CLOSE_AGE_POINTS,
        gap if gap <= NEAR_AGE_GAP => NEAR_AGE_POINTS,
        _ => 0,
    }
}

/// Recomputes the full match set from scratch.
///
/// Every donor is paired with every recipient (donor-major order). Pairs
/// scoring below [`MATCH_THRESHOLD`] are dropped; the rest are numbered from
/// 1 in generation order, then ranked by recipient urgency and score, both
/// descending. The sort is stable, so ties keep generation order.
pub fn rebuild_matches(donors: &[Donor], recipients: &[Recipient]) -> Vec<Match> {
    let created_at = Utc::now();
    let mut next_id = MatchId::FIRST;
    let mut matches = Vec::new();

    for donor in donors {
        for recipient in recipients {
            let score = score(donor, recipient);
            if score < MATCH_THRESHOLD {
                continue;
            }

            matches.push(Match {
                id: next_id,
                donor: donor.clone(),
                recipient: recipient.clone(),
                score,
                created_at,
            });
            next_id = next_id.next();
        }
    }

    matches.sort_by(|a, b| {
        b.urgency_weight()
            .cmp(&a.urgency_weight())
            .then_with(|| b.score.cmp(&a.score))
    });

    debug!(
        "Rebuilt {} matches from {} donors x {} recipients",
        matches.len(),
        donors.len(),
        recipients.len()
    );

    matches
}
