//! Property-based tests for scoring and ranking.
//!
//! - Scores never exceed the cap
//! - Compatible blood alone yields exactly the blood points
//! - Rebuilt match sets respect the threshold and the ranking order
//! - Match ids form a permutation of 1..=n

mod common;

use common::{donor, recipient};
use prandaan_matcher::{
    compatibility, rebuild_matches, score, BLOOD_POINTS, MATCH_THRESHOLD, MAX_SCORE,
};
use prandaan_types::{BloodType, Donor, Recipient, Urgency};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn blood_type_strategy() -> impl Strategy<Value = BloodType> {
    prop::sample::select(BloodType::ALL.to_vec())
}

fn urgency_strategy() -> impl Strategy<Value = Urgency> {
    prop::sample::select(vec![Urgency::Low, Urgency::Medium, Urgency::High])
}

fn organ_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["kidney", "liver", "heart", "lung"])
}

fn donor_strategy() -> impl Strategy<Value = Donor> {
    (blood_type_strategy(), organ_strategy(), 18u32..=65)
        .prop_map(|(blood, organ, age)| donor(0, blood, organ, age))
}

fn recipient_strategy() -> impl Strategy<Value = Recipient> {
    (
        blood_type_strategy(),
        organ_strategy(),
        1u32..=80,
        urgency_strategy(),
    )
        .prop_map(|(blood, organ, age, urgency)| recipient(0, blood, organ, age, urgency))
}

fn numbered_donors() -> impl Strategy<Value = Vec<Donor>> {
    prop::collection::vec(donor_strategy(), 0..8).prop_map(|mut donors| {
        for (i, d) in donors.iter_mut().enumerate() {
            d.id = prandaan_types::DonorId::from_position(i);
        }
        donors
    })
}

fn numbered_recipients() -> impl Strategy<Value = Vec<Recipient>> {
    prop::collection::vec(recipient_strategy(), 0..8).prop_map(|mut recipients| {
        for (i, r) in recipients.iter_mut().enumerate() {
            r.id = prandaan_types::RecipientId::from_position(i);
        }
        recipients
    })
}

// =============================================================================
// SCORE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn score_never_exceeds_cap(d in donor_strategy(), r in recipient_strategy()) {
        prop_assert!(score(&d, &r) <= MAX_SCORE);
    }

    #[test]
    fn score_reaches_threshold_only_when_blood_compatible(
        d in donor_strategy(),
        r in recipient_strategy(),
    ) {
        let compatible = d.blood_type.can_donate_to(r.blood_type);
        prop_assert_eq!(score(&d, &r) >= MATCH_THRESHOLD, compatible);
    }

    #[test]
    fn blood_alone_is_exactly_sixty(
        (donor_blood, recipient_blood) in (blood_type_strategy(), blood_type_strategy())
            .prop_filter("compatible", |(d, r)| d.can_donate_to(*r)),
        donor_age in 18u32..=30,
        recipient_age in 60u32..=80,
    ) {
        prop_assume!(recipient_age - donor_age > 20);
        let d = donor(1, donor_blood, "heart", donor_age);
        let r = recipient(1, recipient_blood, "liver", recipient_age, Urgency::Low);
        prop_assert_eq!(score(&d, &r), BLOOD_POINTS);
    }

    #[test]
    fn string_compatibility_agrees_with_typed_table(
        a in blood_type_strategy(),
        b in blood_type_strategy(),
    ) {
        prop_assert_eq!(compatibility(a.as_str(), b.as_str()), a.can_donate_to(b));
    }
}

// =============================================================================
// REBUILD PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn rebuild_never_includes_low_scores(
        donors in numbered_donors(),
        recipients in numbered_recipients(),
    ) {
        for m in rebuild_matches(&donors, &recipients) {
            prop_assert!(m.score >= MATCH_THRESHOLD);
            prop_assert_eq!(m.score, score(&m.donor, &m.recipient));
        }
    }

    #[test]
    fn rebuild_is_ranked_by_urgency_then_score(
        donors in numbered_donors(),
        recipients in numbered_recipients(),
    ) {
        let matches = rebuild_matches(&donors, &recipients);
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.urgency_weight() >= b.urgency_weight());
            if a.urgency_weight() == b.urgency_weight() {
                prop_assert!(a.score >= b.score);
                if a.score == b.score {
                    prop_assert!(a.id < b.id);
                }
            }
        }
    }

    #[test]
    fn rebuild_covers_every_qualifying_pair(
        donors in numbered_donors(),
        recipients in numbered_recipients(),
    ) {
        let expected = donors
            .iter()
            .flat_map(|d| recipients.iter().map(move |r| score(d, r)))
            .filter(|s| *s >= MATCH_THRESHOLD)
            .count();

        let matches = rebuild_matches(&donors, &recipients);
        prop_assert_eq!(matches.len(), expected);

        let mut ids: Vec<u64> = matches.iter().map(|m| m.id.get()).collect();
        ids.sort_unstable();
        let want: Vec<u64> = (1..=expected as u64).collect();
        prop_assert_eq!(ids, want);
    }
}
