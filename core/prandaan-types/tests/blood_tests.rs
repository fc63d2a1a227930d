use prandaan_types::{BloodType, Error};
use proptest::prelude::*;
use std::str::FromStr;

fn blood_type_strategy() -> impl Strategy<Value = BloodType> {
    prop::sample::select(BloodType::ALL.to_vec())
}

// ── Parsing and display ──────────────────────────────────────────

#[test]
fn parse_every_label() {
    for label in ["O-", "O+", "A-", "A+", "B-", "B+", "AB-", "AB+"] {
        let parsed = BloodType::from_str(label).unwrap();
        assert_eq!(parsed.to_string(), label);
        assert_eq!(parsed.as_str(), label);
    }
}

#[test]
fn parse_rejects_unknown_label() {
    let err = "C+".parse::<BloodType>().unwrap_err();
    assert!(matches!(err, Error::InvalidBloodType(ref s) if s == "C+"));
    assert!(err.to_string().contains("invalid blood type"));
}

#[test]
fn parse_is_case_sensitive() {
    assert!("ab+".parse::<BloodType>().is_err());
    assert!(" O-".parse::<BloodType>().is_err());
}

#[test]
fn serde_uses_labels() {
    let json = serde_json::to_string(&BloodType::AbNegative).unwrap();
    assert_eq!(json, "\"AB-\"");

    let parsed: BloodType = serde_json::from_str("\"O+\"").unwrap();
    assert_eq!(parsed, BloodType::OPositive);

    assert!(serde_json::from_str::<BloodType>("\"Z\"").is_err());
}

// ── Compatibility table ──────────────────────────────────────────

#[test]
fn o_negative_is_universal_donor() {
    for recipient in BloodType::ALL {
        assert!(BloodType::ONegative.can_donate_to(recipient));
    }
}

#[test]
fn ab_positive_is_universal_recipient() {
    for donor in BloodType::ALL {
        assert!(donor.can_donate_to(BloodType::AbPositive));
    }
}

#[test]
fn ab_positive_donates_only_to_itself() {
    assert_eq!(BloodType::AbPositive.recipients(), &[BloodType::AbPositive]);
}

#[test]
fn a_positive_cannot_donate_to_o_negative() {
    assert!(!BloodType::APositive.can_donate_to(BloodType::ONegative));
}

#[test]
fn positive_donor_never_reaches_negative_recipient() {
    let negatives = [
        BloodType::ONegative,
        BloodType::ANegative,
        BloodType::BNegative,
        BloodType::AbNegative,
    ];
    for donor in [
        BloodType::OPositive,
        BloodType::APositive,
        BloodType::BPositive,
        BloodType::AbPositive,
    ] {
        for recipient in negatives {
            assert!(!donor.can_donate_to(recipient), "{donor} -> {recipient}");
        }
    }
}

#[test]
fn a_and_b_are_mutually_incompatible() {
    assert!(!BloodType::ANegative.can_donate_to(BloodType::BNegative));
    assert!(!BloodType::BNegative.can_donate_to(BloodType::ANegative));
    assert!(!BloodType::APositive.can_donate_to(BloodType::BPositive));
    assert!(!BloodType::BPositive.can_donate_to(BloodType::APositive));
}

proptest! {
    /// Every type can donate to a recipient of the same type.
    #[test]
    fn same_type_is_always_compatible(t in blood_type_strategy()) {
        prop_assert!(t.can_donate_to(t));
    }

    /// Compatibility is only symmetric between identical types.
    #[test]
    fn compatibility_is_antisymmetric(a in blood_type_strategy(), b in blood_type_strategy()) {
        if a != b && a.can_donate_to(b) {
            prop_assert!(!b.can_donate_to(a));
        }
    }
}
