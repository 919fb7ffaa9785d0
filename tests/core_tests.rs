#![cfg(feature = "all")]

use chrono::NaiveDate;
use national_id::denmark::DanishPersonalId;
use national_id::finland::FinnishPersonalId;
use national_id::norway::*;
use national_id::sweden::*;
use national_id::uk::*;
use national_id::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Scheme dispatch
// ---------------------------------------------------------------------------

#[test]
fn every_scheme_rejects_junk() {
    let junk = ["", "\0", "\u{100}", "\u{7f}", "ﾟ", "       ", "-", "NO", "MVA"];
    for &scheme in Scheme::ALL {
        for input in junk {
            assert!(!scheme.validate(input).is_valid(), "{} {input:?}", scheme.name());
        }
    }
}

#[test]
fn dispatch_matches_direct_call() {
    assert_eq!(
        Scheme::DanishPersonalId.validate("211062-5629"),
        AnyId::DanishPersonalId(DanishPersonalId::validate("211062-5629"))
    );
    assert_eq!(
        Scheme::NorwegianCustomerId.validate("123456785"),
        AnyId::NorwegianCustomerId(NorwegianCustomerId::validate("123456785"))
    );
}

#[test]
fn reference_vectors_per_scheme() {
    let cases = [
        (Scheme::DanishPersonalId, "211062-5629"),
        (Scheme::FinnishPersonalId, "311280A888Y"),
        (Scheme::SwedishPersonalId, "556036-0793"),
        (Scheme::NorwegianPersonalId, "58031320478"),
        (Scheme::NorwegianCompanyId, "NO 974 760 673 MVA"),
        (Scheme::NorwegianBankAccountNumber, "3705.05.02962"),
        (Scheme::NorwegianCustomerId, "123456784-"),
        (Scheme::NationalInsuranceNumber, "AB 12 34 56 C"),
        (Scheme::NhsNumber, "401 023 2137"),
    ];
    for (scheme, input) in cases {
        let result = scheme.validate(input);
        assert!(result.is_valid(), "{} {input}", scheme.name());
        assert_eq!(result.scheme(), scheme);
    }
}

#[test]
fn idempotent() {
    for &scheme in Scheme::ALL {
        for input in ["211062-5629", "58031320478", "401 023 2137", "123456782"] {
            assert_eq!(scheme.validate(input), scheme.validate(input));
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn finnish_result_serializes() {
    let id = FinnishPersonalId::validate("311280-888Y");
    assert_eq!(
        serde_json::to_value(id).unwrap(),
        json!({
            "is_valid": true,
            "sex": "Female",
            "birth_date": "1980-12-31",
        })
    );
}

#[test]
fn invalid_result_serializes_defaults() {
    let id = NorwegianPersonalId::validate("");
    assert_eq!(
        serde_json::to_value(id).unwrap(),
        json!({
            "is_valid": false,
            "sex": "Unknown",
            "birth_date": null,
            "id_type": "Unknown",
        })
    );
}

#[test]
fn results_round_trip() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let swedish = SwedishPersonalId::validate_at("811278-9873", today);
    let json = serde_json::to_string(&swedish).unwrap();
    let back: SwedishPersonalId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, swedish);
    assert_eq!(back.id_type, SwedishPersonalIdType::CoordinationNumber);

    let any = Scheme::NhsNumber.validate("185-898-7857");
    let json = serde_json::to_string(&any).unwrap();
    let back: AnyId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, any);
    assert!(matches!(
        back,
        AnyId::NhsNumber(NhsNumber {
            location: NhsLocation::Scotland,
            ..
        })
    ));
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[test]
fn rejection_messages() {
    assert_eq!(Rejection::Empty.to_string(), "input is empty");
    assert_eq!(Rejection::ChecksumMismatch.to_string(), "check digit mismatch");
    assert_eq!(
        NhsNumber::parse("444 444 4444").unwrap_err().to_string(),
        "leading digits are all identical"
    );
}

#[test]
fn rejections_are_logged_without_panicking() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("national_id=debug")
        .with_test_writer()
        .try_init();
    assert!(!DanishPersonalId::validate("3102155008").is_valid);
    let kid = NorwegianCustomerId::validate_with("123456782", CustomerIdRoutine::Modulus11);
    assert!(!kid.is_valid);
    assert!(!SwedishPersonalId::validate("811218-9875").is_valid);
}
