#![cfg(feature = "denmark")]

use chrono::NaiveDate;
use national_id::denmark::*;
use national_id::*;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

// ---------------------------------------------------------------------------
// Validity
// ---------------------------------------------------------------------------

#[test]
fn valid_ids() {
    for input in ["211062-5629", "2110625629"] {
        assert!(DanishPersonalId::validate(input).is_valid, "{input}");
    }
}

#[test]
fn invalid_ids() {
    let invalid = [
        "",
        "\0",
        ":",
        "0",
        "000000\0",
        "000000-",
        "000000\u{100}",
        "0000008\0",
        "600000-2288",
        "000000-1029",
        "000000-5588\0",
        "211062-5629\n",
        " 211062-5629",
    ];
    for input in invalid {
        let id = DanishPersonalId::validate(input);
        assert_eq!(id, DanishPersonalId::default(), "{input:?}");
    }
}

#[test]
fn absent_input() {
    assert!(!DanishPersonalId::validate_opt(None).is_valid);
    assert!(DanishPersonalId::validate_opt(Some("211062-5629")).is_valid);
}

// ---------------------------------------------------------------------------
// Decoded fields
// ---------------------------------------------------------------------------

#[test]
fn sex() {
    assert_eq!(DanishPersonalId::validate("211062-5629").sex, Sex::Male);
    assert_eq!(DanishPersonalId::validate("211062-5628").sex, Sex::Female);
}

#[test]
fn birth_dates_across_centuries() {
    let cases = [
        ("3012753002", date(1975, 12, 30)),
        ("0808920287", date(1992, 8, 8)),
        ("1403850993", date(1985, 3, 14)),
        ("0712965885", date(1896, 12, 7)),
        ("1808354542", date(2035, 8, 18)),
        ("0502821285", date(1982, 2, 5)),
        ("2109213799", date(1921, 9, 21)),
        ("2411670778", date(1967, 11, 24)),
        ("0512450604", date(1945, 12, 5)),
        ("1202824280", date(1982, 2, 12)),
        ("2903655341", date(1865, 3, 29)),
    ];
    for (input, expected) in cases {
        assert_eq!(DanishPersonalId::validate(input).birth_date, expected, "{input}");
    }
}

#[test]
fn invalid_date_parts() {
    for input in ["3102155008", "6954899906", "0000005051"] {
        assert!(!DanishPersonalId::validate(input).is_valid, "{input}");
    }
}

#[test]
fn replacement_numbers() {
    for input in ["9012753002", "6808920287"] {
        let id = DanishPersonalId::validate(input);
        assert!(id.is_valid, "{input}");
        assert_eq!(id.id_type, DanishPersonalIdType::ReplacementNumber, "{input}");
    }
    assert_eq!(
        DanishPersonalId::validate("3012753002").id_type,
        DanishPersonalIdType::BirthNumber
    );
}

#[test]
fn legacy_modulus() {
    assert!(DanishPersonalId::validate("211062-5629").is_modulo_valid);
    assert!(!DanishPersonalId::validate("211062-5628").is_modulo_valid);
}
