//! CPR-nummer (Det Centrale Personregister).
//!
//! Layout `DDMMYY[-]SSSS`. Since 2007 CPR numbers are issued without a valid
//! modulus-11 control digit, so the legacy checksum is reported separately
//! and never affects validity.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::mod11;
use crate::core::date::{self, Era};
use crate::core::digits::{digits, group, number};
use crate::core::{NationalId, Rejection, Sex, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<date>[0-9]{2}[01][0-9][0-9]{2})-?(?<sequence>[0-9]{4})$")
        .expect("CPR pattern compiles")
});

/// Weights of the retired modulus-11 rule over the first nine digits.
const LEGACY_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Kind of CPR number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanishPersonalIdType {
    /// The number did not validate.
    #[default]
    Unknown,
    /// Regular number assigned at birth or immigration.
    BirthNumber,
    /// Erstatningsnummer: day of month offset by 60.
    ReplacementNumber,
}

/// Decoded Danish personal identification number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanishPersonalId {
    /// Whether the number passed format and date checks.
    pub is_valid: bool,
    /// From the parity of the last digit.
    pub sex: Sex,
    /// Date of birth, with the day offset removed.
    pub birth_date: Option<NaiveDate>,
    /// Birth or replacement number.
    pub id_type: DanishPersonalIdType,
    /// Whether the number also passes the retired modulus-11 check.
    pub is_modulo_valid: bool,
}

impl NationalId for DanishPersonalId {
    const SCHEME: &'static str = "dk-cpr";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let [d1, d2, m1, m2, y1, y2] =
            digits::<6>(group(&caps, "date")).ok_or(Rejection::Malformed)?;
        let sequence = digits::<4>(group(&caps, "sequence")).ok_or(Rejection::Malformed)?;

        let (id_type, day_tens) = if d1 >= 6 {
            (DanishPersonalIdType::ReplacementNumber, d1 - 6)
        } else {
            (DanishPersonalIdType::BirthNumber, d1)
        };

        let year = y1 * 10 + y2;
        let era = Era::danish(number(&sequence) as u32, year);
        let birth_date = date::resolve(year, m1 * 10 + m2, day_tens * 10 + d2, era)?;

        let payload = [
            day_tens,
            d2,
            m1,
            m2,
            y1,
            y2,
            sequence[0],
            sequence[1],
            sequence[2],
        ];

        Ok(Self {
            is_valid: true,
            sex: Sex::from_parity(sequence[3]),
            birth_date: Some(birth_date),
            id_type,
            is_modulo_valid: mod11(&payload, &LEGACY_WEIGHTS) == Ok(sequence[3]),
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_and_without_divider() {
        let a = DanishPersonalId::validate("211062-5629");
        let b = DanishPersonalId::validate("2110625629");
        assert!(a.is_valid);
        assert_eq!(a, b);
        assert_eq!(a.sex, Sex::Male);
        assert_eq!(a.birth_date, NaiveDate::from_ymd_opt(1962, 10, 21));
        assert_eq!(a.id_type, DanishPersonalIdType::BirthNumber);
        assert!(a.is_modulo_valid);
    }

    #[test]
    fn legacy_checksum_does_not_gate_validity() {
        let id = DanishPersonalId::validate("211062-5628");
        assert!(id.is_valid);
        assert_eq!(id.sex, Sex::Female);
        assert!(!id.is_modulo_valid);
    }

    #[test]
    fn replacement_number_day_offset() {
        let id = DanishPersonalId::validate("9012753002");
        assert!(id.is_valid);
        assert_eq!(id.id_type, DanishPersonalIdType::ReplacementNumber);
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1975, 12, 30));
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(DanishPersonalId::parse(""), Err(Rejection::Empty));
        assert_eq!(DanishPersonalId::parse("000000-"), Err(Rejection::Malformed));
        assert_eq!(DanishPersonalId::parse("3102155008"), Err(Rejection::InvalidDate));
        assert_eq!(DanishPersonalId::parse("211062 5629"), Err(Rejection::Malformed));
    }
}
