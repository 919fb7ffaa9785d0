//! Personnummer, samordningsnummer and organisationsnummer.
//!
//! Layout `YYMMDD±NNNC`. The control digit `C` is the digit-doubling check
//! over the nine preceding digits.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::doubling_check_digit;
use crate::core::date::{self, Era};
use crate::core::digits::{digits, group};
use crate::core::{NationalId, Rejection, Sex, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<date>[0-9]{6})(?<divider>[-+])(?<individual>[0-9]{3})(?<check>[0-9])$")
        .expect("personnummer pattern compiles")
});

/// Kind of Swedish identity number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwedishPersonalIdType {
    /// The number did not validate.
    #[default]
    Unknown,
    /// Personnummer.
    BirthNumber,
    /// Samordningsnummer: day of month offset by 60.
    CoordinationNumber,
    /// Organisationsnummer: month field of 20 or more. Carries no date.
    OrganizationNumber,
}

/// Decoded Swedish personal or organization number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwedishPersonalId {
    /// Whether the Luhn check digit matches and any encoded date exists.
    pub is_valid: bool,
    /// From the parity of the third individual digit. Unknown for organizations.
    pub sex: Sex,
    /// Date of birth, `None` for organization numbers.
    pub birth_date: Option<NaiveDate>,
    /// Sub-type encoded by the day and month fields.
    pub id_type: SwedishPersonalIdType,
}

impl NationalId for SwedishPersonalId {
    const SCHEME: &'static str = "se-personnummer";

    fn parse(input: &str) -> Result<Self, Rejection> {
        Self::parse_at(input, Local::now().date_naive())
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl SwedishPersonalId {
    /// Decode `input`, resolving the century relative to `today`.
    pub fn parse_at(input: &str, today: NaiveDate) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let [y1, y2, m1, m2, d1, d2] =
            digits::<6>(group(&caps, "date")).ok_or(Rejection::Malformed)?;
        let individual = digits::<3>(group(&caps, "individual")).ok_or(Rejection::Malformed)?;
        let [check] = digits::<1>(group(&caps, "check")).ok_or(Rejection::Malformed)?;

        let payload = [y1, y2, m1, m2, d1, d2, individual[0], individual[1], individual[2]];
        if doubling_check_digit(&payload) != check {
            return Err(Rejection::ChecksumMismatch);
        }

        let (id_type, day_tens) = if d1 >= 6 {
            (SwedishPersonalIdType::CoordinationNumber, d1 - 6)
        } else if m1 >= 2 {
            return Ok(Self {
                is_valid: true,
                id_type: SwedishPersonalIdType::OrganizationNumber,
                ..Self::default()
            });
        } else {
            (SwedishPersonalIdType::BirthNumber, d1)
        };

        let era = Era::swedish(today, group(&caps, "divider") == "+");
        let birth_date = date::resolve(y1 * 10 + y2, m1 * 10 + m2, day_tens * 10 + d2, era)?;

        Ok(Self {
            is_valid: true,
            sex: Sex::from_parity(individual[2]),
            birth_date: Some(birth_date),
            id_type,
        })
    }

    /// Like [`NationalId::validate`] with an explicit reference date.
    pub fn validate_at(input: &str, today: NaiveDate) -> Self {
        Self::parse_at(input, today).unwrap_or_else(|reason| {
            tracing::debug!(scheme = Self::SCHEME, %reason, "identifier rejected");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn birth_number() {
        let id = SwedishPersonalId::validate_at("811218-9876", today());
        assert!(id.is_valid);
        assert_eq!(id.sex, Sex::Male);
        assert_eq!(id.id_type, SwedishPersonalIdType::BirthNumber);
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1981, 12, 18));
    }

    #[test]
    fn centenarian_divider() {
        let id = SwedishPersonalId::validate_at("811218+9876", today());
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1881, 12, 18));
    }

    #[test]
    fn coordination_number() {
        let id = SwedishPersonalId::validate_at("811278-9873", today());
        assert!(id.is_valid);
        assert_eq!(id.id_type, SwedishPersonalIdType::CoordinationNumber);
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1981, 12, 18));
    }

    #[test]
    fn organization_number_has_no_date() {
        let id = SwedishPersonalId::validate_at("556036-0793", today());
        assert!(id.is_valid);
        assert_eq!(id.id_type, SwedishPersonalIdType::OrganizationNumber);
        assert_eq!(id.birth_date, None);
        assert_eq!(id.sex, Sex::Unknown);
    }

    #[test]
    fn rejections() {
        assert_eq!(
            SwedishPersonalId::parse_at("811218-9875", today()),
            Err(Rejection::ChecksumMismatch)
        );
        assert_eq!(
            SwedishPersonalId::parse_at("150231-9872", today()),
            Err(Rejection::InvalidDate)
        );
        assert_eq!(
            SwedishPersonalId::parse_at("8112189876", today()),
            Err(Rejection::Malformed)
        );
    }
}
