//! Fødselsnummer, D-nummer, H-nummer and FH-nummer.
//!
//! Layout `DDMMYY[-]IIIKK`: birth date, individual number `III` and two
//! modulus-11 control digits `KK`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::verify_mod11;
use crate::core::date::{self, Era};
use crate::core::digits::{digits, group, number};
use crate::core::{NationalId, Rejection, Sex, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<date>[0-9]{2}[0-5][0-9][0-9]{2})-?(?<individual>[0-9]{3})(?<control>[0-9]{2})$",
    )
    .expect("fødselsnummer pattern compiles")
});

const K1_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const K2_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Kind of Norwegian personal number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorwegianPersonalIdType {
    /// The number did not validate.
    #[default]
    Unknown,
    /// Fødselsnummer.
    BirthNumber,
    /// Temporary number for foreign residents: day offset by 40.
    DNumber,
    /// Help number assigned by health services: month offset by 40.
    HNumber,
    /// Felles hjelpenummer: day field of 80 or more. Carries no date or sex.
    FHNumber,
}

/// Decoded Norwegian personal identification number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorwegianPersonalId {
    /// Whether both control digits match and any encoded date exists.
    pub is_valid: bool,
    /// From the parity of the third individual digit.
    pub sex: Sex,
    /// Date of birth with D/H offsets removed.
    pub birth_date: Option<NaiveDate>,
    /// Sub-type encoded by the day and month offsets.
    pub id_type: NorwegianPersonalIdType,
}

impl NationalId for NorwegianPersonalId {
    const SCHEME: &'static str = "no-fodselsnummer";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let [d1, d2, m1, m2, y1, y2] =
            digits::<6>(group(&caps, "date")).ok_or(Rejection::Malformed)?;
        let individual = digits::<3>(group(&caps, "individual")).ok_or(Rejection::Malformed)?;
        let [k1, k2] = digits::<2>(group(&caps, "control")).ok_or(Rejection::Malformed)?;

        let payload = [d1, d2, m1, m2, y1, y2, individual[0], individual[1], individual[2], k1];
        verify_mod11(&payload[..9], &K1_WEIGHTS, k1)?;
        verify_mod11(&payload, &K2_WEIGHTS, k2)?;

        let (id_type, day_tens, month_tens) = match (d1, m1) {
            (8..=9, _) => {
                return Ok(Self {
                    is_valid: true,
                    id_type: NorwegianPersonalIdType::FHNumber,
                    ..Self::default()
                });
            }
            (4..=7, _) => (NorwegianPersonalIdType::DNumber, d1 - 4, m1),
            (_, 4..=5) => (NorwegianPersonalIdType::HNumber, d1, m1 - 4),
            _ => (NorwegianPersonalIdType::BirthNumber, d1, m1),
        };

        let year = y1 * 10 + y2;
        let era = Era::norwegian(number(&individual) as u32, year);
        let birth_date = date::resolve(year, month_tens * 10 + m2, day_tens * 10 + d2, era)?;

        Ok(Self {
            is_valid: true,
            sex: Sex::from_parity(individual[2]),
            birth_date: Some(birth_date),
            id_type,
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
