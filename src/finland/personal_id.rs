//! Henkilötunnus (HETU).
//!
//! Layout `DDMMYYCZZZQ`: birth date, century marker `C`, individual number
//! `ZZZ` and a modulo-31 control character `Q`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::mod31_check_char;
use crate::core::date::{self, Era};
use crate::core::digits::{digits, group, number};
use crate::core::{NationalId, Rejection, Sex, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<date>[0-3][0-9][01][0-9][0-9]{2})(?<marker>[-+A])(?<individual>[0-9]{3})(?<check>[0-9A-Y])$",
    )
    .expect("HETU pattern compiles")
});

/// Decoded Finnish personal identity code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinnishPersonalId {
    /// Whether the check character and date are valid.
    pub is_valid: bool,
    /// From the parity of the individual number.
    pub sex: Sex,
    /// Date of birth, century taken from the marker.
    pub birth_date: Option<NaiveDate>,
}

impl NationalId for FinnishPersonalId {
    const SCHEME: &'static str = "fi-hetu";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let [d1, d2, m1, m2, y1, y2] =
            digits::<6>(group(&caps, "date")).ok_or(Rejection::Malformed)?;
        let individual = digits::<3>(group(&caps, "individual")).ok_or(Rejection::Malformed)?;
        let marker = group(&caps, "marker").chars().next().ok_or(Rejection::Malformed)?;
        let check = group(&caps, "check").chars().next().ok_or(Rejection::Malformed)?;

        let payload = [d1, d2, m1, m2, y1, y2, individual[0], individual[1], individual[2]];
        if mod31_check_char(number(&payload) as u32) != check {
            return Err(Rejection::ChecksumMismatch);
        }

        let era = Era::finnish(marker).ok_or(Rejection::Malformed)?;
        let birth_date = date::resolve(y1 * 10 + y2, m1 * 10 + m2, d1 * 10 + d2, era)?;

        Ok(Self {
            is_valid: true,
            sex: Sex::from_parity(individual[2]),
            birth_date: Some(birth_date),
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
