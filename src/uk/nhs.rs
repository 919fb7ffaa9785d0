//! NHS numbers (England, Wales, Isle of Man), H&C numbers (Northern
//! Ireland) and CHI numbers (Scotland) share one ten-digit format, `NNN NNN
//! NNNC`, with a modulus-11 control digit. The issuing region follows from
//! the numeric range.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::{all_same, verify_mod11};
use crate::core::digits::{digits, group, number};
use crate::core::{NationalId, Rejection, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<number>[0-9]{3}[ -]?[0-9]{3}[ -]?[0-9]{4})$").expect("NHS pattern compiles")
});

const WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Region that issued a health-service number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NhsLocation {
    /// Outside every allocated range.
    #[default]
    Unknown,
    /// CHI numbers.
    Scotland,
    /// H&C numbers.
    NorthernIreland,
    /// NHS numbers.
    EnglandWalesAndIsleOfMan,
}

impl NhsLocation {
    /// Region for a full ten-digit number.
    pub fn from_number(value: u64) -> Self {
        match value {
            4_000_000_000..=4_999_999_999 | 6_000_000_000..=7_088_000_019 => {
                NhsLocation::EnglandWalesAndIsleOfMan
            }
            3_200_000_010..=3_999_999_999 => NhsLocation::NorthernIreland,
            101_010_000..=3_112_999_999 => NhsLocation::Scotland,
            _ => NhsLocation::Unknown,
        }
    }
}

/// Decoded NHS / H&C / CHI number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhsNumber {
    /// Whether the check digit matches.
    pub is_valid: bool,
    /// Issuing region, from the number range.
    pub location: NhsLocation,
}

impl NationalId for NhsNumber {
    const SCHEME: &'static str = "uk-nhs";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let number_digits = digits::<10>(group(&caps, "number")).ok_or(Rejection::Malformed)?;
        let (payload, check) = number_digits.split_at(9);

        if all_same(payload) {
            return Err(Rejection::RepeatedDigits);
        }
        verify_mod11(payload, &WEIGHTS, check[0])?;

        Ok(Self {
            is_valid: true,
            location: NhsLocation::from_number(number(&number_digits)),
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
