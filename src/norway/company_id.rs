//! Organisasjonsnummer from Enhetsregisteret.
//!
//! Accepts the bare nine digits as well as display forms such as
//! `NO 974 760 673 MVA`. A trailing `MVA` marks VAT registration.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::verify_mod11;
use crate::core::digits::{digits, group};
use crate::core::{NationalId, Rejection, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<country>[A-Za-z]{2})?[ -]?(?<number>[0-9]{3}[ -]?[0-9]{3}[ -]?[0-9]{3})[ -]?(?<vat>MVA)?$",
    )
    .expect("organisasjonsnummer pattern compiles")
});

const WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Decoded Norwegian organization number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorwegianCompanyId {
    /// Whether the control digit matches.
    pub is_valid: bool,
    /// Written with the `MVA` suffix.
    pub vat_registered: bool,
}

impl NationalId for NorwegianCompanyId {
    const SCHEME: &'static str = "no-orgnr";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        if caps.name("country").is_some_and(|cc| cc.as_str() != "NO") {
            return Err(Rejection::CountryCode);
        }
        let number = digits::<9>(group(&caps, "number")).ok_or(Rejection::Malformed)?;
        verify_mod11(&number[..8], &WEIGHTS, number[8])?;

        Ok(Self {
            is_valid: true,
            vat_registered: caps.name("vat").is_some(),
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
