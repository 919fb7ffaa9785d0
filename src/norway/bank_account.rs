//! Norwegian bank account numbers (kontonummer), `XXXX.YY.ZZZZC`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::checksum::verify_mod11;
use crate::core::digits::{digits, group};
use crate::core::{NationalId, Rejection, non_empty};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<number>[0-9]{4}[ .]?[0-9]{2}[ .]?[0-9]{5})$")
        .expect("kontonummer pattern compiles")
});

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Decoded Norwegian bank account number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorwegianBankAccountNumber {
    /// Whether the number is accepted.
    pub is_valid: bool,
    /// False when the account group is `00`; such numbers are accepted
    /// without evaluating the control digit.
    pub checksum_verified: bool,
}

impl NationalId for NorwegianBankAccountNumber {
    const SCHEME: &'static str = "no-kontonummer";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let number = digits::<11>(group(&caps, "number")).ok_or(Rejection::Malformed)?;

        if number[4] == 0 && number[5] == 0 {
            return Ok(Self {
                is_valid: true,
                checksum_verified: false,
            });
        }
        verify_mod11(&number[..10], &WEIGHTS, number[10])?;

        Ok(Self {
            is_valid: true,
            checksum_verified: true,
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
