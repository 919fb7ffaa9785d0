//! National Insurance number (NINO), e.g. `AB 12 34 56 C`.
//!
//! There is no control character; validity is the layout alone. The last
//! digit pair traditionally selects the weekday benefits are paid on.

use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::digits::{digits, group};
use crate::core::{NationalId, Rejection, non_empty};

// Prefix letters D, F, I, Q, U, V are never used; O is not used second.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-CEGHJ-PR-TW-Z][A-CEGHJ-NPR-TW-Z] ?[0-9]{2} ?[0-9]{2} ?(?<day>[0-9]{2}) ?[A-D]$",
    )
    .expect("NINO pattern compiles")
});

/// Decoded UK National Insurance number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalInsuranceNumber {
    /// Whether the prefix, digits and suffix are well formed.
    pub is_valid: bool,
    /// Weekday on which benefits are paid, from the last digit pair.
    pub benefits_day: Option<Weekday>,
}

/// Weekday for a benefits-day digit pair (`00..=99`).
fn benefits_day(pair: u32) -> Weekday {
    match pair {
        0..=19 => Weekday::Mon,
        20..=39 => Weekday::Tue,
        40..=59 => Weekday::Wed,
        60..=79 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

impl NationalId for NationalInsuranceNumber {
    const SCHEME: &'static str = "uk-nino";

    fn parse(input: &str) -> Result<Self, Rejection> {
        let caps = PATTERN
            .captures(non_empty(input)?)
            .ok_or(Rejection::Malformed)?;
        let [tens, units] = digits::<2>(group(&caps, "day")).ok_or(Rejection::Malformed)?;

        Ok(Self {
            is_valid: true,
            benefits_day: Some(benefits_day(tens * 10 + units)),
        })
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}
