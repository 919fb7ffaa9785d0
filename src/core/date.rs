//! Two-digit year disambiguation and calendar checks.
//!
//! Each scheme picks an [`Era`] from whatever it encodes (a sequence number
//! range, a divider character, or the current date) and hands the
//! already de-offset day and month to [`resolve`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::Rejection;

/// How the century of a two-digit year is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Era {
    /// A fixed base year such as `1900`.
    Century(i32),
    /// Relative to a reference date: years after the reference year's
    /// two-digit year fall in the previous century. `centenarian` shifts one
    /// more century back.
    Relative {
        reference: NaiveDate,
        centenarian: bool,
    },
}

impl Era {
    /// Danish CPR table, keyed on the 4-digit sequence number.
    pub fn danish(sequence: u32, year: u32) -> Self {
        let base = if sequence <= 3999
            || (sequence <= 4999 && year >= 37)
            || ((9000..=9999).contains(&sequence) && year >= 37)
        {
            1900
        } else if (5000..=8999).contains(&sequence) && year >= 58 {
            1800
        } else {
            2000
        };
        Era::Century(base)
    }

    /// Norwegian fødselsnummer table, keyed on the 3-digit individual number.
    pub fn norwegian(individual: u32, year: u32) -> Self {
        let base = if (500..=749).contains(&individual) && year >= 55 {
            1800
        } else if individual <= 499 || (individual >= 900 && year >= 40) {
            1900
        } else {
            2000
        };
        Era::Century(base)
    }

    /// Finnish century marker: `+` 1800s, `-` 1900s, `A` 2000s.
    pub fn finnish(marker: char) -> Option<Self> {
        match marker {
            '+' => Some(Era::Century(1800)),
            '-' => Some(Era::Century(1900)),
            'A' => Some(Era::Century(2000)),
            _ => None,
        }
    }

    /// Swedish rule: relative to `reference`, `+` divider marks age 100 or more.
    pub fn swedish(reference: NaiveDate, centenarian: bool) -> Self {
        Era::Relative {
            reference,
            centenarian,
        }
    }

    /// Full four-digit year for a two-digit `year`.
    pub fn full_year(&self, year: u32) -> i32 {
        let year = year as i32;
        match *self {
            Era::Century(base) => base + year,
            Era::Relative {
                reference,
                centenarian,
            } => {
                let now = reference.year();
                let mut century = now.div_euclid(100) * 100;
                if year > now.rem_euclid(100) {
                    century -= 100;
                }
                if centenarian {
                    century -= 100;
                }
                century + year
            }
        }
    }
}

/// Resolve a two-digit year, month and day into a calendar date.
pub fn resolve(year: u32, month: u32, day: u32, era: Era) -> Result<NaiveDate, Rejection> {
    NaiveDate::from_ymd_opt(era.full_year(year), month, day).ok_or(Rejection::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn danish_table() {
        assert_eq!(Era::danish(3002, 75), Era::Century(1900));
        assert_eq!(Era::danish(4542, 35), Era::Century(2000));
        assert_eq!(Era::danish(4280, 82), Era::Century(1900));
        assert_eq!(Era::danish(5885, 96), Era::Century(1800));
        assert_eq!(Era::danish(5341, 65), Era::Century(1800));
        assert_eq!(Era::danish(5629, 57), Era::Century(2000));
        assert_eq!(Era::danish(9999, 37), Era::Century(1900));
        assert_eq!(Era::danish(9999, 36), Era::Century(2000));
    }

    #[test]
    fn norwegian_table() {
        assert_eq!(Era::norwegian(600, 60), Era::Century(1800));
        assert_eq!(Era::norwegian(600, 54), Era::Century(2000));
        assert_eq!(Era::norwegian(0, 10), Era::Century(1900));
        assert_eq!(Era::norwegian(499, 99), Era::Century(1900));
        assert_eq!(Era::norwegian(950, 40), Era::Century(1900));
        assert_eq!(Era::norwegian(950, 39), Era::Century(2000));
        assert_eq!(Era::norwegian(800, 70), Era::Century(2000));
    }

    #[test]
    fn finnish_markers() {
        assert_eq!(Era::finnish('+'), Some(Era::Century(1800)));
        assert_eq!(Era::finnish('-'), Some(Era::Century(1900)));
        assert_eq!(Era::finnish('A'), Some(Era::Century(2000)));
        assert_eq!(Era::finnish('B'), None);
        assert_eq!(Era::finnish('a'), None);
    }

    #[test]
    fn swedish_relative_year() {
        let today = date(2026, 10, 16);
        assert_eq!(Era::swedish(today, false).full_year(81), 1981);
        assert_eq!(Era::swedish(today, false).full_year(26), 2026);
        assert_eq!(Era::swedish(today, false).full_year(5), 2005);
        assert_eq!(Era::swedish(today, true).full_year(81), 1881);
        assert_eq!(Era::swedish(today, true).full_year(20), 1920);
    }

    #[test]
    fn calendar_bounds() {
        assert_eq!(resolve(80, 12, 31, Era::Century(1900)), Ok(date(1980, 12, 31)));
        assert_eq!(resolve(0, 2, 29, Era::Century(2000)), Ok(date(2000, 2, 29)));
        assert_eq!(resolve(0, 2, 29, Era::Century(1900)), Err(Rejection::InvalidDate));
        assert_eq!(resolve(80, 4, 31, Era::Century(1900)), Err(Rejection::InvalidDate));
        assert_eq!(resolve(80, 13, 1, Era::Century(1900)), Err(Rejection::InvalidDate));
        assert_eq!(resolve(80, 1, 0, Era::Century(1900)), Err(Rejection::InvalidDate));
        assert_eq!(resolve(80, 0, 1, Era::Century(1900)), Err(Rejection::InvalidDate));
    }
}
