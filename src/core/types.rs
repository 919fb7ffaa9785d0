use serde::{Deserialize, Serialize};

/// Legal sex encoded in a personal identification number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Not encoded, or the identifier did not validate.
    #[default]
    Unknown,
    /// Odd digit.
    Male,
    /// Even digit.
    Female,
}

impl Sex {
    /// Odd digit is male, even digit is female.
    pub fn from_parity(digit: u32) -> Self {
        if digit % 2 == 0 {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert_eq!(Sex::from_parity(0), Sex::Female);
        assert_eq!(Sex::from_parity(8), Sex::Female);
        assert_eq!(Sex::from_parity(9), Sex::Male);
        assert_eq!(Sex::default(), Sex::Unknown);
    }
}
