//! Weighted-sum check digit primitives shared by the jurisdiction validators.
//!
//! All functions work on already-extracted base-10 digits (`0..=9`), never on
//! raw input text.

use super::error::Rejection;

/// Check character alphabet for the Finnish modulo-31 scheme (G, I, O, Q omitted).
pub const MOD31_ALPHABET: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Sum of `digits[i] * weights[i]`. Extra elements on either side are ignored.
#[inline]
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Sum all base-10 digits of a number (`16 -> 7`).
#[inline]
pub fn sum_all_digits(number: u32) -> u32 {
    let mut sum = 0;
    let mut num = number;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

/// Map a weighted sum to its modulus-11 check digit.
///
/// Residue `0` gives `0`, residue `r` gives `11 - r`. Residue `1` would need
/// check digit `10` and is reported as [`Rejection::UnrepresentableCheckDigit`].
pub fn mod11_check_digit(sum: u32) -> Result<u32, Rejection> {
    match sum % 11 {
        0 => Ok(0),
        1 => Err(Rejection::UnrepresentableCheckDigit),
        r => Ok(11 - r),
    }
}

/// Compute the modulus-11 check digit of `digits` under `weights`.
pub fn mod11(digits: &[u32], weights: &[u32]) -> Result<u32, Rejection> {
    mod11_check_digit(weighted_sum(digits, weights))
}

/// Verify a modulus-11 check digit.
pub fn verify_mod11(digits: &[u32], weights: &[u32], check: u32) -> Result<(), Rejection> {
    if mod11(digits, weights)? == check {
        Ok(())
    } else {
        Err(Rejection::ChecksumMismatch)
    }
}

/// Luhn-style check digit, walking `payload` right to left.
///
/// Multipliers alternate 2, 1, 2, ... starting at the rightmost payload digit.
/// Each product contributes the sum of its own digits.
pub fn luhn_check_digit(payload: &[u32]) -> u32 {
    let total: u32 = payload
        .iter()
        .rev()
        .zip([2, 1].into_iter().cycle())
        .map(|(d, m)| sum_all_digits(d * m))
        .sum();
    (10 - total % 10) % 10
}

/// Digit-doubling check digit, walking `payload` left to right.
///
/// Digits at even (0-based) positions are doubled and split into their digit
/// sum; odd positions are added as-is. Every residue maps to a digit.
pub fn doubling_check_digit(payload: &[u32]) -> u32 {
    let total: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { sum_all_digits(d * 2) } else { d })
        .sum();
    (10 - total % 10) % 10
}

/// Modulus-11 check character with weights cycling 2..=7 from the right.
///
/// Residue `0` gives `'0'`, residue `10` gives `'-'`, any other residue `r`
/// gives `11 - r`. Residue `1` has no single-character encoding.
pub fn mod11_cyclic_check_char(payload: &[u32]) -> Result<char, Rejection> {
    let sum: u32 = payload
        .iter()
        .rev()
        .zip((2..=7).cycle())
        .map(|(d, w)| d * w)
        .sum();
    match sum % 11 {
        0 => Ok('0'),
        10 => Ok('-'),
        1 => Err(Rejection::UnrepresentableCheckDigit),
        r => char::from_digit(11 - r, 10).ok_or(Rejection::UnrepresentableCheckDigit),
    }
}

/// Modulo-31 check character for a nine-digit numeric payload.
pub fn mod31_check_char(value: u32) -> char {
    char::from(MOD31_ALPHABET[(value % 31) as usize])
}

/// True when every digit equals the first one.
pub fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}
