//! Digit extraction helpers for matched patterns.

use regex::Captures;

/// Collect exactly `N` ASCII digits from `text`, skipping any other byte.
///
/// Returns `None` when `text` holds fewer or more than `N` digits.
pub(crate) fn digits<const N: usize>(text: &str) -> Option<[u32; N]> {
    let mut out = [0; N];
    let mut count = 0;
    for b in text.bytes().filter(u8::is_ascii_digit) {
        *out.get_mut(count)? = u32::from(b - b'0');
        count += 1;
    }
    (count == N).then_some(out)
}

/// Interpret base-10 digits as a number.
pub(crate) fn number(digits: &[u32]) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
}

/// Text of a named group, empty when the group did not participate.
pub(crate) fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}
