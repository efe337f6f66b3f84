use std::borrow::Cow;

use crate::cnpj::CNPJ_DIGIT_COUNT;

/// Strips every character that is not a decimal digit, preserving order.
///
/// This is the persistence-side normalization: callers validate the raw value
/// as submitted, then store the bare digit form. [`crate::validate`] does its
/// own stripping internally and never exposes it.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Renders a CNPJ as `XX.XXX.XXX/YYYY-ZZ` for display.
///
/// Anything that does not sanitize to exactly 14 digits is returned untouched.
pub fn format_cnpj(input: &str) -> Cow<'_, str> {
    let digits = sanitize(input);
    if digits.len() != CNPJ_DIGIT_COUNT {
        return Cow::Borrowed(input);
    }

    Cow::Owned(format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    ))
}
