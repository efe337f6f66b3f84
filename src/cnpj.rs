use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a CNPJ, check digits included.
pub(crate) const CNPJ_DIGIT_COUNT: usize = 14;
// Digits covered by the first check digit
const CNPJ_BASE_DIGIT_COUNT: usize = 12;

/// Why a candidate string was rejected.
///
/// The distinction exists for logging and tests only. Form layers surface a
/// single "must be a valid CNPJ" message whatever the reason, so which check
/// failed is not leaked to end users.
#[derive(Error, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CnpjError {
    /// The input did not contain exactly 14 digits.
    #[error("input does not contain exactly 14 digits")]
    WrongLength,
    /// All 14 digits are identical.
    #[error("all 14 digits are identical")]
    RepeatedDigit,
    /// The two trailing digits differ from the computed check digits.
    #[error("check digits do not match")]
    CheckDigitMismatch,
}

/// Validates a candidate CNPJ.
///
/// Every character that is not a decimal digit is dropped before checking, so
/// `11.444.777/0001-61` and `11444777000161` validate identically. The checks
/// run in a fixed order and the first failure wins: [`CnpjError::WrongLength`],
/// then [`CnpjError::RepeatedDigit`], then [`CnpjError::CheckDigitMismatch`].
/// Rejection is an ordinary outcome of checking untrusted input, never a
/// panic, and the input is neither retained nor rewritten.
pub fn validate(input: &str) -> Result<(), CnpjError> {
    // Collect digits from the input, ignoring any surrounding formatting
    let mut digits: Vec<u32> = Vec::with_capacity(CNPJ_DIGIT_COUNT);
    for c in input.chars() {
        if let Some(x) = c.to_digit(10) {
            digits.push(x);
        }
    }

    if digits.len() != CNPJ_DIGIT_COUNT {
        return Err(CnpjError::WrongLength);
    }

    // Degenerate sequences such as 00000000000000 carry a valid checksum but
    // are not real registrations.
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CnpjError::RepeatedDigit);
    }

    let mut base = digits[..CNPJ_BASE_DIGIT_COUNT].to_vec();
    let v1 = check_digit(&base);
    base.push(v1);
    let v2 = check_digit(&base);

    // Compare the computed check digits with the provided ones
    if digits[CNPJ_DIGIT_COUNT - 2] != v1 || digits[CNPJ_DIGIT_COUNT - 1] != v2 {
        return Err(CnpjError::CheckDigitMismatch);
    }

    Ok(())
}

/// Boolean form of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

// https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
// Weights start at `base.len() - 7` and decrease by 1 per position, wrapping
// back to 9 whenever they would drop below 2. One routine covers both check
// digits: the second pass runs on the 13-digit base formed by appending the
// first computed digit.
fn check_digit(base: &[u32]) -> u32 {
    let mut weight = base.len() as u32 - 7;
    let mut sum = 0;
    for &digit in base {
        sum += digit * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }

    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}
