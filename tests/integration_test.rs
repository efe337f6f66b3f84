use cnpj::{format_cnpj, is_valid, sanitize, validate, CnpjError};

// A form layer validates the raw field value as submitted, stores the digit
// form on success, and renders the formatted form back to the client.
#[test]
fn form_submission_round_trip() {
    let submitted = "  11.444.777/0001-61 ";

    assert!(is_valid(submitted));
    assert_eq!(validate(submitted), Ok(()));

    let stored = sanitize(submitted);
    assert_eq!(stored, "11444777000161");
    assert!(is_valid(&stored));

    assert_eq!(format_cnpj(&stored), "11.444.777/0001-61");
}

#[test]
fn rejected_submissions_report_a_reason() {
    assert_eq!(validate("11.444.777/0001"), Err(CnpjError::WrongLength));
    assert_eq!(validate("00000000000000"), Err(CnpjError::RepeatedDigit));
    assert_eq!(
        validate("11.444.777/0001-62"),
        Err(CnpjError::CheckDigitMismatch)
    );
}
