//! Tests for guess input normalization and validation.

use codebreaker::{CodeInput, ValidationError, code_is_submittable, normalize_code, validate_code};

#[test]
fn normalize_strips_non_digit_characters() {
    assert_eq!(normalize_code("12a-3 4"), "1234");
    assert_eq!(normalize_code("abc"), "");
    assert_eq!(normalize_code(" 0 9 "), "09");
}

#[test]
fn normalize_caps_at_four_digits() {
    assert_eq!(normalize_code("123456"), "1234");
    assert_eq!(normalize_code("9x8y7z6w5"), "9876");
}

#[test]
fn empty_and_partial_entries_report_no_error() {
    for entry in ["", "1", "12", "123", "111"] {
        assert!(
            validate_code(entry).is_ok(),
            "{:?} should not report an error while still typing",
            entry
        );
    }
}

#[test]
fn repeated_digits_rejected_with_unique_message() {
    assert_eq!(validate_code("1123"), Err(ValidationError::DuplicateDigits));
    assert_eq!(validate_code("1111"), Err(ValidationError::DuplicateDigits));
    assert_eq!(
        ValidationError::DuplicateDigits.to_string(),
        "All digits must be unique"
    );
}

#[test]
fn distinct_digits_accepted() {
    for entry in ["1234", "0987", "5063"] {
        assert_eq!(validate_code(entry), Ok(()));
    }
}

#[test]
fn accepts_iff_all_four_digits_distinct() {
    // Every 4-digit string, accept exactly when pairwise distinct.
    for n in 0..10_000u32 {
        let code = format!("{:04}", n);
        let mut digits: Vec<char> = code.chars().collect();
        digits.sort_unstable();
        digits.dedup();
        let distinct = digits.len() == 4;
        assert_eq!(
            validate_code(&code).is_ok(),
            distinct,
            "validate({:?}) disagreed with distinctness",
            code
        );
    }
}

#[test]
fn submission_requires_full_length_and_no_error() {
    assert!(!code_is_submittable(""));
    assert!(!code_is_submittable("123"));
    assert!(!code_is_submittable("1123"));
    assert!(code_is_submittable("1234"));
}

#[test]
fn code_input_normalizes_every_edit() {
    let mut input = CodeInput::new();
    for c in "1a2b3c4d5e".chars() {
        input.push(c);
    }
    assert_eq!(input.value(), "1234");
    assert!(input.is_submittable());

    input.backspace();
    assert_eq!(input.value(), "123");
    assert!(input.error().is_none());
    assert!(!input.is_submittable());

    input.set("9-9 8 7");
    assert_eq!(input.value(), "9987");
    assert_eq!(input.error(), Some(ValidationError::DuplicateDigits));
    assert!(!input.is_submittable());

    input.clear();
    assert_eq!(input.value(), "");
}
