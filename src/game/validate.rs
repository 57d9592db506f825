//! Guess and secret-code input validation.
//!
//! The same rules gate both the secret code entered when starting a game
//! and every guess submitted during one: four ASCII digits, pairwise
//! distinct. Entries shorter than four digits are "still typing" and report
//! no error; only complete entries are judged.

/// Required code length in digits.
pub const CODE_LEN: usize = 4;

/// Reason a complete code entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ValidationError {
    /// A digit occurs more than once.
    #[display("All digits must be unique")]
    DuplicateDigits,
}

/// Strips all non-digit characters and caps the result at four digits.
///
/// Applied unconditionally to every edit before validation, so the rest of
/// the code only ever sees digit strings of length 0..=4.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LEN)
        .collect()
}

/// Checks a code entry. Entries shorter than [`CODE_LEN`] report no error.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().count() < CODE_LEN {
        return Ok(());
    }
    for (i, c) in code.chars().enumerate() {
        if code.chars().skip(i + 1).any(|other| other == c) {
            return Err(ValidationError::DuplicateDigits);
        }
    }
    Ok(())
}

/// True when `code` may be submitted: exactly four characters and no
/// validation error. This conjunction is the sole gate on submission.
pub fn code_is_submittable(code: &str) -> bool {
    code.chars().count() == CODE_LEN && validate_code(code).is_ok()
}

/// Owned input buffer for a four-digit code.
///
/// Keeps itself normalized on every edit and exposes the current
/// validation state for inline display.
#[derive(Debug, Clone, Default)]
pub struct CodeInput {
    value: String,
}

impl CodeInput {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (normalized) contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the buffer with the normalized form of `raw`.
    pub fn set(&mut self, raw: &str) {
        self.value = normalize_code(raw);
    }

    /// Appends one typed character, dropping non-digits and overflow.
    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.value.chars().count() < CODE_LEN {
            self.value.push(c);
        }
    }

    /// Removes the last digit, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Validation error for the current contents, if any.
    pub fn error(&self) -> Option<ValidationError> {
        validate_code(&self.value).err()
    }

    /// True when the current contents may be submitted.
    pub fn is_submittable(&self) -> bool {
        code_is_submittable(&self.value)
    }
}
