//! Field validation rules, the password strength scale, and the form
//! reducer.

use crate::core::theme::Tone;
use regex::Regex;
use std::sync::LazyLock;

/// Two or more letters-only words, exactly one space between words.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)+$").expect("name pattern compiles"));

/// local@domain.tld with ASCII word characters, dot, and hyphen; the tld
/// is at least two letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Score at or above which a password passes validation.
pub const PASSING_SCORE: u8 = 3;
/// Top of the strength scale; also the meter's max attribute.
pub const MAX_SCORE: u8 = 4;

/// Why the name field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameError {
    /// Field left empty (after trimming).
    Required,
    /// Not at least two letters-only words.
    Format,
}

impl NameError {
    /// User-facing message for the field's error slot.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Full name is required.",
            Self::Format => "Please enter at least two words (letters only).",
        }
    }
}

/// Why the email field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailError {
    /// Field left empty (after trimming).
    Required,
    /// Not a local@domain.tld shape.
    Format,
}

impl EmailError {
    /// User-facing message for the field's error slot.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Email is required.",
            Self::Format => "Enter a valid email address.",
        }
    }
}

/// Why the password field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordError {
    /// Field left empty.
    Required,
    /// Strength score below [`PASSING_SCORE`].
    TooWeak,
}

impl PasswordError {
    /// User-facing message for the field's error slot.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Password is required.",
            Self::TooWeak => "Password should be at least 8 chars, include uppercase, digit, symbol.",
        }
    }
}

/// Why the confirmation field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmError {
    /// Field left empty.
    Required,
    /// Not byte-for-byte equal to the password.
    Mismatch,
}

impl ConfirmError {
    /// User-facing message for the field's error slot.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Please confirm your password.",
            Self::Mismatch => "Passwords do not match.",
        }
    }
}

/// Validates the full name after trimming.
///
/// # Errors
/// [`NameError::Required`] when empty, [`NameError::Format`] when not two
/// or more letters-only words.
pub fn validate_name(value: &str) -> Result<(), NameError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NameError::Required);
    }
    if NAME_PATTERN.is_match(trimmed) {
        Ok(())
    } else {
        Err(NameError::Format)
    }
}

/// Validates the email address after trimming.
///
/// # Errors
/// [`EmailError::Required`] when empty, [`EmailError::Format`] when the
/// pattern does not match.
pub fn validate_email(value: &str) -> Result<(), EmailError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EmailError::Required);
    }
    if EMAIL_PATTERN.is_match(trimmed) {
        Ok(())
    } else {
        Err(EmailError::Format)
    }
}

/// Scores a password 0..=4, one point per satisfied criterion: length of
/// at least 8, an uppercase letter, a digit, a non-alphanumeric symbol.
#[must_use]
pub fn strength_score(password: &str) -> u8 {
    u8::from(password.chars().count() >= 8)
        + u8::from(password.chars().any(|c| c.is_ascii_uppercase()))
        + u8::from(password.chars().any(|c| c.is_ascii_digit()))
        + u8::from(password.chars().any(|c| !c.is_ascii_alphanumeric()))
}

/// Label for a strength score on the five-step scale.
#[must_use]
pub const fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Too Weak",
        1 => "Weak",
        2 => "Moderate",
        3 => "Strong",
        _ => "Excellent",
    }
}

/// Label color for a strength score.
#[must_use]
pub const fn strength_tone(score: u8) -> Tone {
    match score {
        0 | 1 => Tone::Danger,
        2 => Tone::Warning,
        _ => Tone::Success,
    }
}

/// Validates the password via its strength score. The value is not
/// trimmed; surrounding whitespace is real input here.
///
/// # Errors
/// [`PasswordError::Required`] when empty, [`PasswordError::TooWeak`] when
/// the score is below [`PASSING_SCORE`].
pub fn validate_password(value: &str) -> Result<(), PasswordError> {
    if value.is_empty() {
        return Err(PasswordError::Required);
    }
    if strength_score(value) >= PASSING_SCORE {
        Ok(())
    } else {
        Err(PasswordError::TooWeak)
    }
}

/// Validates the confirmation against the password, byte for byte.
///
/// # Errors
/// [`ConfirmError::Required`] when empty, [`ConfirmError::Mismatch`] on
/// any difference, trailing whitespace included.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), ConfirmError> {
    if confirm.is_empty() {
        return Err(ConfirmError::Required);
    }
    if confirm == password {
        Ok(())
    } else {
        Err(ConfirmError::Mismatch)
    }
}

/// Signup slice of the page store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    /// Full name field value.
    pub name: String,
    /// Last name-field validation failure, if any.
    pub name_error: Option<NameError>,
    /// Email field value.
    pub email: String,
    /// Last email-field validation failure, if any.
    pub email_error: Option<EmailError>,
    /// Password field value.
    pub password: String,
    /// Last password-field validation failure, if any.
    pub password_error: Option<PasswordError>,
    /// Confirmation field value.
    pub confirm: String,
    /// Last confirmation-field validation failure, if any.
    pub confirm_error: Option<ConfirmError>,
    /// Strength meter state: `None` until the password sees input, and
    /// again after a successful submit, else the current score. An empty
    /// meter is distinct from the score of an empty password.
    pub strength: Option<u8>,
    /// Whether the last submit attempt succeeded.
    pub submitted: bool,
}

/// Stores a name edit and revalidates the field.
pub fn edit_name(state: &mut SignupState, value: String) {
    state.name = value;
    state.name_error = validate_name(&state.name).err();
}

/// Stores an email edit and revalidates the field.
pub fn edit_email(state: &mut SignupState, value: String) {
    state.email = value;
    state.email_error = validate_email(&state.email).err();
}

/// Stores a password edit, refreshing the meter and the field's error.
/// The confirmation field is left as last computed until it changes or
/// submit runs.
pub fn edit_password(state: &mut SignupState, value: String) {
    state.password = value;
    state.strength = Some(strength_score(&state.password));
    state.password_error = validate_password(&state.password).err();
}

/// Stores a confirmation edit and revalidates it against the password.
pub fn edit_confirm(state: &mut SignupState, value: String) {
    state.confirm = value;
    state.confirm_error = validate_confirm(&state.password, &state.confirm).err();
}

/// True when every field error slot is clear.
#[must_use]
pub const fn is_valid(state: &SignupState) -> bool {
    state.name_error.is_none()
        && state.email_error.is_none()
        && state.password_error.is_none()
        && state.confirm_error.is_none()
}

/// Runs the full validation pass for a submit attempt.
///
/// Success clears the fields, empties the meter, and raises the success
/// banner; failure leaves values and freshly computed errors in place.
/// The banner drops at the start of every attempt either way.
pub fn submit(state: &mut SignupState) {
    state.submitted = false;
    state.name_error = validate_name(&state.name).err();
    state.email_error = validate_email(&state.email).err();
    state.strength = Some(strength_score(&state.password));
    state.password_error = validate_password(&state.password).err();
    state.confirm_error = validate_confirm(&state.password, &state.confirm).err();
    if is_valid(state) {
        state.name.clear();
        state.email.clear();
        state.password.clear();
        state.confirm.clear();
        state.strength = None;
        state.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> SignupState {
        let mut state = SignupState::default();
        edit_name(&mut state, "Jane Doe".to_owned());
        edit_email(&mut state, "jane@example.com".to_owned());
        edit_password(&mut state, "Abcdefg1!".to_owned());
        edit_confirm(&mut state, "Abcdefg1!".to_owned());
        state
    }

    #[test]
    fn name_accepts_two_or_more_words() {
        assert_eq!(validate_name("Jane Doe"), Ok(()));
        assert_eq!(validate_name("Jane Q Doe"), Ok(()));
        assert_eq!(validate_name("  Jane Doe  "), Ok(()));
    }

    #[test]
    fn name_rejects_single_words_digits_and_empty() {
        assert_eq!(validate_name("Jane"), Err(NameError::Format));
        assert_eq!(validate_name("jane1 doe"), Err(NameError::Format));
        assert_eq!(validate_name("Jane  Doe"), Err(NameError::Format));
        assert_eq!(validate_name(""), Err(NameError::Required));
        assert_eq!(validate_name("   "), Err(NameError::Required));
    }

    #[test]
    fn email_accepts_dotted_and_hyphenated_addresses() {
        assert_eq!(validate_email("a.b-c@sub.domain.com"), Ok(()));
        assert_eq!(validate_email("jane_doe@example.io"), Ok(()));
        assert_eq!(validate_email(" jane@example.com "), Ok(()));
    }

    #[test]
    fn email_rejects_missing_at_short_tld_and_empty() {
        assert_eq!(validate_email("no-at-sign.com"), Err(EmailError::Format));
        assert_eq!(validate_email("a@b"), Err(EmailError::Format));
        assert_eq!(validate_email("a@b.c"), Err(EmailError::Format));
        assert_eq!(validate_email(""), Err(EmailError::Required));
    }

    #[test]
    fn strength_awards_one_point_per_criterion() {
        assert_eq!(strength_score(""), 0);
        assert_eq!(strength_score("abcdefgh"), 1);
        assert_eq!(strength_score("Abcdefgh"), 2);
        assert_eq!(strength_score("Abcdefg1"), 3);
        assert_eq!(strength_score("Abcdefg1!"), 4);
    }

    #[test]
    fn strength_scale_labels_and_tones() {
        assert_eq!(strength_label(0), "Too Weak");
        assert_eq!(strength_label(1), "Weak");
        assert_eq!(strength_label(2), "Moderate");
        assert_eq!(strength_label(3), "Strong");
        assert_eq!(strength_label(4), "Excellent");
        assert_eq!(strength_tone(0), Tone::Danger);
        assert_eq!(strength_tone(1), Tone::Danger);
        assert_eq!(strength_tone(2), Tone::Warning);
        assert_eq!(strength_tone(3), Tone::Success);
        assert_eq!(strength_tone(4), Tone::Success);
    }

    #[test]
    fn password_requires_passing_score() {
        assert_eq!(validate_password(""), Err(PasswordError::Required));
        assert_eq!(validate_password("Abcdefgh"), Err(PasswordError::TooWeak));
        assert_eq!(validate_password("Abcdefg1"), Ok(()));
        assert_eq!(validate_password("Abcdefg1!"), Ok(()));
    }

    #[test]
    fn confirm_must_match_byte_for_byte() {
        assert_eq!(validate_confirm("Abcdefg1!", "Abcdefg1!"), Ok(()));
        assert_eq!(validate_confirm("Abcdefg1!", ""), Err(ConfirmError::Required));
        assert_eq!(
            validate_confirm("Abcdefg1!", "Abcdefg1! "),
            Err(ConfirmError::Mismatch)
        );
        assert_eq!(
            validate_confirm("Abcdefg1!", "abcdefg1!"),
            Err(ConfirmError::Mismatch)
        );
    }

    #[test]
    fn edits_revalidate_their_own_field() {
        let mut state = SignupState::default();
        edit_name(&mut state, "Jane".to_owned());
        assert_eq!(state.name_error, Some(NameError::Format));
        edit_name(&mut state, "Jane Doe".to_owned());
        assert_eq!(state.name_error, None);
        edit_email(&mut state, "a@b".to_owned());
        assert_eq!(state.email_error, Some(EmailError::Format));
    }

    #[test]
    fn password_edit_refreshes_meter_but_not_confirm() {
        let mut state = SignupState::default();
        edit_password(&mut state, "Abcdefg1".to_owned());
        edit_confirm(&mut state, "Abcdefg1".to_owned());
        assert_eq!(state.confirm_error, None);
        edit_password(&mut state, "Abcdefg1!".to_owned());
        assert_eq!(state.strength, Some(4));
        assert_eq!(state.confirm_error, None);
        edit_confirm(&mut state, "Abcdefg1".to_owned());
        assert_eq!(state.confirm_error, Some(ConfirmError::Mismatch));
    }

    #[test]
    fn meter_stays_empty_until_password_input() {
        let mut state = SignupState::default();
        assert_eq!(state.strength, None);
        edit_name(&mut state, "Jane Doe".to_owned());
        assert_eq!(state.strength, None);
        edit_password(&mut state, "a".to_owned());
        assert_eq!(state.strength, Some(0));
    }

    #[test]
    fn successful_submit_clears_the_form() {
        let mut state = filled_state();
        submit(&mut state);
        assert!(state.submitted);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(state.confirm.is_empty());
        assert_eq!(state.strength, None);
        assert!(is_valid(&state));
    }

    #[test]
    fn failed_submit_keeps_values_and_errors() {
        let mut state = filled_state();
        edit_email(&mut state, "not-an-email".to_owned());
        submit(&mut state);
        assert!(!state.submitted);
        assert_eq!(state.email, "not-an-email");
        assert_eq!(state.email_error, Some(EmailError::Format));
        assert_eq!(state.name, "Jane Doe");
        assert_eq!(state.name_error, None);
        assert_eq!(state.strength, Some(4));
    }

    #[test]
    fn submit_on_empty_form_populates_every_error() {
        let mut state = SignupState::default();
        submit(&mut state);
        assert!(!state.submitted);
        assert_eq!(state.name_error, Some(NameError::Required));
        assert_eq!(state.email_error, Some(EmailError::Required));
        assert_eq!(state.password_error, Some(PasswordError::Required));
        assert_eq!(state.confirm_error, Some(ConfirmError::Required));
        assert_eq!(state.strength, Some(0));
    }

    #[test]
    fn submit_success_then_resubmit_requires_fresh_input() {
        let mut state = filled_state();
        submit(&mut state);
        assert!(state.submitted);
        submit(&mut state);
        assert!(!state.submitted);
        assert_eq!(state.name_error, Some(NameError::Required));
    }
}
