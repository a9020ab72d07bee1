use crate::error::RegistrationError;
use crate::field::Field;
use landing_domain::registration::RegistrationInput;
use landing_kernel::validation::{is_full_name, is_valid_email};

const INLINE_EMAIL: &str = "Please enter a valid email address.";
const INLINE_NAME: &str = "Please enter your full name.";

/// Checks a trimmed submission. Rules run in order and the first failure is returned:
/// every field present, then the email shape, then a first and last name.
///
/// # Errors
/// Returns the [`RegistrationError`] of the first failing rule.
pub fn validate(input: &RegistrationInput) -> Result<(), RegistrationError> {
    for field in Field::ALL {
        if value_of(input, field).is_empty() {
            return Err(RegistrationError::MissingField { field });
        }
    }

    if !is_valid_email(&input.email) {
        return Err(RegistrationError::InvalidEmail { email: input.email.clone() });
    }

    if !is_full_name(&input.name) {
        return Err(RegistrationError::IncompleteName { name: input.name.clone() });
    }

    Ok(())
}

/// The message to show under `field` after it loses focus, if any.
///
/// Only email and name are checked live. Blank values never produce a message.
#[must_use]
pub fn inline_error(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match field {
        Field::Email if !is_valid_email(value) => Some(INLINE_EMAIL),
        Field::Name if !is_full_name(value) => Some(INLINE_NAME),
        _ => None,
    }
}

fn value_of(input: &RegistrationInput, field: Field) -> &str {
    match field {
        Field::Name => &input.name,
        Field::Email => &input.email,
        Field::Phone => &input.phone,
        Field::Country => &input.country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use landing_domain::registration::FormValues;

    fn input(name: &str, email: &str, phone: &str, country: &str) -> RegistrationInput {
        let values = FormValues {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            country: country.into(),
        };
        RegistrationInput::new(&values, Utc::now(), "course", "test")
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate(&input("Jane Doe", "jane@example.com", "0550123456", "Algeria")).is_ok());
    }

    #[test]
    fn first_missing_field_is_named() {
        let err = validate(&input("Jane Doe", "  ", "", "Algeria")).unwrap_err();
        assert!(matches!(err, RegistrationError::MissingField { field: Field::Email }));
        assert_eq!(err.to_string(), "Please fill in your email.");

        let err = validate(&input("Jane Doe", "jane@example.com", "055", "")).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in your country.");
    }

    #[test]
    fn email_is_checked_before_name() {
        let err = validate(&input("Jane", "jane.example.com", "0550", "DZ")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn single_name_is_rejected() {
        let err = validate(&input("Jane", "jane@example.com", "0550", "DZ")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter your full name (first and last name).");
        assert!(err.is_validation());
    }

    #[test]
    fn inline_messages() {
        assert_eq!(inline_error(Field::Email, "nope"), Some("Please enter a valid email address."));
        assert_eq!(inline_error(Field::Email, " jane@example.com "), None);
        assert_eq!(inline_error(Field::Name, "Jane"), Some("Please enter your full name."));
        assert_eq!(inline_error(Field::Name, "   "), None);
        assert_eq!(inline_error(Field::Phone, "x"), None);
    }
}
