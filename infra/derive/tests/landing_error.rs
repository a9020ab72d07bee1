mod demo {
    use std::borrow::Cow;

    #[landing_derive::landing_error]
    pub enum DemoError {
        #[error("I/O error{}: {source}", format_context(.context))]
        Io { source: std::io::Error, context: Option<Cow<'static, str>> },

        #[error("Please fill in your {field}.")]
        Missing { field: &'static str },

        #[error("Internal error{}: {message}", format_context(.context))]
        Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    }
}

use demo::{DemoError, DemoErrorExt};

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), DemoError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O error: gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading preferences").unwrap_err();
    assert_eq!(err.to_string(), "I/O error (Reading preferences): gone");
}

#[test]
fn context_overrides_on_own_results() {
    let result: Result<(), DemoError> = Err("boom".into());
    let err = result.context("while testing").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while testing): boom");
}

#[test]
fn variants_without_context_keep_their_message() {
    let result: Result<(), DemoError> = Err(DemoError::Missing { field: "email" });
    let err = result.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "Please fill in your email.");
}

#[test]
fn owned_strings_become_internal_errors() {
    let err = DemoError::from(format!("code {}", 7));
    assert!(matches!(err, DemoError::Internal { .. }));
}
