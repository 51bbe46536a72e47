use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] whose outermost message is the given message.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(error) => pretty_assertions::assert_eq!(error.to_string(), message),
    }
}

/// [`assert`]s that the result is an [`Error`] whose full context chain contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got Ok"),
        Err(error) => {
            let full = format!("{error:#}");
            assert!(
                full.contains(message),
                "error \"{full}\" does not contain \"{message}\""
            );
        }
    }
}
