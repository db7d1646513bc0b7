//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Generic message returned for any shape-validation failure.
///
/// The API deliberately reports no field-level detail to the caller; field
/// errors are logged at debug level instead.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid inputs passed, please verify your data";

/// Convert validation errors to a 422 `AppError::Validation`.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    log_field_errors(&errors);
    AppError::Validation(INVALID_INPUT_MESSAGE.into())
}

/// Convert validation errors to a 400 `AppError::BadRequest`.
///
/// Place updates report shape failures as 400 rather than 422.
pub fn bad_request_error(errors: ValidationErrors) -> AppError {
    log_field_errors(&errors);
    AppError::BadRequest(INVALID_INPUT_MESSAGE.into())
}

fn log_field_errors(errors: &ValidationErrors) {
    for (field, errs) in errors.field_errors() {
        for err in errs {
            tracing::debug!(
                field = %field,
                code = %err.code,
                "Request shape validation failed"
            );
        }
    }
}

/// Normalize an email address before validation, storage, or lookup.
///
/// Trims surrounding whitespace and lowercases, so lookups are
/// case-insensitive and the uniqueness invariant holds across casings.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 5))]
        description: String,
    }

    #[test]
    fn test_validation_error_uses_generic_message() {
        let probe = Probe {
            description: "Upd".into(),
        };
        let errors = probe.validate().unwrap_err();
        match validation_error(errors) {
            AppError::Validation(msg) => assert_eq!(msg, INVALID_INPUT_MESSAGE),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_request_error_uses_generic_message() {
        let probe = Probe {
            description: "".into(),
        };
        let errors = probe.validate().unwrap_err();
        match bad_request_error(errors) {
            AppError::BadRequest(msg) => assert_eq!(msg, INVALID_INPUT_MESSAGE),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Max@Test.COM "), "max@test.com");
    }

    #[test]
    fn test_normalize_email_idempotent() {
        let once = normalize_email("User@Example.com");
        assert_eq!(normalize_email(&once), once);
    }
}
