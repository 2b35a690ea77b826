//! Tests for the application error taxonomy.

use rstest::rstest;

use super::AppError;

fn invariant() -> AppError {
    AppError::InvariantViolation {
        field: "quantity_dead".to_string(),
        message: "proposed 50 exceeds remaining 40".to_string(),
    }
}

fn validation() -> AppError {
    AppError::Validation {
        field: "quantity_kg".to_string(),
        message: "must not be negative".to_string(),
    }
}

#[rstest]
#[case(AppError::NotFound(String::new()), 404, "NOT_FOUND")]
#[case(validation(), 400, "VALIDATION_ERROR")]
#[case(invariant(), 422, "INVARIANT_VIOLATION")]
#[case(AppError::Conflict(String::new()), 409, "CONFLICT")]
#[case(AppError::Database(String::new()), 500, "DATABASE_ERROR")]
#[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
fn status_and_error_codes(
    #[case] error: AppError,
    #[case] status: u16,
    #[case] code: &'static str,
) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn invariant_message_names_field_and_bound() {
    let message = invariant().to_string();
    assert!(message.contains("quantity_dead"));
    assert!(message.contains("remaining 40"));
}
