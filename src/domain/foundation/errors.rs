//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Not found errors
    PlanNotFound,
    CustomerNotFound,

    // Remote processor errors
    PaymentRejected,
    GatewayError,

    // Infrastructure errors
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            ErrorCode::PaymentRejected => "PAYMENT_REJECTED",
            ErrorCode::GatewayError => "GATEWAY_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("plan_id");
        assert_eq!(format!("{}", err), "Field 'plan_id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("price", "not a decimal");
        assert_eq!(
            format!("{}", err),
            "Field 'price' has invalid format: not a decimal"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "insert failed");
        assert_eq!(format!("{}", err), "[DATABASE_ERROR] insert failed");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::DatabaseError, "insert failed")
            .with_detail("table", "subscriptions")
            .with_detail("reason", "duplicate key");

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.details.get("table"), Some(&"subscriptions".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"duplicate key".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_category() {
        let err: DomainError = ValidationError::empty_field("owner_id").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(err.message.contains("owner_id"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::PlanNotFound), "PLAN_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
    }
}
