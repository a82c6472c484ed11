//! Errors surfaced by the subscription workflow.
//!
//! | Error | Origin |
//! |-------|--------|
//! | PlanNotFound | plan id absent from the processor's plan list |
//! | PriceOutOfRange | taxed plan price overflows fixed-point arithmetic |
//! | Remote | processor rejected the subscription request |
//! | Gateway | customer, payment method, or plan listing call failed |
//! | Persistence | local subscription store failed |

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PaymentError, PaymentErrorCode};

/// Subscription workflow errors.
///
/// Collaborator failures are carried unchanged in `Gateway` and `Persistence`.
#[derive(Debug, Clone, Error)]
pub enum BillingError {
    #[error("Unable to find plan with id '{plan_id}'")]
    PlanNotFound { plan_id: String },

    #[error("Price of plan '{plan_id}' is out of range after applying {tax_percentage}% tax")]
    PriceOutOfRange {
        plan_id: String,
        tax_percentage: Decimal,
    },

    #[error("Subscription creation failed: {message}")]
    Remote { message: String },

    #[error(transparent)]
    Gateway(#[from] PaymentError),

    #[error(transparent)]
    Persistence(#[from] DomainError),
}

impl BillingError {
    pub fn plan_not_found(plan_id: impl Into<String>) -> Self {
        BillingError::PlanNotFound {
            plan_id: plan_id.into(),
        }
    }

    pub fn price_out_of_range(plan_id: impl Into<String>, tax_percentage: Decimal) -> Self {
        BillingError::PriceOutOfRange {
            plan_id: plan_id.into(),
            tax_percentage,
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        BillingError::Remote {
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::PlanNotFound { .. } => ErrorCode::PlanNotFound,
            BillingError::PriceOutOfRange { .. } => ErrorCode::ValidationFailed,
            BillingError::Remote { .. } => ErrorCode::PaymentRejected,
            BillingError::Gateway(err) if err.code == PaymentErrorCode::NotFound => {
                ErrorCode::CustomerNotFound
            }
            BillingError::Gateway(_) => ErrorCode::GatewayError,
            BillingError::Persistence(err) => err.code,
        }
    }

    /// The processor's rejection text, if this is a rejection.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            BillingError::Remote { message } => Some(message),
            _ => None,
        }
    }
}
