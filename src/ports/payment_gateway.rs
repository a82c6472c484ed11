//! Payment gateway port for the remote payment processor.
//!
//! Defines the contract for the processor's plan, customer, and subscription
//! APIs. The wire format is owned by the processor; implementations translate
//! between it and the types below.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any subscription-capable processor
//! - **Pass-through options**: customer and subscription options are forwarded as-is
//! - **No retries**: failures are reported once, as returned by the processor

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::billing::{Options, Plan, SubscriptionPayload};

/// Port for payment processor integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// List every plan defined on the processor.
    ///
    /// No filtering or pagination: one call returns the full set.
    async fn list_plans(&self) -> Result<Vec<Plan>, PaymentError>;

    /// Create a customer, optionally vaulting a payment method token.
    async fn create_customer(
        &self,
        token: Option<&str>,
        options: Options,
    ) -> Result<Customer, PaymentError>;

    /// Fetch an existing customer by processor id.
    async fn fetch_customer(&self, customer_id: &str) -> Result<Customer, PaymentError>;

    /// Submit a subscription-creation request.
    ///
    /// A processor-side rejection is a normal outcome, not an `Err`;
    /// `Err` is reserved for transport and authentication failures.
    async fn create_subscription(
        &self,
        payload: SubscriptionPayload,
    ) -> Result<SubscriptionOutcome, PaymentError>;
}

/// Customer in the payment system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Provider's customer ID.
    pub id: String,

    /// Token of the customer's default payment method, if one is vaulted.
    pub default_payment_method: Option<PaymentMethod>,
}

/// A vaulted payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub token: String,
}

impl PaymentMethod {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Subscription as created on the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSubscription {
    /// Provider's subscription ID.
    pub id: String,
}

/// Result of a subscription-creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    /// The processor accepted the request.
    Created(RemoteSubscription),

    /// The processor refused the request; `message` is its diagnostic text.
    Rejected { message: String },
}

impl SubscriptionOutcome {
    /// Maps the processor's `{ success, message, subscription }` result shape.
    pub fn from_result(
        success: bool,
        message: Option<String>,
        subscription: Option<RemoteSubscription>,
    ) -> Self {
        match (success, subscription) {
            (true, Some(subscription)) => SubscriptionOutcome::Created(subscription),
            (true, None) => SubscriptionOutcome::Rejected {
                message: message
                    .unwrap_or_else(|| "processor returned no subscription".to_string()),
            },
            (false, _) => SubscriptionOutcome::Rejected {
                message: message.unwrap_or_default(),
            },
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SubscriptionOutcome::Created(_))
    }
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create a not found error.
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            PaymentErrorCode::NotFound,
            format!("{} not found", resource),
        )
    }

    /// Create a validation error (processor refused the input).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ValidationError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network or connectivity issue.
    NetworkError,

    /// Requested resource not found.
    NotFound,

    /// Processor rejected the input (bad token, unknown field).
    ValidationError,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::ValidationError => "validation_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_with_subscription_is_created() {
        let outcome = SubscriptionOutcome::from_result(
            true,
            None,
            Some(RemoteSubscription {
                id: "sub_1".to_string(),
            }),
        );
        assert_eq!(
            outcome,
            SubscriptionOutcome::Created(RemoteSubscription {
                id: "sub_1".to_string()
            })
        );
        assert!(outcome.is_created());
    }

    #[test]
    fn outcome_failure_keeps_message_verbatim() {
        let outcome = SubscriptionOutcome::from_result(
            false,
            Some("Payment method token is invalid.".to_string()),
            None,
        );
        assert_eq!(
            outcome,
            SubscriptionOutcome::Rejected {
                message: "Payment method token is invalid.".to_string()
            }
        );
    }

    #[test]
    fn outcome_success_without_subscription_is_rejected() {
        let outcome = SubscriptionOutcome::from_result(true, None, None);
        assert!(!outcome.is_created());
    }

    #[test]
    fn payment_error_displays_code_and_message() {
        let err = PaymentError::network("connection reset");
        assert_eq!(err.to_string(), "network_error: connection reset");
    }

    #[test]
    fn payment_error_with_provider_code() {
        let err = PaymentError::validation("bad token").with_provider_code("91565");
        assert_eq!(err.code, PaymentErrorCode::ValidationError);
        assert_eq!(err.provider_code.as_deref(), Some("91565"));
    }

    #[test]
    fn not_found_names_resource() {
        let err = PaymentError::not_found("Customer cus_1");
        assert_eq!(err.code, PaymentErrorCode::NotFound);
        assert_eq!(err.message, "Customer cus_1 not found");
    }
}
