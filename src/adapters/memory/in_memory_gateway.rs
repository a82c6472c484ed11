//! In-memory payment gateway implementation.
//!
//! This adapter provides an in-memory implementation of the `PaymentGateway` port.
//! Useful for:
//! - Development without processor credentials
//! - Integration tests of the subscription workflow
//!
//! It behaves like a sandbox processor: ids are assigned sequentially
//! (`cus_1`, `sub_1`, ...), requests for unknown plans are rejected, and a
//! rejection message can be forced for every subsequent request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::billing::{Options, Plan, SubscriptionPayload};
use crate::ports::{
    Customer, PaymentError, PaymentGateway, PaymentMethod, RemoteSubscription,
    SubscriptionOutcome,
};

#[derive(Default)]
struct GatewayState {
    plans: Vec<Plan>,
    customers: HashMap<String, Customer>,
    submitted: Vec<SubscriptionPayload>,
    rejection: Option<String>,
    next_id: u64,
}

impl GatewayState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }
}

/// In-memory implementation of the PaymentGateway port.
///
/// Thread-safe via internal `Mutex`. Does not persist data across restarts.
#[derive(Default)]
pub struct InMemoryPaymentGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryPaymentGateway {
    /// Creates a gateway with no plans.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway offering `plans`, in order.
    pub fn with_plans(plans: Vec<Plan>) -> Self {
        let gateway = Self::new();
        gateway.state().plans = plans;
        gateway
    }

    pub fn add_plan(&self, plan: Plan) {
        self.state().plans.push(plan);
    }

    /// Rejects every following subscription request with `message`.
    pub fn reject_with(&self, message: impl Into<String>) {
        self.state().rejection = Some(message.into());
    }

    /// Stops forcing rejections.
    pub fn accept(&self) {
        self.state().rejection = None;
    }

    /// Every payload submitted so far, oldest first.
    pub fn submitted(&self) -> Vec<SubscriptionPayload> {
        self.state().submitted.clone()
    }

    /// Looks up a customer created through this gateway.
    pub fn customer(&self, customer_id: &str) -> Option<Customer> {
        self.state().customers.get(customer_id).cloned()
    }

    pub fn customer_count(&self) -> usize {
        self.state().customers.len()
    }

    fn state(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn list_plans(&self) -> Result<Vec<Plan>, PaymentError> {
        Ok(self.state().plans.clone())
    }

    async fn create_customer(
        &self,
        token: Option<&str>,
        _options: Options,
    ) -> Result<Customer, PaymentError> {
        let mut state = self.state();
        let customer = Customer {
            id: state.next_id("cus"),
            default_payment_method: token.map(PaymentMethod::new),
        };
        state.customers.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    async fn fetch_customer(&self, customer_id: &str) -> Result<Customer, PaymentError> {
        self.state()
            .customers
            .get(customer_id)
            .cloned()
            .ok_or_else(|| PaymentError::not_found(&format!("Customer {}", customer_id)))
    }

    async fn create_subscription(
        &self,
        payload: SubscriptionPayload,
    ) -> Result<SubscriptionOutcome, PaymentError> {
        let mut state = self.state();

        let known_plan = payload
            .plan_id()
            .map(|id| state.plans.iter().any(|plan| plan.has_id(id)))
            .unwrap_or(false);
        state.submitted.push(payload);

        if let Some(message) = state.rejection.clone() {
            return Ok(SubscriptionOutcome::Rejected { message });
        }
        if !known_plan {
            return Ok(SubscriptionOutcome::Rejected {
                message: "Plan ID is invalid.".to_string(),
            });
        }

        Ok(SubscriptionOutcome::Created(RemoteSubscription {
            id: state.next_id("sub"),
        }))
    }
}
