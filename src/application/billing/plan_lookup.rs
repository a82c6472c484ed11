//! PlanLookup - resolves a plan id against the processor's plan list.

use std::sync::Arc;

use tracing::warn;

use crate::domain::billing::Plan;
use crate::ports::PaymentGateway;

use super::errors::BillingError;

/// Finds plans by id.
///
/// Every lookup lists all plans from the processor and scans them in order;
/// nothing is cached between calls.
#[derive(Clone)]
pub struct PlanLookup {
    gateway: Arc<dyn PaymentGateway>,
}

impl PlanLookup {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the first plan whose id equals `plan_id` exactly.
    pub async fn find_plan(&self, plan_id: &str) -> Result<Plan, BillingError> {
        let plans = self.gateway.list_plans().await?;

        match plans.into_iter().find(|plan| plan.has_id(plan_id)) {
            Some(plan) => Ok(plan),
            None => {
                warn!(plan_id = %plan_id, "Plan not found on payment processor");
                Err(BillingError::plan_not_found(plan_id))
            }
        }
    }
}
