//! BillingService - entry point for owners' subscription operations.

use std::sync::Arc;

use crate::domain::billing::{Plan, Subscription};
use crate::ports::{Billable, PaymentGateway, SubscriptionStore};

use super::errors::BillingError;
use super::plan_lookup::PlanLookup;
use super::subscription_builder::SubscriptionBuilder;

/// Wires the gateway and store together and hands out builders.
///
/// # Example
///
/// ```ignore
/// let billing = BillingService::new(gateway, store);
///
/// let subscription = billing
///     .new_subscription(owner.clone(), "default", "pro-monthly")
///     .trial_days(14)
///     .with_coupon("LAUNCH")
///     .create(Some("tok_visa"), Options::new(), Options::new())
///     .await?;
/// ```
#[derive(Clone)]
pub struct BillingService {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn SubscriptionStore>,
}

impl BillingService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, store: Arc<dyn SubscriptionStore>) -> Self {
        Self { gateway, store }
    }

    /// Starts a new subscription for `owner` on `plan_id`, stored as `name`.
    pub fn new_subscription(
        &self,
        owner: Arc<dyn Billable>,
        name: impl Into<String>,
        plan_id: impl Into<String>,
    ) -> SubscriptionBuilder {
        SubscriptionBuilder::new(
            self.gateway.clone(),
            self.store.clone(),
            owner,
            name,
            plan_id,
        )
    }

    /// Resolves a plan on the processor.
    pub async fn find_plan(&self, plan_id: &str) -> Result<Plan, BillingError> {
        PlanLookup::new(self.gateway.clone()).find_plan(plan_id).await
    }

    /// The owner's subscription called `name`, if any.
    pub async fn subscription(
        &self,
        owner: &dyn Billable,
        name: &str,
    ) -> Result<Option<Subscription>, BillingError> {
        Ok(self.store.find_for_owner(&owner.owner_id(), name).await?)
    }

    /// All of the owner's subscriptions, oldest first.
    pub async fn subscriptions(&self, owner: &dyn Billable) -> Result<Vec<Subscription>, BillingError> {
        Ok(self.store.list_for_owner(&owner.owner_id()).await?)
    }

    /// True if the owner has an active subscription `name`, optionally on `plan_id`.
    pub async fn subscribed(
        &self,
        owner: &dyn Billable,
        name: &str,
        plan_id: Option<&str>,
    ) -> Result<bool, BillingError> {
        let subscribed = self
            .subscription(owner, name)
            .await?
            .map(|sub| sub.is_active() && plan_id.map_or(true, |plan| sub.has_plan(plan)))
            .unwrap_or(false);
        Ok(subscribed)
    }
}
