//! SubscriptionBuilder - configures and creates a new subscription.
//!
//! The builder accumulates trial and coupon settings, then `create` runs the
//! full workflow against the processor and the local store:
//!
//! 1. Resolve the owner's processor customer (create it, or fetch it and
//!    optionally swap the default payment method)
//! 2. Build the request payload from the plan, tax, payment method, and trial
//! 3. Apply the coupons, if any, one discount addition each
//! 4. Submit to the processor
//! 5. Persist the local record, only when the processor accepted the request

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::billing::{
    taxed_price_string, NewSubscription, Options, Subscription, SubscriptionPayload,
    TrialSettings, INITIAL_QUANTITY,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{Billable, Customer, PaymentGateway, SubscriptionOutcome, SubscriptionStore};

use super::errors::BillingError;
use super::plan_lookup::PlanLookup;

/// Fluent builder for one subscription attempt.
///
/// Configuration methods take and return the builder by value; `create` and
/// `add` consume it, so a builder cannot be submitted twice.
pub struct SubscriptionBuilder {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn SubscriptionStore>,
    plans: PlanLookup,
    owner: Arc<dyn Billable>,
    name: String,
    plan_id: String,
    trial: TrialSettings,
    coupons: Vec<String>,
}

impl SubscriptionBuilder {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn SubscriptionStore>,
        owner: Arc<dyn Billable>,
        name: impl Into<String>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            plans: PlanLookup::new(gateway.clone()),
            gateway,
            store,
            owner,
            name: name.into(),
            plan_id: plan_id.into(),
            trial: TrialSettings::default(),
            coupons: Vec::new(),
        }
    }

    /// Sets the trial length in days.
    pub fn trial_days(mut self, days: u32) -> Self {
        self.trial.days = Some(days);
        self
    }

    /// Forces a zero-length trial, whatever `trial_days` says.
    pub fn skip_trial(mut self) -> Self {
        self.trial.skip = true;
        self
    }

    /// Adds a coupon to apply. Each call adds its own discount entry, so the
    /// same code given twice is applied twice.
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupons.push(code.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn trial(&self) -> TrialSettings {
        self.trial
    }

    pub fn coupons(&self) -> &[String] {
        &self.coupons
    }

    /// Creates the subscription with no token and no customer options.
    pub async fn add(self, subscription_options: Options) -> Result<Subscription, BillingError> {
        self.create(None, Options::new(), subscription_options).await
    }

    /// Creates the subscription on the processor and records it locally.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the configured plan id is not on the processor
    /// - `Remote` if the processor rejects the request (nothing is persisted)
    /// - `Gateway` / `Persistence` when a collaborator fails
    pub async fn create(
        self,
        token: Option<&str>,
        customer_options: Options,
        subscription_options: Options,
    ) -> Result<Subscription, BillingError> {
        let owner_id = self.owner.owner_id();

        let customer = self.resolve_customer(token, customer_options).await?;
        debug!(
            owner_id = %owner_id,
            customer_id = %customer.id,
            "Resolved remote customer"
        );

        let payload = self.build_payload(subscription_options).await?;
        debug!(
            owner_id = %owner_id,
            plan_id = %self.plan_id,
            "Submitting subscription request"
        );

        let remote = match self.gateway.create_subscription(payload).await? {
            SubscriptionOutcome::Created(remote) => remote,
            SubscriptionOutcome::Rejected { message } => {
                warn!(
                    owner_id = %owner_id,
                    plan_id = %self.plan_id,
                    reason = %message,
                    "Payment processor rejected subscription"
                );
                return Err(BillingError::remote(message));
            }
        };

        let attributes = NewSubscription {
            name: self.name,
            remote_id: remote.id,
            plan_id: self.plan_id,
            quantity: INITIAL_QUANTITY,
            trial_ends_at: self.trial.ends_at(Timestamp::now()),
            ends_at: None,
        };
        let subscription = self.store.create_subscription(&owner_id, attributes).await?;

        info!(
            owner_id = %owner_id,
            subscription_id = %subscription.id,
            remote_id = %subscription.remote_id,
            plan_id = %subscription.plan_id,
            "Subscription created"
        );

        Ok(subscription)
    }

    /// Builds the request payload without submitting it.
    ///
    /// Computed fields are overlaid with `subscription_options` (caller wins),
    /// then each configured coupon is appended to the discount additions.
    pub async fn build_payload(
        &self,
        subscription_options: Options,
    ) -> Result<SubscriptionPayload, BillingError> {
        let plan = self.plans.find_plan(&self.plan_id).await?;
        let tax_percentage = self.owner.tax_percentage();
        let price = taxed_price_string(plan.price, tax_percentage)
            .ok_or_else(|| BillingError::price_out_of_range(&plan.id, tax_percentage))?;
        let payment_method = self.owner.default_payment_method().await?;

        let mut payload =
            SubscriptionPayload::base(&plan.id, price, &payment_method.token, self.trial.terms())
                .merge(subscription_options);

        for coupon in &self.coupons {
            payload.add_coupon(coupon);
            debug!(plan_id = %self.plan_id, coupon = %coupon, "Applied coupon");
        }

        Ok(payload)
    }

    async fn resolve_customer(
        &self,
        token: Option<&str>,
        customer_options: Options,
    ) -> Result<Customer, BillingError> {
        if self.owner.remote_customer_id().is_none() {
            let customer = self
                .owner
                .create_as_remote_customer(token, customer_options)
                .await?;
            return Ok(customer);
        }

        let customer = self.owner.fetch_as_remote_customer().await?;
        if let Some(token) = token {
            self.owner.update_default_payment_method(token).await?;
        }
        Ok(customer)
    }
}
