//! Subscription-creation request payload.
//!
//! The payload is a JSON object whose keys belong to the payment processor's
//! API. It is built from computed fields and then overlaid with caller
//! options, so it stays an open map rather than a closed struct.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::trial::TrialTerms;

/// Free-form option map passed through to the processor.
pub type Options = Map<String, Value>;

pub const PLAN_ID: &str = "planId";
pub const PRICE: &str = "price";
pub const PAYMENT_METHOD_TOKEN: &str = "paymentMethodToken";
pub const TRIAL_PERIOD: &str = "trialPeriod";
pub const TRIAL_DURATION: &str = "trialDuration";
pub const TRIAL_DURATION_UNIT: &str = "trialDurationUnit";
pub const DISCOUNTS: &str = "discounts";
pub const DISCOUNTS_ADD: &str = "add";
pub const INHERITED_FROM_ID: &str = "inheritedFromId";

/// Request body for the processor's subscription-creation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionPayload(Options);

impl SubscriptionPayload {
    /// Builds the computed fields of a new subscription request.
    pub fn base(
        plan_id: &str,
        price: String,
        payment_method_token: &str,
        trial: TrialTerms,
    ) -> Self {
        let mut fields = Options::new();
        fields.insert(PLAN_ID.to_string(), json!(plan_id));
        fields.insert(PRICE.to_string(), json!(price));
        fields.insert(PAYMENT_METHOD_TOKEN.to_string(), json!(payment_method_token));
        fields.insert(TRIAL_PERIOD.to_string(), json!(trial.trial_period));
        fields.insert(TRIAL_DURATION.to_string(), json!(trial.trial_duration));
        fields.insert(
            TRIAL_DURATION_UNIT.to_string(),
            json!(trial.trial_duration_unit),
        );
        Self(fields)
    }

    /// Overlays caller options; a key present in `options` replaces the
    /// computed value wholesale.
    pub fn merge(mut self, options: Options) -> Self {
        for (key, value) in options {
            self.0.insert(key, value);
        }
        self
    }

    /// Appends a coupon to `discounts.add`.
    ///
    /// Existing discount entries are kept. Each call adds one entry, so the
    /// same code applied twice yields two entries.
    pub fn add_coupon(&mut self, code: &str) {
        let entry = json!({ INHERITED_FROM_ID: code });

        let discounts = self
            .0
            .entry(DISCOUNTS.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !discounts.is_object() {
            *discounts = Value::Object(Map::new());
        }

        if let Value::Object(discounts) = discounts {
            let additions = discounts
                .entry(DISCOUNTS_ADD.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if additions.is_null() {
                *additions = Value::Array(Vec::new());
            }
            // A lone entry object is kept as the first element of the list.
            if !additions.is_array() {
                let existing = additions.take();
                *additions = Value::Array(vec![existing]);
            }
            if let Value::Array(list) = additions {
                list.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.get(PLAN_ID).and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<&str> {
        self.get(PRICE).and_then(Value::as_str)
    }

    pub fn trial_period(&self) -> Option<bool> {
        self.get(TRIAL_PERIOD).and_then(Value::as_bool)
    }

    pub fn trial_duration(&self) -> Option<u64> {
        self.get(TRIAL_DURATION).and_then(Value::as_u64)
    }

    /// Entries under `discounts.add`, empty if none.
    pub fn discount_additions(&self) -> &[Value] {
        self.get(DISCOUNTS)
            .and_then(|d| d.get(DISCOUNTS_ADD))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn as_map(&self) -> &Options {
        &self.0
    }

    pub fn into_map(self) -> Options {
        self.0
    }
}
