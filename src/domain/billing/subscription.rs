//! Local subscription record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OwnerId, SubscriptionId, Timestamp};

/// Quantity recorded for every newly created subscription.
pub const INITIAL_QUANTITY: u32 = 1;

/// Attributes for a subscription row about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscription {
    /// Local name the owner refers to the subscription by (e.g. "default").
    pub name: String,

    /// Processor-side subscription id.
    pub remote_id: String,

    /// Processor-side plan id.
    pub plan_id: String,

    pub quantity: u32,

    pub trial_ends_at: Option<Timestamp>,

    pub ends_at: Option<Timestamp>,
}

/// A persisted subscription belonging to an owner.
///
/// Created once, after the processor confirms the subscription. This crate
/// never mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub owner_id: OwnerId,
    pub name: String,
    pub remote_id: String,
    pub plan_id: String,
    pub quantity: u32,
    pub trial_ends_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Subscription {
    /// Materializes a stored record from creation attributes.
    pub fn from_new(
        id: SubscriptionId,
        owner_id: OwnerId,
        attributes: NewSubscription,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name: attributes.name,
            remote_id: attributes.remote_id,
            plan_id: attributes.plan_id,
            quantity: attributes.quantity,
            trial_ends_at: attributes.trial_ends_at,
            ends_at: attributes.ends_at,
            created_at,
        }
    }

    /// True while the trial end lies after `now`.
    pub fn on_trial(&self, now: Timestamp) -> bool {
        self.trial_ends_at
            .map(|ends| ends.is_after(&now))
            .unwrap_or(false)
    }

    /// A subscription without an end date is active.
    pub fn is_active(&self) -> bool {
        self.ends_at.is_none()
    }

    pub fn has_plan(&self, plan_id: &str) -> bool {
        self.plan_id == plan_id
    }
}
