//! Subscription store port (write side plus owner lookups).
//!
//! Stands in for the owner's subscriptions association: records are keyed by
//! owner and created only after the processor confirms a subscription.
//!
//! # Example
//!
//! ```ignore
//! async fn record(
//!     store: &dyn SubscriptionStore,
//!     owner_id: &OwnerId,
//!     remote_id: &str,
//! ) -> Result<Subscription, DomainError> {
//!     store
//!         .create_subscription(
//!             owner_id,
//!             NewSubscription {
//!                 name: "default".to_string(),
//!                 remote_id: remote_id.to_string(),
//!                 plan_id: "pro-monthly".to_string(),
//!                 quantity: INITIAL_QUANTITY,
//!                 trial_ends_at: None,
//!                 ends_at: None,
//!             },
//!         )
//!         .await
//! }
//! ```

use async_trait::async_trait;

use crate::domain::billing::{NewSubscription, Subscription};
use crate::domain::foundation::{DomainError, OwnerId};

/// Repository port for local subscription records.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Persist a new subscription for `owner_id` and return the stored record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create_subscription(
        &self,
        owner_id: &OwnerId,
        attributes: NewSubscription,
    ) -> Result<Subscription, DomainError>;

    /// Find the owner's most recently created subscription with `name`.
    ///
    /// Returns `None` if the owner has none by that name.
    async fn find_for_owner(
        &self,
        owner_id: &OwnerId,
        name: &str,
    ) -> Result<Option<Subscription>, DomainError>;

    /// All subscriptions of an owner, oldest first.
    async fn list_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Subscription>, DomainError>;
}
