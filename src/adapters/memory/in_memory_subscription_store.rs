//! In-memory subscription store.
//!
//! Keeps subscription records in a vector in creation order. Suitable for
//! tests and single-process development; nothing survives a restart.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::billing::{NewSubscription, Subscription};
use crate::domain::foundation::{DomainError, OwnerId, SubscriptionId, Timestamp};
use crate::ports::SubscriptionStore;

/// In-memory implementation of the SubscriptionStore port.
#[derive(Default)]
pub struct InMemorySubscriptionStore {
    records: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored record.
    pub fn records(&self) -> Vec<Subscription> {
        self.guard().clone()
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if no records exist.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Subscription>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    async fn create_subscription(
        &self,
        owner_id: &OwnerId,
        attributes: NewSubscription,
    ) -> Result<Subscription, DomainError> {
        let record = Subscription::from_new(
            SubscriptionId::new(),
            owner_id.clone(),
            attributes,
            Timestamp::now(),
        );
        self.guard().push(record.clone());
        Ok(record)
    }

    async fn find_for_owner(
        &self,
        owner_id: &OwnerId,
        name: &str,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .guard()
            .iter()
            .rev()
            .find(|r| &r.owner_id == owner_id && r.name == name)
            .cloned())
    }

    async fn list_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Subscription>, DomainError> {
        Ok(self
            .guard()
            .iter()
            .filter(|r| &r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
