//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the billing workflow to external systems:
//! - `memory` - In-memory gateway, store, and owner for development and tests

pub mod memory;

pub use memory::{InMemoryBillable, InMemoryPaymentGateway, InMemorySubscriptionStore};
