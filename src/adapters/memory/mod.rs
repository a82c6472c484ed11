//! In-memory adapters.
//!
//! - `InMemoryPaymentGateway` - sandbox-like processor with configurable plans
//! - `InMemorySubscriptionStore` - subscription records kept in a vector
//! - `InMemoryBillable` - owner entity tracking its remote customer

mod in_memory_billable;
mod in_memory_gateway;
mod in_memory_subscription_store;

pub use in_memory_billable::InMemoryBillable;
pub use in_memory_gateway::InMemoryPaymentGateway;
pub use in_memory_subscription_store::InMemorySubscriptionStore;
