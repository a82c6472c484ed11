//! Application layer - orchestration of domain operations across ports.

pub mod billing;

pub use billing::{BillingError, BillingService, PlanLookup, SubscriptionBuilder};
