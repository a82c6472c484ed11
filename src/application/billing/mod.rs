//! Billing handlers.
//!
//! - `PlanLookup` - resolves plan ids against the processor
//! - `SubscriptionBuilder` - configures and creates one subscription
//! - `BillingService` - entry point that hands out builders and answers queries

mod errors;
mod plan_lookup;
mod service;
mod subscription_builder;

pub use errors::BillingError;
pub use plan_lookup::PlanLookup;
pub use service::BillingService;
pub use subscription_builder::SubscriptionBuilder;
