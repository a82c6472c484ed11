//! Subscription Bridge - creates processor-side subscriptions for billable owners
//!
//! Resolves a plan on the payment processor, makes sure the owner exists
//! there as a customer, submits a subscription with tax, trial, and coupon
//! terms applied, and records the result locally.
//!
//! Entry point is [`application::BillingService`]; the processor, the
//! subscription store, and the owner are ports in [`ports`] with in-memory
//! implementations in [`adapters`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
