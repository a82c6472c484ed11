//! Billing module - plans, subscription records, and request payloads.
//!
//! # Module Structure
//!
//! - `plan` - Plan snapshot fetched from the processor
//! - `price` - Tax-inclusive price calculation and formatting
//! - `trial` - Trial settings and the payload fields they produce
//! - `payload` - Subscription-creation request body
//! - `subscription` - Locally persisted subscription record

pub mod payload;
mod plan;
mod price;
mod subscription;
mod trial;

pub use payload::{Options, SubscriptionPayload};
pub use plan::Plan;
pub use price::{effective_price, format_price, taxed_price_string, PRICE_SCALE};
pub use subscription::{NewSubscription, Subscription, INITIAL_QUANTITY};
pub use trial::{TrialSettings, TrialTerms, TRIAL_DURATION_UNIT};
