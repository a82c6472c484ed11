//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - The remote payment processor (plans, customers, subscriptions)
//! - `Billable` - The owning entity's customer and payment-method capabilities
//! - `SubscriptionStore` - Persistence of local subscription records

mod billable;
mod payment_gateway;
mod subscription_store;

pub use billable::Billable;
pub use payment_gateway::{
    Customer, PaymentError, PaymentErrorCode, PaymentGateway, PaymentMethod, RemoteSubscription,
    SubscriptionOutcome,
};
pub use subscription_store::SubscriptionStore;
