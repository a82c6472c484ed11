//! Billable owner port.
//!
//! The owner is the host application's entity that subscribes (an account,
//! a team). It knows its own processor-side customer and payment method and
//! how to create or refresh them; the subscription workflow only calls into
//! these capabilities.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::billing::Options;
use crate::domain::foundation::OwnerId;

use super::payment_gateway::{Customer, PaymentError, PaymentMethod};

/// Port for the entity that owns subscriptions.
#[async_trait]
pub trait Billable: Send + Sync {
    /// Local identity, used as the key for stored subscriptions.
    fn owner_id(&self) -> OwnerId;

    /// Processor customer id, `None` until the owner exists remotely.
    fn remote_customer_id(&self) -> Option<String>;

    /// Tax percentage applied on top of plan prices (e.g. `20` for 20%).
    fn tax_percentage(&self) -> Decimal;

    /// Create the owner as a processor customer.
    ///
    /// Implementations record the returned customer id so later calls to
    /// [`Billable::remote_customer_id`] see it.
    async fn create_as_remote_customer(
        &self,
        token: Option<&str>,
        options: Options,
    ) -> Result<Customer, PaymentError>;

    /// Fetch the owner's existing processor customer.
    async fn fetch_as_remote_customer(&self) -> Result<Customer, PaymentError>;

    /// Replace the owner's default payment method with `token`.
    async fn update_default_payment_method(&self, token: &str) -> Result<(), PaymentError>;

    /// The owner's current default payment method.
    async fn default_payment_method(&self) -> Result<PaymentMethod, PaymentError>;
}
