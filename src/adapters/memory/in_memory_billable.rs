//! In-memory billable owner.
//!
//! A stand-in for the host application's account entity. It remembers its
//! processor customer id and default payment method in memory and delegates
//! customer creation and lookup to a `PaymentGateway`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::billing::Options;
use crate::domain::foundation::OwnerId;
use crate::ports::{Billable, Customer, PaymentError, PaymentGateway, PaymentMethod};

#[derive(Default)]
struct OwnerState {
    remote_customer_id: Option<String>,
    payment_method: Option<PaymentMethod>,
}

/// In-memory implementation of the Billable port.
pub struct InMemoryBillable {
    owner_id: OwnerId,
    tax_percentage: Decimal,
    gateway: Arc<dyn PaymentGateway>,
    state: Mutex<OwnerState>,
}

impl InMemoryBillable {
    /// Creates an owner with no remote customer and no tax.
    pub fn new(owner_id: OwnerId, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            owner_id,
            tax_percentage: Decimal::ZERO,
            gateway,
            state: Mutex::new(OwnerState::default()),
        }
    }

    pub fn with_tax_percentage(mut self, tax_percentage: Decimal) -> Self {
        self.tax_percentage = tax_percentage;
        self
    }

    /// Marks the owner as already known to the processor.
    pub fn with_remote_customer(self, customer_id: impl Into<String>) -> Self {
        self.state().remote_customer_id = Some(customer_id.into());
        self
    }

    /// The locally recorded default payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.state().payment_method.clone()
    }

    fn state(&self) -> MutexGuard<'_, OwnerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Billable for InMemoryBillable {
    fn owner_id(&self) -> OwnerId {
        self.owner_id.clone()
    }

    fn remote_customer_id(&self) -> Option<String> {
        self.state().remote_customer_id.clone()
    }

    fn tax_percentage(&self) -> Decimal {
        self.tax_percentage
    }

    async fn create_as_remote_customer(
        &self,
        token: Option<&str>,
        options: Options,
    ) -> Result<Customer, PaymentError> {
        let customer = self.gateway.create_customer(token, options).await?;

        let mut state = self.state();
        state.remote_customer_id = Some(customer.id.clone());
        state.payment_method = customer.default_payment_method.clone();
        Ok(customer)
    }

    async fn fetch_as_remote_customer(&self) -> Result<Customer, PaymentError> {
        let customer_id = self
            .remote_customer_id()
            .ok_or_else(|| PaymentError::not_found("Remote customer"))?;
        self.gateway.fetch_customer(&customer_id).await
    }

    async fn update_default_payment_method(&self, token: &str) -> Result<(), PaymentError> {
        self.state().payment_method = Some(PaymentMethod::new(token));
        Ok(())
    }

    async fn default_payment_method(&self) -> Result<PaymentMethod, PaymentError> {
        if let Some(method) = self.payment_method() {
            return Ok(method);
        }

        self.fetch_as_remote_customer()
            .await?
            .default_payment_method
            .ok_or_else(|| PaymentError::not_found("Default payment method"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPaymentGateway;
    use crate::ports::PaymentErrorCode;

    fn owner(gateway: Arc<InMemoryPaymentGateway>) -> InMemoryBillable {
        InMemoryBillable::new(OwnerId::new("acct-1").unwrap(), gateway)
    }

    #[tokio::test]
    async fn new_owner_has_no_remote_customer() {
        let billable = owner(Arc::new(InMemoryPaymentGateway::new()));

        assert!(billable.remote_customer_id().is_none());
        assert_eq!(billable.tax_percentage(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn creating_remote_customer_records_id_and_method() {
        let gateway = Arc::new(InMemoryPaymentGateway::new());
        let billable = owner(gateway.clone());

        let customer = billable
            .create_as_remote_customer(Some("tok_visa"), Options::new())
            .await
            .unwrap();

        assert_eq!(billable.remote_customer_id(), Some(customer.id.clone()));
        assert_eq!(
            billable.default_payment_method().await.unwrap(),
            PaymentMethod::new("tok_visa")
        );
        assert!(gateway.customer(&customer.id).is_some());
    }

    #[tokio::test]
    async fn fetch_without_remote_customer_is_not_found() {
        let billable = owner(Arc::new(InMemoryPaymentGateway::new()));

        let err = billable.fetch_as_remote_customer().await.unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::NotFound);
    }

    #[tokio::test]
    async fn updated_method_takes_precedence() {
        let gateway = Arc::new(InMemoryPaymentGateway::new());
        let customer = gateway
            .create_customer(Some("tok_old"), Options::new())
            .await
            .unwrap();
        let billable = owner(gateway).with_remote_customer(customer.id);

        assert_eq!(
            billable.default_payment_method().await.unwrap().token,
            "tok_old"
        );

        billable.update_default_payment_method("tok_new").await.unwrap();
        assert_eq!(
            billable.default_payment_method().await.unwrap().token,
            "tok_new"
        );
    }

    #[tokio::test]
    async fn missing_payment_method_is_not_found() {
        let gateway = Arc::new(InMemoryPaymentGateway::new());
        let customer = gateway.create_customer(None, Options::new()).await.unwrap();
        let billable = owner(gateway).with_remote_customer(customer.id);

        let err = billable.default_payment_method().await.unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::NotFound);
    }
}
