//! Payment processing: validate, then hand the payment to the ledger.

use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, OrderClient};
use crate::model::{Order, OrderId};
use crate::money::Money;
use crate::order_actor::OrderError;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct PaymentProcessor {
    catalog: CatalogClient,
    orders: OrderClient,
}

impl PaymentProcessor {
    pub fn new(catalog: CatalogClient, orders: OrderClient) -> Self {
        Self { catalog, orders }
    }

    /// Settles an order.
    ///
    /// The amount must be positive and within [`Money::limit`]. `method_code` must name
    /// a payment method in the catalog. The order moves to `paid`; its table stays
    /// occupied until the order is closed.
    #[instrument(skip(self))]
    pub async fn pay_order(
        &self,
        order_id: OrderId,
        method_code: &str,
        amount: Money,
    ) -> Result<Order, OrderError> {
        if !amount.is_positive() {
            return Err(OrderError::InvalidInput(format!(
                "payment amount must be positive, got {amount}"
            )));
        }
        if amount.exceeds_limit() {
            return Err(OrderError::InvalidInput(format!(
                "payment amount {amount} exceeds {}",
                Money::limit()
            )));
        }
        let method = match self.catalog.get_payment_method(method_code).await {
            Ok(method) => method,
            Err(CatalogError::NotFound(_)) => {
                return Err(OrderError::InvalidPaymentMethod(method_code.to_string()));
            }
            Err(e) => return Err(OrderError::ActorCommunicationError(e.to_string())),
        };

        let order = self.orders.record_payment(order_id, method.code, amount).await?;
        info!(%order_id, method = method_code, %amount, "Payment recorded");
        Ok(order)
    }
}
