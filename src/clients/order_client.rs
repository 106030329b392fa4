use crate::model::{Order, OrderCreate, OrderId, OrderStatus, TableId};
use crate::money::Money;
use crate::order_actor::{LedgerRequest, LedgerSnapshot, OrderError, Payment, Reply};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the order ledger.
///
/// Payments are recorded through
/// [`PaymentProcessor`](crate::services::PaymentProcessor), which checks the method
/// against the catalog first.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Reply<R>) -> LedgerRequest,
    ) -> Result<R, OrderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".into()))?;
        response
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor dropped response channel".into()))?
    }

    /// Opens an order and marks its table occupied.
    #[instrument(skip(self, params), fields(table_id = %params.table_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        self.request(|respond_to| LedgerRequest::Create { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.request(|respond_to| LedgerRequest::Get { id, respond_to })
            .await
    }

    /// Every order, ascending by id.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.request(|respond_to| LedgerRequest::List { respond_to })
            .await
    }

    /// Moves an order through its lifecycle. Closing the last open order on a table
    /// frees the table.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::SetStatus {
            id,
            status,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub(crate) async fn record_payment(
        &self,
        id: OrderId,
        method: String,
        amount: Money,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        let payment = Payment { method, amount };
        self.request(|respond_to| LedgerRequest::RecordPayment {
            id,
            payment,
            respond_to,
        })
        .await
    }

    /// Frees a table that has no open orders. Returns `true` if it was occupied.
    #[instrument(skip(self))]
    pub async fn free_table(&self, table_id: TableId) -> Result<bool, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::FreeTable {
            table_id,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<LedgerSnapshot, OrderError> {
        self.request(|respond_to| LedgerRequest::Snapshot { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closed_ledger_is_a_communication_error() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let client = OrderClient::new(sender);
        assert!(matches!(
            client.list_orders().await,
            Err(OrderError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn forwards_status_changes() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = OrderClient::new(sender);

        let task = tokio::spawn(async move { client.set_status(OrderId(4), OrderStatus::Ready).await });

        match receiver.recv().await {
            Some(LedgerRequest::SetStatus {
                id,
                status,
                respond_to,
            }) => {
                assert_eq!(id, OrderId(4));
                assert_eq!(status, OrderStatus::Ready);
                respond_to
                    .send(Err(OrderError::NotFound(id.to_string())))
                    .unwrap();
            }
            other => panic!("unexpected request: {other:?}"),
        }

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::NotFound("order_4".into()))
        );
    }
}
