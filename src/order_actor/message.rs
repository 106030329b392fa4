//! Requests understood by the [`OrderLedger`](super::OrderLedger).

use super::error::OrderError;
use super::ledger::LedgerSnapshot;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, TableId};
use crate::money::Money;
use tokio::sync::oneshot;

/// One-shot reply channel carrying the ledger's answer.
pub type Reply<T> = oneshot::Sender<Result<T, OrderError>>;

/// A payment to record against an order. The method code is already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub method: String,
    pub amount: Money,
}

#[derive(Debug)]
pub enum LedgerRequest {
    Create {
        params: OrderCreate,
        respond_to: Reply<OrderId>,
    },
    Get {
        id: OrderId,
        respond_to: Reply<Order>,
    },
    List {
        respond_to: Reply<Vec<Order>>,
    },
    SetStatus {
        id: OrderId,
        status: OrderStatus,
        respond_to: Reply<Order>,
    },
    RecordPayment {
        id: OrderId,
        payment: Payment,
        respond_to: Reply<Order>,
    },
    FreeTable {
        table_id: TableId,
        respond_to: Reply<bool>,
    },
    Snapshot {
        respond_to: Reply<LedgerSnapshot>,
    },
}
