//! # Order Ledger
//!
//! Owns every [`Order`] and drives the order state machine. Occupancy follows the
//! orders: a table is occupied exactly while at least one order on it is not closed.
//! The ledger is the only caller of the table actor's occupancy actions, and because
//! it handles one request at a time, a close racing a create on the same table is
//! simply serialized.

use super::error::OrderError;
use super::message::{LedgerRequest, Payment};
use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, OrderClient, TableClient};
use crate::model::{LineItem, Order, OrderCreate, OrderId, OrderStatus, Table, TableId};
use crate::money::Money;
use crate::table_actor::TableError;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Dependencies injected into the ledger when it starts.
#[derive(Clone)]
pub struct LedgerContext {
    pub tables: TableClient,
    pub catalog: CatalogClient,
    /// Reject orders whose `total` differs from the sum of their lines.
    pub strict_totals: bool,
}

/// Orders and tables read in one step, for the statistics service.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub orders: Vec<Order>,
    pub tables: Vec<Table>,
}

/// The order actor.
///
/// Ids come from a counter that only advances when an order is actually stored, so
/// they are strictly increasing and a rejected create leaves no gap and no residue.
pub struct OrderLedger {
    receiver: mpsc::Receiver<LedgerRequest>,
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

fn table_failure(e: TableError) -> OrderError {
    OrderError::ActorCommunicationError(e.to_string())
}

impl OrderLedger {
    pub fn new(buffer_size: usize) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let ledger = Self {
            receiver,
            orders: BTreeMap::new(),
            next_id: 1,
        };
        (ledger, OrderClient::new(sender))
    }

    /// Runs the ledger until every [`OrderClient`] is dropped.
    pub async fn run(mut self, ctx: LedgerContext) {
        info!(entity_type = "Order", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Create { params, respond_to } => {
                    debug!(entity_type = "Order", ?params, "Create");
                    let result = self.create(params, &ctx).await;
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Get { id, respond_to } => {
                    let result = self.order(id).cloned();
                    debug!(entity_type = "Order", %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                LedgerRequest::List { respond_to } => {
                    debug!(entity_type = "Order", size = self.orders.len(), "List");
                    let _ = respond_to.send(Ok(self.orders.values().cloned().collect()));
                }
                LedgerRequest::SetStatus {
                    id,
                    status,
                    respond_to,
                } => {
                    debug!(entity_type = "Order", %id, %status, "SetStatus");
                    let result = self.set_status(id, status, &ctx).await;
                    let _ = respond_to.send(result);
                }
                LedgerRequest::RecordPayment {
                    id,
                    payment,
                    respond_to,
                } => {
                    debug!(entity_type = "Order", %id, ?payment, "RecordPayment");
                    let result = self.record_payment(id, payment);
                    let _ = respond_to.send(result);
                }
                LedgerRequest::FreeTable {
                    table_id,
                    respond_to,
                } => {
                    debug!(entity_type = "Order", %table_id, "FreeTable");
                    let result = self.free_table(table_id, &ctx).await;
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Snapshot { respond_to } => {
                    let result = ctx
                        .tables
                        .list_tables()
                        .await
                        .map_err(table_failure)
                        .map(|tables| LedgerSnapshot {
                            orders: self.orders.values().cloned().collect(),
                            tables,
                        });
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type = "Order", size = self.orders.len(), "Shutdown");
    }

    fn order(&self, id: OrderId) -> Result<&Order, OrderError> {
        self.orders
            .get(&id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    fn has_open_order(&self, table_id: TableId, except: Option<OrderId>) -> bool {
        self.orders
            .values()
            .any(|o| o.table_id == table_id && o.status.is_open() && Some(o.id) != except)
    }

    fn debug_check_occupancy(&self, table_id: TableId, occupied: bool) {
        debug_assert_eq!(
            self.has_open_order(table_id, None),
            occupied,
            "occupancy of {table_id} out of step with its orders"
        );
    }

    async fn create(&mut self, params: OrderCreate, ctx: &LedgerContext) -> Result<OrderId, OrderError> {
        let OrderCreate {
            table_id,
            employee_id,
            line_items,
            total,
        } = params;

        match ctx.tables.get_table(table_id).await {
            Ok(_) => {}
            Err(TableError::NotFound(_)) => {
                warn!(%table_id, "Create rejected: unknown table");
                return Err(OrderError::InvalidReference(format!("{table_id} does not exist")));
            }
            Err(e) => return Err(table_failure(e)),
        }

        if line_items.is_empty() {
            return Err(OrderError::InvalidInput("an order needs at least one line item".into()));
        }
        let mut lines = Vec::with_capacity(line_items.len());
        for input in line_items {
            if input.quantity == 0 {
                return Err(OrderError::InvalidInput(format!(
                    "quantity for {} must be positive",
                    input.item_id
                )));
            }
            if input.unit_price.is_some_and(|p| p.is_negative()) {
                return Err(OrderError::InvalidInput(format!(
                    "unit price for {} must not be negative",
                    input.item_id
                )));
            }
            if input.unit_price.is_some_and(|p| p.exceeds_limit()) {
                return Err(OrderError::InvalidInput(format!(
                    "unit price for {} exceeds {}",
                    input.item_id,
                    Money::limit()
                )));
            }
            let item = match ctx.catalog.get_item(input.item_id).await {
                Ok(item) if item.active => item,
                Ok(item) => {
                    return Err(OrderError::InvalidReference(format!("{} is not on the menu", item.id)));
                }
                Err(CatalogError::NotFound(_)) => {
                    return Err(OrderError::InvalidReference(format!(
                        "{} does not exist",
                        input.item_id
                    )));
                }
                Err(e) => return Err(OrderError::ActorCommunicationError(e.to_string())),
            };
            lines.push(LineItem {
                item_id: item.id,
                quantity: input.quantity,
                unit_price: input.unit_price.unwrap_or(item.price),
            });
        }

        if total.is_negative() {
            return Err(OrderError::InvalidInput(format!("total {total} is negative")));
        }
        if total.exceeds_limit() {
            return Err(OrderError::InvalidInput(format!(
                "total {total} exceeds {}",
                Money::limit()
            )));
        }
        let computed = lines
            .iter()
            .try_fold(Money::ZERO, |sum, line| sum.checked_add(line.amount()?))
            .ok_or_else(|| OrderError::InvalidInput("line items overflow the order amount".into()))?;
        if computed != total {
            if ctx.strict_totals {
                return Err(OrderError::InvalidInput(format!(
                    "total {total} does not match line items ({computed})"
                )));
            }
            warn!(%table_id, %total, %computed, "Order total differs from line items");
        }

        ctx.tables.mark_occupied(table_id).await.map_err(table_failure)?;

        let id = OrderId(self.next_id);
        self.next_id += 1;
        let order = Order {
            id,
            table_id,
            employee_id,
            line_items: lines,
            total,
            status: OrderStatus::New,
            created_at: Utc::now(),
            payment_method: None,
            paid_amount: None,
            paid_at: None,
        };
        self.orders.insert(id, order);
        self.debug_check_occupancy(table_id, true);
        info!(entity_type = "Order", %id, %table_id, %total, size = self.orders.len(), "Created");
        Ok(id)
    }

    async fn set_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
        ctx: &LedgerContext,
    ) -> Result<Order, OrderError> {
        let current = self.order(id)?;
        let (from, table_id) = (current.status, current.table_id);
        if !from.can_transition_to(status) {
            warn!(%id, %from, to = %status, "Transition rejected");
            return Err(OrderError::InvalidTransition(format!("{from} -> {status}")));
        }

        let mut frees_table = false;
        if status == OrderStatus::Closed && !self.has_open_order(table_id, Some(id)) {
            ctx.tables.mark_free(table_id).await.map_err(table_failure)?;
            frees_table = true;
        }

        let order = self
            .orders
            .get_mut(&id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        order.status = status;
        let updated = order.clone();

        if status == OrderStatus::Closed {
            self.debug_check_occupancy(table_id, !frees_table);
        }
        info!(entity_type = "Order", %id, %from, to = %status, frees_table, "Updated");
        Ok(updated)
    }

    fn record_payment(&mut self, id: OrderId, payment: Payment) -> Result<Order, OrderError> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        if matches!(order.status, OrderStatus::Paid | OrderStatus::Closed) {
            warn!(%id, status = %order.status, "Payment rejected");
            return Err(OrderError::InvalidState(format!("{id} is already {}", order.status)));
        }

        order.payment_method = Some(payment.method);
        order.paid_amount = Some(payment.amount);
        order.status = OrderStatus::Paid;
        order.paid_at = Some(Utc::now());
        info!(entity_type = "Order", %id, amount = %payment.amount, "Paid");
        Ok(order.clone())
    }

    async fn free_table(&mut self, table_id: TableId, ctx: &LedgerContext) -> Result<bool, OrderError> {
        match ctx.tables.get_table(table_id).await {
            Ok(_) => {}
            Err(TableError::NotFound(_)) => return Err(OrderError::NotFound(table_id.to_string())),
            Err(e) => return Err(table_failure(e)),
        }
        if self.has_open_order(table_id, None) {
            warn!(%table_id, "Free rejected: open orders");
            return Err(OrderError::InvalidState(format!("{table_id} still has open orders")));
        }
        let changed = ctx.tables.mark_free(table_id).await.map_err(table_failure)?;
        self.debug_check_occupancy(table_id, false);
        info!(%table_id, changed, "Table freed");
        Ok(changed)
    }
}
