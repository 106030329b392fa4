//! Read-only daily figures over the ledger and the table registry.

use crate::clients::OrderClient;
use crate::model::{Order, Table};
use crate::money::Money;
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Orders created on the UTC day of `as_of`.
    pub total_orders: usize,
    /// Sum of those orders' totals.
    pub total_sales: Money,
    /// Orders still waiting on the kitchen (`new` or `preparing`), any day.
    pub open_orders: usize,
    pub occupied_tables: usize,
}

impl DailySummary {
    pub fn from_snapshot(orders: &[Order], tables: &[Table], as_of: DateTime<Utc>) -> Self {
        let day = as_of.date_naive();
        let (total_orders, total_sales) = orders
            .iter()
            .filter(|o| o.created_at.date_naive() == day)
            .fold((0, Money::ZERO), |(count, sales), o| (count + 1, sales + o.total));

        Self {
            total_orders,
            total_sales,
            open_orders: orders.iter().filter(|o| o.status.is_in_kitchen()).count(),
            occupied_tables: tables.iter().filter(|t| t.is_occupied()).count(),
        }
    }
}

#[derive(Clone)]
pub struct StatisticsService {
    orders: OrderClient,
}

impl StatisticsService {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    /// Figures for the UTC day containing `as_of`.
    pub async fn daily_summary(&self, as_of: DateTime<Utc>) -> Result<DailySummary, OrderError> {
        let snapshot = self.orders.snapshot().await?;
        Ok(DailySummary::from_snapshot(
            &snapshot.orders,
            &snapshot.tables,
            as_of,
        ))
    }
}
