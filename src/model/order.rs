use super::resource_id;
use super::{EmployeeId, ItemId, TableId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

resource_id!(
    /// Type-safe identifier for orders. Allocated by the ledger, never reused.
    OrderId,
    "order"
);

/// Lifecycle state of an order.
///
/// ```text
/// new <-> preparing <-> ready <-> served ──payment──> paid ──> closed
///   └──────────────┴──────────┴──────────┴────────────────────> closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Served,
    Paid,
    Closed,
}

impl OrderStatus {
    /// Anything short of `closed` keeps the table occupied.
    pub fn is_open(self) -> bool {
        self != OrderStatus::Closed
    }

    /// Orders the kitchen still has to work on.
    pub fn is_in_kitchen(self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::Preparing)
    }

    fn is_working(self) -> bool {
        matches!(
            self,
            OrderStatus::New | OrderStatus::Preparing | OrderStatus::Ready | OrderStatus::Served
        )
    }

    /// Whether a status update may move an order from `self` to `next`.
    ///
    /// `paid` is only reachable through a recorded payment, never through a status
    /// update, and nothing leaves `closed`.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match (self, next) {
            (OrderStatus::Closed, _) => false,
            (_, OrderStatus::Closed) => true,
            (_, OrderStatus::Paid) => false,
            (OrderStatus::Paid, _) => false,
            (from, to) => from.is_working() && to.is_working(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Paid => "paid",
            OrderStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for status names outside the lifecycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderStatus::New),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "served" => Ok(OrderStatus::Served),
            "paid" => Ok(OrderStatus::Paid),
            "closed" => Ok(OrderStatus::Closed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One priced line on an order. Prices are frozen at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: ItemId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl LineItem {
    /// `None` when the line overflows the decimal range.
    pub fn amount(&self) -> Option<Money> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// A line as submitted by the till. A missing `unitPrice` is taken from the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub item_id: ItemId,
    #[serde(alias = "qty")]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<Money>,
}

impl LineItemInput {
    pub fn new(item_id: ItemId, quantity: u32) -> Self {
        Self {
            item_id,
            quantity,
            unit_price: None,
        }
    }

    pub fn priced(item_id: ItemId, quantity: u32, unit_price: Money) -> Self {
        Self {
            item_id,
            quantity,
            unit_price: Some(unit_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub table_id: TableId,
    pub employee_id: EmployeeId,
    pub line_items: Vec<LineItem>,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Σ quantity × unit price over the line items, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.line_items
            .iter()
            .try_fold(Money::ZERO, |sum, line| sum.checked_add(line.amount()?))
    }
}

/// Payload for opening an order on a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_id: TableId,
    pub employee_id: EmployeeId,
    #[serde(alias = "items")]
    pub line_items: Vec<LineItemInput>,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn working_states_move_freely() {
        for from in [New, Preparing, Ready, Served] {
            for to in [New, Preparing, Ready, Served] {
                assert!(from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn closing_is_allowed_from_everything_but_closed() {
        for from in [New, Preparing, Ready, Served, Paid] {
            assert!(from.can_transition_to(Closed));
        }
        assert!(!Closed.can_transition_to(Closed));
    }

    #[test]
    fn paid_and_closed_are_sticky() {
        assert!(!Paid.can_transition_to(Served));
        assert!(!Paid.can_transition_to(New));
        assert!(!Closed.can_transition_to(New));
        assert!(!New.can_transition_to(Paid));
        assert!(!Paid.can_transition_to(Paid));
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("preparing".parse::<OrderStatus>(), Ok(Preparing));
        assert_eq!(
            "cooking".parse::<OrderStatus>(),
            Err(UnknownStatus("cooking".into()))
        );
        assert!("Closed".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn line_input_accepts_qty_alias() {
        let input: LineItemInput = serde_json::from_str(r#"{"itemId":1,"qty":2}"#).unwrap();
        assert_eq!(input, LineItemInput::new(ItemId(1), 2));
    }

    #[test]
    fn unpaid_order_omits_payment_fields() {
        let order = Order {
            id: OrderId(1),
            table_id: TableId(1),
            employee_id: EmployeeId(2),
            line_items: vec![LineItem {
                item_id: ItemId(1),
                quantity: 2,
                unit_price: Money::from_cents(250),
            }],
            total: Money::from_cents(500),
            status: New,
            created_at: Utc::now(),
            payment_method: None,
            paid_amount: None,
            paid_at: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "new");
        assert_eq!(json["tableId"], 1);
        assert_eq!(json["lineItems"][0]["unitPrice"], 2.5);
        assert!(json.get("paidAt").is_none());
        assert_eq!(order.line_total(), Some(Money::from_cents(500)));
    }
}
