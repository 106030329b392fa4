//! Occupancy transitions for [`Table`](crate::model::Table).
//!
//! Only the order ledger sends these; see [`crate::order_actor`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    MarkOccupied,
    MarkFree,
}

/// `true` when the action actually changed the status. Repeating an action is a no-op.
pub type TableActionResult = bool;
