use super::resource_id;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for dining tables.
    TableId,
    "table"
);

/// Occupancy of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Free,
    Occupied,
}

/// A dining table.
///
/// `status` is only ever changed by the order ledger: a table is occupied exactly
/// while some order on it is not closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub seat_count: u32,
    pub status: TableStatus,
}

impl Table {
    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }
}

/// Payload for registering a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub name: String,
    #[serde(alias = "seats")]
    pub seat_count: u32,
}

/// Tables are fixed once registered, so there is nothing to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableUpdate {}
