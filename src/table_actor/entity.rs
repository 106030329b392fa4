//! [`ActorEntity`] implementation for [`Table`].

use super::actions::{TableAction, TableActionResult};
use super::error::TableError;
use crate::model::{Table, TableCreate, TableId, TableStatus, TableUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate(name: &str, seat_count: u32) -> Result<(), TableError> {
    if name.trim().is_empty() {
        return Err(TableError::InvalidInput("name is required".into()));
    }
    if seat_count == 0 {
        return Err(TableError::InvalidInput("seatCount must be positive".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = TableActionResult;
    type Context = ();
    type Error = TableError;

    /// New tables always start free.
    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        validate(&params.name, params.seat_count)?;
        Ok(Table {
            id,
            name: params.name,
            seat_count: params.seat_count,
            status: TableStatus::Free,
        })
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), TableError> {
        match update {}
    }

    /// Tables are permanent fixtures of the floor plan.
    async fn on_delete(&self, _ctx: &()) -> Result<(), TableError> {
        Err(TableError::InvalidInput(format!("{} cannot be deleted", self.id)))
    }

    async fn handle_action(
        &mut self,
        action: TableAction,
        _ctx: &(),
    ) -> Result<TableActionResult, TableError> {
        let next = match action {
            TableAction::MarkOccupied => TableStatus::Occupied,
            TableAction::MarkFree => TableStatus::Free,
        };
        let changed = self.status != next;
        self.status = next;
        Ok(changed)
    }
}
