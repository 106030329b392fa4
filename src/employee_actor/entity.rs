//! [`ActorEntity`] implementation for [`Employee`].
//!
//! The PIN doubles as the sign-in credential, so it is the entity's unique key.

use super::error::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Employees have no custom operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeAction {}

fn check_pin(pin: &str) -> Result<(), EmployeeError> {
    if pin.is_empty() || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(EmployeeError::InvalidInput("PIN must be digits".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = EmployeeAction;
    type ActionResult = ();
    type Context = ();
    type Error = EmployeeError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, EmployeeError> {
        if params.name.trim().is_empty() {
            return Err(EmployeeError::InvalidInput("name is required".into()));
        }
        check_pin(&params.pin)?;
        Ok(Employee {
            id,
            name: params.name,
            role: params.role,
            pin: params.pin,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.pin.clone())
    }

    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &()) -> Result<(), EmployeeError> {
        match update {}
    }

    async fn handle_action(&mut self, action: EmployeeAction, _ctx: &()) -> Result<(), EmployeeError> {
        match action {}
    }
}
