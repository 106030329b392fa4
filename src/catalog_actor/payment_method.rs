//! [`ActorEntity`] implementation for [`PaymentMethod`].

use super::error::CatalogError;
use crate::model::{PaymentMethod, PaymentMethodCreate, PaymentMethodId, PaymentMethodUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

/// Payment methods have no custom operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodAction {}

fn required(field: &str, value: String) -> Result<String, CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidInput(format!("{field} is required")));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for PaymentMethod {
    type Id = PaymentMethodId;
    type Create = PaymentMethodCreate;
    type Update = PaymentMethodUpdate;
    type Action = PaymentMethodAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(
        id: PaymentMethodId,
        params: PaymentMethodCreate,
    ) -> Result<Self, CatalogError> {
        Ok(PaymentMethod {
            id,
            name: required("name", params.name)?,
            code: required("code", params.code)?,
            created_at: Utc::now(),
        })
    }

    /// Codes identify the method on payments and must not collide.
    fn unique_key(&self) -> Option<String> {
        Some(self.code.clone())
    }

    async fn on_update(&mut self, update: PaymentMethodUpdate, _ctx: &()) -> Result<(), CatalogError> {
        match update {}
    }

    async fn handle_action(&mut self, action: PaymentMethodAction, _ctx: &()) -> Result<(), CatalogError> {
        match action {}
    }
}
