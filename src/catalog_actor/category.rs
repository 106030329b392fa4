//! [`ActorEntity`] implementation for [`Category`].

use super::error::CatalogError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Categories are never removed, only hidden from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAction {
    Deactivate,
}

fn required_name(name: String) -> Result<String, CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidInput("category name is required".into()));
    }
    Ok(name)
}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CatalogError> {
        Ok(Category {
            id,
            name: required_name(params.name)?,
            active: true,
        })
    }

    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CatalogError> {
        match update {}
    }

    async fn handle_action(&mut self, action: CategoryAction, _ctx: &()) -> Result<(), CatalogError> {
        match action {
            CategoryAction::Deactivate => self.active = false,
        }
        Ok(())
    }
}
