//! [`ActorEntity`] implementation for [`Item`].
//!
//! Items validate their category through the category actor's client, which is
//! injected as the actor context.

use super::error::CatalogError;
use crate::model::{Category, CategoryId, Item, ItemCreate, ItemId, ItemUpdate};
use crate::money::Money;
use actor_framework::{ActorEntity, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// Soft delete: the item disappears from the menu and can no longer be ordered.
    Deactivate,
}

fn check_price(price: Money) -> Result<Money, CatalogError> {
    if !price.is_positive() {
        return Err(CatalogError::InvalidInput(format!(
            "price must be positive, got {price}"
        )));
    }
    if price.exceeds_limit() {
        return Err(CatalogError::InvalidInput(format!(
            "price {price} exceeds {}",
            Money::limit()
        )));
    }
    Ok(price)
}

#[instrument(skip(categories))]
async fn check_category(
    categories: &ResourceClient<Category>,
    id: CategoryId,
) -> Result<(), CatalogError> {
    debug!("Validating category");
    match categories.get(id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(CatalogError::InvalidReference(format!("{id} does not exist"))),
        Err(e) => Err(CatalogError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = ();
    type Context = ResourceClient<Category>;
    type Error = CatalogError;

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, CatalogError> {
        if params.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput("item name is required".into()));
        }
        Ok(Item {
            id,
            name: params.name,
            price: check_price(params.price)?,
            category_id: params.category_id,
            active: true,
        })
    }

    async fn on_create(&mut self, categories: &ResourceClient<Category>) -> Result<(), CatalogError> {
        check_category(categories, self.category_id).await
    }

    async fn on_update(
        &mut self,
        update: ItemUpdate,
        categories: &ResourceClient<Category>,
    ) -> Result<(), CatalogError> {
        if let Some(category_id) = update.category_id {
            check_category(categories, category_id).await?;
            self.category_id = category_id;
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(name) = update.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ItemAction,
        _categories: &ResourceClient<Category>,
    ) -> Result<(), CatalogError> {
        match action {
            ItemAction::Deactivate => self.active = false,
        }
        Ok(())
    }
}
