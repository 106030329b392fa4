//! Menu catalog: categories, items and payment methods.
//!
//! Three resource actors behind one [`CatalogClient`]. The item actor receives the
//! category client as its context so it can check `categoryId` references.

pub mod category;
pub mod error;
pub mod item;
pub mod payment_method;

pub use category::CategoryAction;
pub use error::*;
pub use item::ItemAction;
pub use payment_method::PaymentMethodAction;

use crate::clients::CatalogClient;
use crate::model::{Category, Item, PaymentMethod};
use actor_framework::{ResourceActor, ResourceClient};
use tokio::task::JoinHandle;

/// The catalog's actors, created but not yet running.
pub struct CatalogActors {
    categories: ResourceActor<Category>,
    items: ResourceActor<Item>,
    payment_methods: ResourceActor<PaymentMethod>,
}

impl CatalogActors {
    /// Spawns every catalog actor. `categories` becomes the item actor's context.
    pub fn spawn(self, categories: ResourceClient<Category>) -> Vec<JoinHandle<()>> {
        vec![
            tokio::spawn(self.categories.run(())),
            tokio::spawn(self.items.run(categories)),
            tokio::spawn(self.payment_methods.run(())),
        ]
    }
}

/// Creates the catalog actors and their client.
pub fn new(buffer_size: usize) -> (CatalogActors, CatalogClient) {
    let (categories, category_client) = ResourceActor::new(buffer_size);
    let (items, item_client) = ResourceActor::new(buffer_size);
    let (payment_methods, payment_method_client) = ResourceActor::new(buffer_size);

    let actors = CatalogActors {
        categories,
        items,
        payment_methods,
    };
    let client = CatalogClient::new(category_client, item_client, payment_method_client);

    (actors, client)
}
