//! Menu catalog records: categories, items and accepted payment methods.

use super::resource_id;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for menu categories.
    CategoryId,
    "category"
);
resource_id!(
    /// Type-safe identifier for menu items.
    ItemId,
    "item"
);
resource_id!(
    /// Type-safe identifier for payment methods.
    PaymentMethodId,
    "payment_method"
);

/// A menu section. Deleting a category only deactivates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Categories are only ever deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryUpdate {}

/// Something that can be put on an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    pub category_id: CategoryId,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub name: String,
    pub price: Money,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category_id: Option<CategoryId>,
}

/// A way of settling an order, addressed by its unique `code` (`cash`, `card`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodCreate {
    pub name: String,
    pub code: String,
}

/// Payment methods are replaced, not edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodUpdate {}
