use crate::catalog_actor::{CatalogError, CategoryAction, ItemAction};
use crate::model::{
    Category, CategoryCreate, CategoryId, Item, ItemCreate, ItemId, ItemUpdate, PaymentMethod,
    PaymentMethodCreate, PaymentMethodId,
};
use actor_framework::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

fn map_error(e: FrameworkError) -> CatalogError {
    match e.downcast_entity::<CatalogError>() {
        Ok(err) => err,
        Err(FrameworkError::NotFound(id)) => CatalogError::NotFound(id),
        Err(FrameworkError::Conflict(key)) => {
            CatalogError::Conflict(format!("payment method code '{key}'"))
        }
        Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
    }
}

/// Client for the menu catalog.
///
/// Fronts three resource actors, so it does not implement
/// [`ActorClient`](crate::clients::ActorClient); every operation is spelled out.
#[derive(Clone)]
pub struct CatalogClient {
    categories: ResourceClient<Category>,
    items: ResourceClient<Item>,
    payment_methods: ResourceClient<PaymentMethod>,
}

impl CatalogClient {
    pub fn new(
        categories: ResourceClient<Category>,
        items: ResourceClient<Item>,
        payment_methods: ResourceClient<PaymentMethod>,
    ) -> Self {
        Self {
            categories,
            items,
            payment_methods,
        }
    }

    /// The raw category client, handed to the item actor as its context.
    pub fn category_client(&self) -> ResourceClient<Category> {
        self.categories.clone()
    }

    // --- Categories ---

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CatalogError> {
        debug!("Sending request");
        let id = self.categories.create(params).await.map_err(map_error)?;
        self.categories
            .get(id)
            .await
            .map_err(map_error)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn deactivate_category(&self, id: CategoryId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.categories
            .perform_action(id, CategoryAction::Deactivate)
            .await
            .map_err(map_error)
    }

    pub async fn list_active_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self.categories.list().await.map_err(map_error)?;
        Ok(categories.into_iter().filter(|c| c.active).collect())
    }

    // --- Items ---

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<Item, CatalogError> {
        debug!("Sending request");
        let id = self.items.create(params).await.map_err(map_error)?;
        self.get_item(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, CatalogError> {
        debug!("Sending request");
        self.items.update(id, update).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn deactivate_item(&self, id: ItemId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.items
            .perform_action(id, ItemAction::Deactivate)
            .await
            .map_err(map_error)
    }

    /// Any item, active or not. Missing items are [`CatalogError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, CatalogError> {
        self.items
            .get(id)
            .await
            .map_err(map_error)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Active items, optionally narrowed to one category.
    pub async fn list_active_items(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Item>, CatalogError> {
        let items = self.items.list().await.map_err(map_error)?;
        Ok(items
            .into_iter()
            .filter(|item| item.active)
            .filter(|item| category_id.map_or(true, |c| item.category_id == c))
            .collect())
    }

    // --- Payment methods ---

    #[instrument(skip(self))]
    pub async fn create_payment_method(
        &self,
        params: PaymentMethodCreate,
    ) -> Result<PaymentMethod, CatalogError> {
        debug!("Sending request");
        let id = self.payment_methods.create(params).await.map_err(map_error)?;
        self.payment_methods
            .get(id)
            .await
            .map_err(map_error)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_payment_method(&self, id: PaymentMethodId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.payment_methods.delete(id).await.map_err(map_error)
    }

    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, CatalogError> {
        self.payment_methods.list().await.map_err(map_error)
    }

    /// Looks a method up by its code (`cash`, `card`, ...).
    #[instrument(skip(self))]
    pub async fn get_payment_method(&self, code: &str) -> Result<PaymentMethod, CatalogError> {
        self.list_payment_methods()
            .await?
            .into_iter()
            .find(|method| method.code == code)
            .ok_or_else(|| CatalogError::NotFound(format!("payment method '{code}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    fn item(id: u64, category: u64, active: bool) -> Item {
        Item {
            id: ItemId(id),
            name: format!("item {id}"),
            price: Money::from_cents(100),
            category_id: CategoryId(category),
            active,
        }
    }

    struct Mocks {
        categories: MockClient<Category>,
        items: MockClient<Item>,
        payment_methods: MockClient<PaymentMethod>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                categories: MockClient::new(),
                items: MockClient::new(),
                payment_methods: MockClient::new(),
            }
        }

        fn client(&self) -> CatalogClient {
            CatalogClient::new(
                self.categories.client(),
                self.items.client(),
                self.payment_methods.client(),
            )
        }

        fn verify(&self) {
            self.categories.verify();
            self.items.verify();
            self.payment_methods.verify();
        }
    }

    #[tokio::test]
    async fn active_items_filtered_by_category() {
        let mut mocks = Mocks::new();
        let all = vec![item(1, 1, true), item(2, 1, false), item(3, 2, true)];
        mocks.items.expect_list().return_ok(all.clone());
        mocks.items.expect_list().return_ok(all);

        let client = mocks.client();
        let ids: Vec<_> = client
            .list_active_items(None)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);

        let ids: Vec<_> = client
            .list_active_items(Some(CategoryId(2)))
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![ItemId(3)]);
        mocks.verify();
    }

    #[tokio::test]
    async fn payment_method_lookup_by_code() {
        let mut mocks = Mocks::new();
        let cash = PaymentMethod {
            id: PaymentMethodId(1),
            name: "Cash".into(),
            code: "cash".into(),
            created_at: Utc::now(),
        };
        mocks.payment_methods.expect_list().return_ok(vec![cash.clone()]);
        mocks.payment_methods.expect_list().return_ok(vec![cash]);

        let client = mocks.client();
        assert_eq!(client.get_payment_method("cash").await.unwrap().id, PaymentMethodId(1));
        assert!(matches!(
            client.get_payment_method("crypto").await,
            Err(CatalogError::NotFound(_))
        ));
        mocks.verify();
    }

    #[tokio::test]
    async fn duplicate_code_is_a_conflict() {
        let mut mocks = Mocks::new();
        mocks
            .payment_methods
            .expect_create()
            .return_err(FrameworkError::Conflict("cash".into()));

        let err = mocks
            .client()
            .create_payment_method(PaymentMethodCreate {
                name: "Cash again".into(),
                code: "cash".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
        mocks.verify();
    }

    #[tokio::test]
    async fn entity_errors_pass_through() {
        let mut mocks = Mocks::new();
        mocks.items.expect_action(ItemId(5)).return_err(FrameworkError::EntityError(Box::new(
            CatalogError::InvalidInput("nope".into()),
        )));

        assert_eq!(
            mocks.client().deactivate_item(ItemId(5)).await,
            Err(CatalogError::InvalidInput("nope".into()))
        );
        mocks.verify();
    }
}
