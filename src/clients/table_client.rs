use crate::clients::actor_client::ActorClient;
use crate::model::{Table, TableCreate, TableId};
use crate::table_actor::{TableAction, TableError};
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Table actor.
///
/// Occupancy can only be changed from inside the crate, which in practice means by
/// the order ledger.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_table(&self, params: TableCreate) -> Result<TableId, TableError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`] but a missing table is an error.
    #[instrument(skip(self))]
    pub async fn get_table(&self, id: TableId) -> Result<Table, TableError> {
        self.get(id)
            .await?
            .ok_or_else(|| TableError::NotFound(id.to_string()))
    }

    /// All tables in the order they were registered.
    pub async fn list_tables(&self) -> Result<Vec<Table>, TableError> {
        self.list().await
    }

    /// Returns `true` if the table was free before.
    #[instrument(skip(self))]
    pub(crate) async fn mark_occupied(&self, id: TableId) -> Result<bool, TableError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TableAction::MarkOccupied)
            .await
            .map_err(Self::map_error)
    }

    /// Returns `true` if the table was occupied before.
    #[instrument(skip(self))]
    pub(crate) async fn mark_free(&self, id: TableId) -> Result<bool, TableError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TableAction::MarkFree)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> TableError {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
