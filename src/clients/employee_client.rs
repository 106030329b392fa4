use crate::clients::actor_client::ActorClient;
use crate::employee_actor::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeId};
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_employee(&self, params: EmployeeCreate) -> Result<EmployeeId, EmployeeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Finds the employee signing in with `pin`.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, pin: &str) -> Result<Employee, EmployeeError> {
        let employee = self.list().await?.into_iter().find(|e| e.pin == pin);
        match employee {
            Some(employee) => {
                debug!(id = %employee.id, role = %employee.role, "Signed in");
                Ok(employee)
            }
            None => {
                warn!("Rejected PIN");
                Err(EmployeeError::InvalidCredentials)
            }
        }
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> EmployeeError {
        match e.downcast_entity::<EmployeeError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => EmployeeError::NotFound(id),
            Err(FrameworkError::Conflict(_)) => EmployeeError::Conflict,
            Err(other) => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}
