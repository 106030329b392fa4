//! Employee directory: staff records and PIN sign-in.

pub mod entity;
pub mod error;

pub use entity::EmployeeAction;
pub use error::*;

use crate::clients::EmployeeClient;
use crate::model::Employee;
use actor_framework::ResourceActor;

/// Creates a new Employee actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = EmployeeClient::new(generic_client);

    (actor, client)
}
