//! Domain clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient)
//! and the order ledger's channel.

pub mod actor_client;
pub mod catalog_client;
pub mod employee_client;
pub mod order_client;
pub mod table_client;

pub use actor_client::ActorClient;
pub use catalog_client::*;
pub use employee_client::*;
pub use order_client::*;
pub use table_client::*;
