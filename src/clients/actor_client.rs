//! Re-export of the framework's [`ActorClient`] so callers can write
//! `use pos_core::clients::ActorClient` to get the provided `get`/`list`/`delete`.

pub use actor_framework::ActorClient;
