//! # Actor Framework
//!
//! Building blocks for type-safe, actor-owned keyed records on Tokio.
//!
//! Each record type (a table, a menu item, an employee) gets one [`ResourceActor`]
//! that exclusively owns its store and handles requests sequentially. Callers talk to
//! it through a cloneable [`ResourceClient`]. Business rules live in the record type
//! itself, through the [`ActorEntity`] trait.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): payload types, hooks and custom actions.
//! 2. **Runtime** ([`ResourceActor`]): message loop, id allocation, ordered store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): async request/response.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Booth {
//!     id: u64,
//!     name: String,
//!     lit: bool,
//! }
//!
//! #[derive(Debug)] struct BoothCreate { name: String }
//! #[derive(Debug)] struct BoothUpdate { name: Option<String> }
//! #[derive(Debug)] enum BoothAction { Light }
//! #[derive(Debug, thiserror::Error)] #[error("booth error")] struct BoothError;
//!
//! #[async_trait]
//! impl ActorEntity for Booth {
//!     type Id = u64;
//!     type Create = BoothCreate;
//!     type Update = BoothUpdate;
//!     type Action = BoothAction;
//!     type ActionResult = bool;
//!     type Context = ();
//!     type Error = BoothError;
//!
//!     fn from_create_params(id: u64, params: BoothCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, lit: false })
//!     }
//!
//!     async fn on_update(&mut self, update: BoothUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BoothAction, _: &()) -> Result<bool, Self::Error> {
//!         match action {
//!             BoothAction::Light => {
//!                 let changed = !self.lit;
//!                 self.lit = true;
//!                 Ok(changed)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Booth>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(BoothCreate { name: "Window".into() }).await.unwrap();
//!     assert!(client.perform_action(id, BoothAction::Light).await.unwrap());
//!     assert!(!client.perform_action(id, BoothAction::Light).await.unwrap());
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to `new()`. Actors are
//! created first, then started with clones of the clients they need, which keeps
//! construction free of ordering problems.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests to one actor are processed one at a time.
//! - Different actors run in parallel.
//!
//! ## Testing
//!
//! See [`mock`] for scripted clients.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
