//! # pos-core
//!
//! Order and table lifecycle core for a single restaurant's point of sale.
//!
//! Built on the resource-actor pattern from `actor-framework`: each kind of record
//! lives in its own Tokio task, owned by exactly one actor and reached only through a
//! typed client. Requests to one actor are handled one at a time, which is all the
//! mutual exclusion the system needs.
//!
//! ## Module Tour
//!
//! ### The Actors
//! - [`table_actor`]: tables and occupancy.
//! - [`catalog_actor`]: categories, items, payment methods.
//! - [`employee_actor`]: staff and PIN sign-in.
//! - [`order_actor`]: the order ledger. Owns the order state machine and is the only
//!   writer of table occupancy, keeping a table occupied exactly while it has an
//!   order that is not closed.
//!
//! ### The Interface ([`clients`], [`services`])
//! Typed clients per actor, plus [`PaymentProcessor`](services::PaymentProcessor)
//! and [`StatisticsService`](services::StatisticsService) built on top of them.
//!
//! ### The Orchestrator ([`lifecycle`])
//! [`PosSystem`](lifecycle::PosSystem) spawns and wires the actors, and shuts them
//! down. [`seed_demo_data`](lifecycle::seed_demo_data) loads the demo café.
//!
//! ### The Edge ([`api`], [`config`])
//! An axum router over the clients, configured from the environment.
//!
//! ## Money
//!
//! Prices and totals are [`Money`](money::Money): decimals rounded to two places,
//! never floating point.

pub mod api;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod employee_actor;
pub mod lifecycle;
pub mod model;
pub mod money;
pub mod order_actor;
pub mod services;
pub mod table_actor;
