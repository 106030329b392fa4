//! The order ledger: authoritative record of every order and the only writer of
//! table occupancy.
//!
//! Orders are not a plain keyed resource. Closing one needs to look at every other
//! order on the same table, so the ledger is a dedicated actor rather than a
//! [`ResourceActor`](actor_framework::ResourceActor). It keeps the framework's shape:
//! one task, one channel, requests handled strictly one after another, dependencies
//! injected at [`OrderLedger::run`].

pub mod error;
pub mod ledger;
pub mod message;

pub use error::*;
pub use ledger::{LedgerContext, LedgerSnapshot, OrderLedger};
pub use message::*;

use crate::clients::OrderClient;

/// Creates a new order ledger and its client.
pub fn new(buffer_size: usize) -> (OrderLedger, OrderClient) {
    OrderLedger::new(buffer_size)
}
