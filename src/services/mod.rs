//! Stateless services composed from the actor clients.

pub mod payment;
pub mod statistics;

pub use payment::PaymentProcessor;
pub use statistics::{DailySummary, StatisticsService};
