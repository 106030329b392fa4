//! Process lifecycle: spawning and wiring the actors, demo data, shutdown.

pub mod pos_system;
pub mod seed;

pub use pos_system::PosSystem;
pub use seed::seed_demo_data;
