//! Plain records for every resource in the system.
//!
//! The [`ActorEntity`](actor_framework::ActorEntity) implementations live next to the
//! actor that owns each record (see [`crate::table_actor`], [`crate::catalog_actor`],
//! [`crate::employee_actor`]); orders are owned by the ledger in [`crate::order_actor`].

/// Declares a type-safe numeric identifier.
///
/// Ids serialize as bare numbers and display with a resource prefix (`table_3`) so
/// log lines stay unambiguous.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub(crate) use resource_id;

pub mod catalog;
pub mod employee;
pub mod order;
pub mod table;

pub use catalog::*;
pub use employee::*;
pub use order::*;
pub use table::*;
