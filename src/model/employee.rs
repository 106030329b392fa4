use super::resource_id;
use serde::{Deserialize, Serialize};
use std::fmt;

resource_id!(
    /// Type-safe identifier for staff members.
    EmployeeId,
    "employee"
);

/// Staff role. Recorded for display only; no permission checks hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
    Waiter,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
            Role::Waiter => "waiter",
            Role::User => "user",
        };
        f.write_str(s)
    }
}

/// A staff member who can sign in at the till.
///
/// The PIN is never serialized.
#[derive(Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub pin: String,
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("pin", &"***")
            .finish()
    }
}

/// Payload for adding a staff member.
#[derive(Clone, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: Role,
    pub pin: String,
}

impl fmt::Debug for EmployeeCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeCreate")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeUpdate {}
