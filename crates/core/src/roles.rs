//! The closed set of user roles.
//!
//! Roles are stored as the PostgreSQL enum type `user_role` and travel over
//! the wire as uppercase strings. Keeping the set closed at the type level
//! means an invalid role can never reach storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user's role within a tenant. Immutable after signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    /// The uppercase wire/storage name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Faculty => "FACULTY",
            Role::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parse a role name case-insensitively. Returns a human-readable error
    /// naming the valid set, suitable for surfacing verbatim to callers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "FACULTY" => Ok(Role::Faculty),
            "STUDENT" => Ok(Role::Student),
            other => Err(format!(
                "Invalid role '{other}'. Must be one of: ADMIN, FACULTY, STUDENT"
            )),
        }
    }
}
