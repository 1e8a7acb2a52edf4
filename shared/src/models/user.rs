//! Login accounts and dashboard roles

use serde::{Deserialize, Serialize};

/// An account that can sign in to a dashboard
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}

/// Dashboard role carried in the signed session claim
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Employee,
    Collector,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Employee => "employee",
            UserRole::Collector => "collector",
        };
        write!(f, "{}", s)
    }
}
