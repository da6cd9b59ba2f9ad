//! User accounts and roles.
//!
//! Authentication is out of scope; users exist so students, notices, and
//! dashboard scopes can reference who did what.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Role determining which dashboard a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Warden,
    Admin,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
