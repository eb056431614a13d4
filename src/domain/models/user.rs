use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member,
}

/// A login account. The password is stored and compared in plain text by
/// design: credential security is an explicit non-goal of this system.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl User {
    pub fn new(id: &str, username: &str, password: &str, role: Role, name: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
        }
    }
}
