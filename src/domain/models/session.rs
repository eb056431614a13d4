use crate::domain::models::user::{Role, User};
use serde::{Deserialize, Serialize};

/// Projection of a [`User`] without the credential, written on successful
/// login. Its presence in the store is the sole authorization gate: no
/// expiry, no token, no renewal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
