use serde::{Deserialize, Serialize};

use super::UserId;

/// Identity of the signed-in user, as kept in client-local storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: UserId,
    pub username: String,
}

impl Session {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {}", self.username)
    }
}
