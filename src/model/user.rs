use serde::{Deserialize, Serialize};

use super::ids::Id;

/// The acting identity recorded in audit stamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id<User>,
    pub username: String,
    pub email: Option<String>,
}

impl User {
    pub fn create(username: String, email: Option<String>) -> Self {
        Self {
            id: Id::generate(),
            username,
            email,
        }
    }
}
