use rusqlite::Connection;
use tracing::info;

use crate::db::user_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::model::User;
use crate::validation;

pub fn register_user(conn: &Connection, username: &str, email: Option<&str>) -> ContactsResult<User> {
    let username = validation::required(username, 150, "username")?;
    let email = match validation::trim_optional(email) {
        Some(e) => Some(validation::email(&e, "email")?),
        None => None,
    };

    if user_repo::find_by_username(conn, &username)?.is_some() {
        return Err(ContactsError::AlreadyExists {
            entity_type: "User".into(),
            identifier: username,
        });
    }

    let user = User::create(username, email);
    user_repo::insert(conn, &user)?;
    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(user)
}

/// Looks the user up by name, registering it on first use.
pub fn find_or_register(conn: &Connection, username: &str) -> ContactsResult<User> {
    let username = validation::non_blank(username, "username")?;
    match user_repo::find_by_username(conn, &username)? {
        Some(user) => Ok(user),
        None => register_user(conn, &username, None),
    }
}
