use rusqlite::{params, Connection, Row};

use super::optional;
use crate::error::ContactsResult;
use crate::model::{Id, User};

pub fn insert(conn: &Connection, user: &User) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO users (id, username, email) VALUES (?1, ?2, ?3)",
        params![user.id, user.username, user.email],
    )?;
    Ok(())
}

/// Removes the user. Audit references to it become NULL.
pub fn delete(conn: &Connection, user_id: Id<User>) -> ContactsResult<()> {
    conn.execute("DELETE FROM users WHERE id = ?1", params![user_id])?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, user_id: Id<User>) -> ContactsResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT id, username, email FROM users WHERE id = ?1")?;
    Ok(optional(stmt.query_row(params![user_id], row_to_user))?)
}

pub fn find_by_username(conn: &Connection, username: &str) -> ContactsResult<Option<User>> {
    let mut stmt =
        conn.prepare("SELECT id, username, email FROM users WHERE username = ?1 COLLATE NOCASE")?;
    Ok(optional(stmt.query_row(params![username], row_to_user))?)
}

pub fn find_all(conn: &Connection) -> ContactsResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, username, email FROM users ORDER BY username")?;
    let users = stmt
        .query_map([], row_to_user)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(users)
}

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
    })
}
