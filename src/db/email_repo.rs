use rusqlite::{params, Connection, Row};

use super::{audit_from_row, optional, AUDIT_COLUMNS};
use crate::error::ContactsResult;
use crate::model::{Contact, ContactEmail, Id};

fn select_sql(tail: &str) -> String {
    format!(
        "SELECT id, contact_id, email_address, label, {} FROM contact_emails {}",
        AUDIT_COLUMNS, tail
    )
}

/// Inserts as given. A second row with the same address (ignoring ASCII
/// case) fails the UNIQUE constraint.
pub fn insert(conn: &Connection, entry: &ContactEmail) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO contact_emails (id, contact_id, email_address, label,
                                     created_on, updated_on, created_by, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.id,
            entry.contact_id,
            entry.email_address,
            entry.label,
            entry.audit.created_on,
            entry.audit.updated_on,
            entry.audit.created_by,
            entry.audit.updated_by,
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, entry: &ContactEmail) -> ContactsResult<()> {
    conn.execute(
        "UPDATE contact_emails SET email_address = ?1, label = ?2, updated_on = ?3, updated_by = ?4
         WHERE id = ?5",
        params![
            entry.email_address,
            entry.label,
            entry.audit.updated_on,
            entry.audit.updated_by,
            entry.id,
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<ContactEmail>) -> ContactsResult<bool> {
    let n = conn.execute("DELETE FROM contact_emails WHERE id = ?1", params![id])?;
    Ok(n > 0)
}

pub fn find_by_id(conn: &Connection, id: Id<ContactEmail>) -> ContactsResult<Option<ContactEmail>> {
    let mut stmt = conn.prepare(&select_sql("WHERE id = ?1"))?;
    Ok(optional(stmt.query_row(params![id], row_to_email))?)
}

pub fn find_by_address(conn: &Connection, email_address: &str) -> ContactsResult<Option<ContactEmail>> {
    let mut stmt = conn.prepare(&select_sql("WHERE email_address = ?1 COLLATE NOCASE"))?;
    Ok(optional(stmt.query_row(params![email_address], row_to_email))?)
}

pub fn find_by_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Vec<ContactEmail>> {
    let mut stmt = conn.prepare(&select_sql("WHERE contact_id = ?1 ORDER BY email_address"))?;
    let entries = stmt
        .query_map(params![contact_id], row_to_email)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub fn count(conn: &Connection) -> ContactsResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contact_emails", [], |row| row.get(0))?)
}

pub(crate) fn row_to_email(row: &Row) -> rusqlite::Result<ContactEmail> {
    Ok(ContactEmail {
        id: row.get(0)?,
        contact_id: row.get(1)?,
        email_address: row.get(2)?,
        label: row.get(3)?,
        audit: audit_from_row(row, 4)?,
    })
}
