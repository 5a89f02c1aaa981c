use rusqlite::{params, Connection, Row};

use super::{audit_from_row, contains_pattern, optional, AUDIT_COLUMNS};
use crate::error::ContactsResult;
use crate::model::{Contact, Id, PersonName};

fn select_sql(tail: &str) -> String {
    format!(
        "SELECT id, first_name, last_name, job_title, description, {} FROM contacts {}",
        AUDIT_COLUMNS, tail
    )
}

/// Inserts the row as given. No validation happens here; blank names are
/// rejected by the table's CHECK constraints.
pub fn insert(conn: &Connection, contact: &Contact) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO contacts (id, first_name, last_name, job_title, description,
                               created_on, updated_on, created_by, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            contact.id,
            contact.name.first_name,
            contact.name.last_name,
            contact.name.job_title,
            contact.name.description,
            contact.audit.created_on,
            contact.audit.updated_on,
            contact.audit.created_by,
            contact.audit.updated_by,
        ],
    )?;
    Ok(())
}

/// Writes the name fields and the `updated_*` stamp. Creation stamps are
/// never rewritten.
pub fn update(conn: &Connection, contact: &Contact) -> ContactsResult<()> {
    conn.execute(
        "UPDATE contacts SET first_name = ?1, last_name = ?2, job_title = ?3, description = ?4,
         updated_on = ?5, updated_by = ?6
         WHERE id = ?7",
        params![
            contact.name.first_name,
            contact.name.last_name,
            contact.name.job_title,
            contact.name.description,
            contact.audit.updated_on,
            contact.audit.updated_by,
            contact.id,
        ],
    )?;
    Ok(())
}

/// Deletes the contact; its addresses, emails and phone numbers go with it.
/// Returns whether a row was removed.
pub fn delete(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<bool> {
    let n = conn.execute("DELETE FROM contacts WHERE id = ?1", params![contact_id])?;
    Ok(n > 0)
}

pub fn find_by_id(conn: &Connection, id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    let mut stmt = conn.prepare(&select_sql("WHERE id = ?1"))?;
    Ok(optional(stmt.query_row(params![id], row_to_contact))?)
}

pub fn find_all(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&select_sql(
        "ORDER BY last_name COLLATE NOCASE, first_name COLLATE NOCASE",
    ))?;
    let contacts = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

/// Case-insensitive substring match on first, last or full name.
pub fn find_by_name(conn: &Connection, query: &str) -> ContactsResult<Vec<Contact>> {
    let pattern = contains_pattern(query.trim());
    let mut stmt = conn.prepare(&select_sql(
        r"WHERE LOWER(first_name) LIKE ?1 ESCAPE '\' OR LOWER(last_name) LIKE ?1 ESCAPE '\'
            OR LOWER(first_name || ' ' || last_name) LIKE ?1 ESCAPE '\'
         ORDER BY last_name COLLATE NOCASE, first_name COLLATE NOCASE",
    ))?;
    let contacts = stmt
        .query_map(params![pattern], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

pub fn count(conn: &Connection) -> ContactsResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?)
}

pub(crate) fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: PersonName {
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            job_title: row.get(3)?,
            description: row.get(4)?,
        },
        audit: audit_from_row(row, 5)?,
    })
}
