use rusqlite::{params, Connection, Row};

use super::{audit_from_row, optional, AUDIT_COLUMNS};
use crate::error::ContactsResult;
use crate::model::{Contact, ContactPhoneNumber, Id};

fn select_sql(tail: &str) -> String {
    format!(
        "SELECT id, contact_id, phone_number, label, {} FROM contact_phone_numbers {}",
        AUDIT_COLUMNS, tail
    )
}

pub fn insert(conn: &Connection, entry: &ContactPhoneNumber) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO contact_phone_numbers (id, contact_id, phone_number, label,
                                            created_on, updated_on, created_by, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.id,
            entry.contact_id,
            entry.phone_number,
            entry.label,
            entry.audit.created_on,
            entry.audit.updated_on,
            entry.audit.created_by,
            entry.audit.updated_by,
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, entry: &ContactPhoneNumber) -> ContactsResult<()> {
    conn.execute(
        "UPDATE contact_phone_numbers SET phone_number = ?1, label = ?2, updated_on = ?3, updated_by = ?4
         WHERE id = ?5",
        params![
            entry.phone_number,
            entry.label,
            entry.audit.updated_on,
            entry.audit.updated_by,
            entry.id,
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<ContactPhoneNumber>) -> ContactsResult<bool> {
    let n = conn.execute("DELETE FROM contact_phone_numbers WHERE id = ?1", params![id])?;
    Ok(n > 0)
}

pub fn find_by_id(
    conn: &Connection,
    id: Id<ContactPhoneNumber>,
) -> ContactsResult<Option<ContactPhoneNumber>> {
    let mut stmt = conn.prepare(&select_sql("WHERE id = ?1"))?;
    Ok(optional(stmt.query_row(params![id], row_to_phone))?)
}

pub fn find_by_contact(
    conn: &Connection,
    contact_id: Id<Contact>,
) -> ContactsResult<Vec<ContactPhoneNumber>> {
    let mut stmt = conn.prepare(&select_sql("WHERE contact_id = ?1 ORDER BY phone_number"))?;
    let entries = stmt
        .query_map(params![contact_id], row_to_phone)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub fn count(conn: &Connection) -> ContactsResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contact_phone_numbers", [], |row| row.get(0))?)
}

pub(crate) fn row_to_phone(row: &Row) -> rusqlite::Result<ContactPhoneNumber> {
    Ok(ContactPhoneNumber {
        id: row.get(0)?,
        contact_id: row.get(1)?,
        phone_number: row.get(2)?,
        label: row.get(3)?,
        audit: audit_from_row(row, 4)?,
    })
}
