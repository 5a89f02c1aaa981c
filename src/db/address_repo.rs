use rusqlite::{params, Connection, Row};

use super::{audit_from_row, optional, AUDIT_COLUMNS};
use crate::error::ContactsResult;
use crate::model::{Contact, ContactAddress, Id, UsAddress};

fn select_sql(tail: &str) -> String {
    format!(
        "SELECT id, contact_id, name, street, unit_type, unit_number, city, state, zipcode, {}
         FROM contact_addresses {}",
        AUDIT_COLUMNS, tail
    )
}

pub fn insert(conn: &Connection, entry: &ContactAddress) -> ContactsResult<()> {
    let a = &entry.address;
    conn.execute(
        "INSERT INTO contact_addresses (id, contact_id, name, street, unit_type, unit_number,
                                        city, state, zipcode,
                                        created_on, updated_on, created_by, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            entry.id,
            entry.contact_id,
            a.name,
            a.street,
            a.unit_type,
            a.unit_number,
            a.city,
            a.state,
            a.zipcode,
            entry.audit.created_on,
            entry.audit.updated_on,
            entry.audit.created_by,
            entry.audit.updated_by,
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, entry: &ContactAddress) -> ContactsResult<()> {
    let a = &entry.address;
    conn.execute(
        "UPDATE contact_addresses SET name = ?1, street = ?2, unit_type = ?3, unit_number = ?4,
         city = ?5, state = ?6, zipcode = ?7, updated_on = ?8, updated_by = ?9
         WHERE id = ?10",
        params![
            a.name,
            a.street,
            a.unit_type,
            a.unit_number,
            a.city,
            a.state,
            a.zipcode,
            entry.audit.updated_on,
            entry.audit.updated_by,
            entry.id,
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<ContactAddress>) -> ContactsResult<bool> {
    let n = conn.execute("DELETE FROM contact_addresses WHERE id = ?1", params![id])?;
    Ok(n > 0)
}

pub fn find_by_id(conn: &Connection, id: Id<ContactAddress>) -> ContactsResult<Option<ContactAddress>> {
    let mut stmt = conn.prepare(&select_sql("WHERE id = ?1"))?;
    Ok(optional(stmt.query_row(params![id], row_to_address))?)
}

pub fn find_by_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Vec<ContactAddress>> {
    let mut stmt = conn.prepare(&select_sql(
        "WHERE contact_id = ?1 ORDER BY state, city, street",
    ))?;
    let entries = stmt
        .query_map(params![contact_id], row_to_address)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub fn count(conn: &Connection) -> ContactsResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contact_addresses", [], |row| row.get(0))?)
}

/// Columns in `select_sql` order; also used by the address list query.
pub(crate) fn row_to_address(row: &Row) -> rusqlite::Result<ContactAddress> {
    Ok(ContactAddress {
        id: row.get(0)?,
        contact_id: row.get(1)?,
        address: UsAddress {
            name: row.get(2)?,
            street: row.get(3)?,
            unit_type: row.get(4)?,
            unit_number: row.get(5)?,
            city: row.get(6)?,
            state: row.get(7)?,
            zipcode: row.get(8)?,
        },
        audit: audit_from_row(row, 9)?,
    })
}
