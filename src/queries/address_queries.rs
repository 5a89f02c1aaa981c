use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::{Conditions, CONTACT_NAME_SQL};
use crate::db::address_repo::row_to_address;
use crate::error::ContactsResult;
use crate::model::{Contact, ContactAddress, Id};

#[derive(Debug, Clone, Default)]
pub struct AddressFilter {
    /// Matched against name, street, city, state and zipcode.
    pub search: Option<String>,
    pub contact_id: Option<Id<Contact>>,
    /// `Some(true)` keeps addresses with a unit number, `Some(false)` those
    /// without.
    pub has_unit: Option<bool>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One line of the address admin list.
#[derive(Debug, Clone)]
pub struct AddressRow {
    pub entry: ContactAddress,
    pub contact_name: String,
}

impl AddressRow {
    pub fn short_address(&self) -> String {
        self.entry.address.short_address(false)
    }

    pub fn has_unit(&self) -> bool {
        self.entry.address.has_unit()
    }
}

pub fn list(conn: &Connection, filter: &AddressFilter) -> ContactsResult<Vec<AddressRow>> {
    let mut cond = Conditions::default();
    if let Some(contact_id) = filter.contact_id {
        cond.push("a.contact_id = ?", contact_id);
    }
    match filter.has_unit {
        Some(true) => cond.push_raw("a.unit_number IS NOT NULL"),
        Some(false) => cond.push_raw("a.unit_number IS NULL"),
        None => {}
    }
    if let Some(city) = &filter.city {
        cond.push("a.city = ? COLLATE NOCASE", city.trim().to_string());
    }
    if let Some(state) = &filter.state {
        cond.push("a.state = ? COLLATE NOCASE", state.trim().to_string());
    }
    cond.search(
        &["a.name", "a.street", "a.city", "a.state", "a.zipcode"],
        filter.search.as_deref(),
    );

    let sql = format!(
        "SELECT a.id, a.contact_id, a.name, a.street, a.unit_type, a.unit_number, a.city,
                a.state, a.zipcode, a.created_on, a.updated_on, a.created_by, a.updated_by,
                {name}
         FROM contact_addresses a JOIN contacts c ON c.id = a.contact_id
         {cond}
         ORDER BY c.last_name COLLATE NOCASE, c.first_name COLLATE NOCASE, a.contact_id,
                  a.state, a.city, a.street",
        name = CONTACT_NAME_SQL,
        cond = cond.where_sql()
    );
    debug!(%sql, "listing addresses");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(cond.params()), |row| {
            Ok(AddressRow {
                entry: row_to_address(row)?,
                contact_name: row.get(13)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Distinct (city, state) pairs in use, for the filter choices.
pub fn cities(conn: &Connection) -> ContactsResult<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT city, state FROM contact_addresses ORDER BY state, city",
    )?;
    let pairs = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pairs)
}
