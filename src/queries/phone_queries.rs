use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::{Conditions, CONTACT_NAME_SQL};
use crate::db::contains_pattern;
use crate::db::phone_repo::row_to_phone;
use crate::error::ContactsResult;
use crate::model::{Contact, ContactPhoneNumber, Id};

#[derive(Debug, Clone, Default)]
pub struct PhoneFilter {
    /// Matched against label, number and the owning contact's name. Numbers
    /// are stored as E.164, so punctuation in the term is dropped before
    /// matching the number column.
    pub search: Option<String>,
    pub label: Option<String>,
    pub contact_id: Option<Id<Contact>>,
}

#[derive(Debug, Clone)]
pub struct PhoneRow {
    pub entry: ContactPhoneNumber,
    pub contact_name: String,
}

pub fn list(conn: &Connection, filter: &PhoneFilter) -> ContactsResult<Vec<PhoneRow>> {
    let mut cond = Conditions::default();
    if let Some(label) = &filter.label {
        cond.push("p.label = ? COLLATE NOCASE", label.trim().to_string());
    }
    if let Some(contact_id) = filter.contact_id {
        cond.push("p.contact_id = ?", contact_id);
    }
    if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let digits: String = term.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            cond.search(&["p.label", CONTACT_NAME_SQL], Some(term));
        } else {
            let pattern = contains_pattern(term);
            cond.push_many(
                &format!(
                    r"(LOWER(COALESCE(p.label, '')) LIKE ? ESCAPE '\' OR LOWER({}) LIKE ? ESCAPE '\'
                       OR p.phone_number LIKE ?)",
                    CONTACT_NAME_SQL
                ),
                vec![
                    Box::new(pattern.clone()),
                    Box::new(pattern),
                    Box::new(format!("%{}%", digits)),
                ],
            );
        }
    }

    let sql = format!(
        "SELECT p.id, p.contact_id, p.phone_number, p.label,
                p.created_on, p.updated_on, p.created_by, p.updated_by,
                {name}
         FROM contact_phone_numbers p JOIN contacts c ON c.id = p.contact_id
         {cond}
         ORDER BY c.last_name COLLATE NOCASE, c.first_name COLLATE NOCASE, p.contact_id,
                  p.phone_number",
        name = CONTACT_NAME_SQL,
        cond = cond.where_sql()
    );
    debug!(%sql, "listing phone numbers");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(cond.params()), |row| {
            Ok(PhoneRow {
                entry: row_to_phone(row)?,
                contact_name: row.get(8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
