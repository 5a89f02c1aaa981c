use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::{Conditions, CONTACT_NAME_SQL};
use crate::db::email_repo::row_to_email;
use crate::error::ContactsResult;
use crate::model::{Contact, ContactEmail, Id};

#[derive(Debug, Clone, Default)]
pub struct EmailFilter {
    /// Matched against label, address and the owning contact's name.
    pub search: Option<String>,
    pub label: Option<String>,
    pub contact_id: Option<Id<Contact>>,
}

#[derive(Debug, Clone)]
pub struct EmailRow {
    pub entry: ContactEmail,
    pub contact_name: String,
}

pub fn list(conn: &Connection, filter: &EmailFilter) -> ContactsResult<Vec<EmailRow>> {
    let mut cond = Conditions::default();
    if let Some(label) = &filter.label {
        cond.push("e.label = ? COLLATE NOCASE", label.trim().to_string());
    }
    if let Some(contact_id) = filter.contact_id {
        cond.push("e.contact_id = ?", contact_id);
    }
    cond.search(
        &["e.label", "e.email_address", CONTACT_NAME_SQL],
        filter.search.as_deref(),
    );

    let sql = format!(
        "SELECT e.id, e.contact_id, e.email_address, e.label,
                e.created_on, e.updated_on, e.created_by, e.updated_by,
                {name}
         FROM contact_emails e JOIN contacts c ON c.id = e.contact_id
         {cond}
         ORDER BY c.last_name COLLATE NOCASE, c.first_name COLLATE NOCASE, e.contact_id,
                  e.email_address",
        name = CONTACT_NAME_SQL,
        cond = cond.where_sql()
    );
    debug!(%sql, "listing emails");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(cond.params()), |row| {
            Ok(EmailRow {
                entry: row_to_email(row)?,
                contact_name: row.get(8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
