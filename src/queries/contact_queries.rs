use chrono::{DateTime, Utc};
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::Conditions;
use crate::db::contact_repo::{self, row_to_contact};
use crate::db::AUDIT_COLUMNS;
use crate::error::ContactsResult;
use crate::model::Contact;

/// Admin list filter for contacts. Search matches first name, last name and
/// job title.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub search: Option<String>,
    pub job_title: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

pub fn list(conn: &Connection, filter: &ContactFilter) -> ContactsResult<Vec<Contact>> {
    let mut cond = Conditions::default();
    cond.search(&["first_name", "last_name", "job_title"], filter.search.as_deref());
    if let Some(title) = &filter.job_title {
        cond.push("job_title = ? COLLATE NOCASE", title.trim().to_string());
    }
    if let Some(after) = filter.created_after {
        cond.push("created_on >= ?", after);
    }
    if let Some(before) = filter.created_before {
        cond.push("created_on < ?", before);
    }

    let sql = format!(
        "SELECT id, first_name, last_name, job_title, description, {}
         FROM contacts {}
         ORDER BY last_name COLLATE NOCASE, first_name COLLATE NOCASE",
        AUDIT_COLUMNS,
        cond.where_sql()
    );
    debug!(%sql, "listing contacts");

    let mut stmt = conn.prepare(&sql)?;
    let contacts = stmt
        .query_map(params_from_iter(cond.params()), row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

/// Distinct job titles in use, for the job-title filter choices.
pub fn job_titles(conn: &Connection) -> ContactsResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT job_title FROM contacts WHERE job_title IS NOT NULL ORDER BY job_title",
    )?;
    let titles = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(titles)
}

pub fn find_by_name(conn: &Connection, query: &str) -> ContactsResult<Vec<Contact>> {
    contact_repo::find_by_name(conn, query)
}
