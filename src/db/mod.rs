pub mod schema;
pub mod user_repo;
pub mod contact_repo;
pub mod address_repo;
pub mod email_repo;
pub mod phone_repo;

use rusqlite::Row;

use crate::model::AuditStamp;

/// Column list shared by every audited table, in the order `audit_from_row`
/// reads them.
pub(crate) const AUDIT_COLUMNS: &str = "created_on, updated_on, created_by, updated_by";

/// Reads the four audit columns starting at `first`.
pub(crate) fn audit_from_row(row: &Row, first: usize) -> rusqlite::Result<AuditStamp> {
    Ok(AuditStamp {
        created_on: row.get(first)?,
        updated_on: row.get(first + 1)?,
        created_by: row.get(first + 2)?,
        updated_by: row.get(first + 3)?,
    })
}

/// Lower-cased `%term%` pattern with LIKE wildcards in `term` escaped. Use
/// with `LIKE ? ESCAPE '\'`.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Maps `QueryReturnedNoRows` to `None`.
pub(crate) fn optional<T>(result: rusqlite::Result<T>) -> rusqlite::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}
