use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::error::ContactsResult;
use crate::model::ContactDetail;
use crate::views;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub contacts: usize,
    pub addresses: usize,
    pub emails: usize,
    pub phone_numbers: usize,
}

/// Collects every contact with its child records.
pub fn collect(conn: &Connection) -> ContactsResult<Vec<ContactDetail>> {
    views::contact_list(conn)?
        .into_iter()
        .map(|c| views::contact_detail(conn, c.id))
        .collect()
}

/// Writes the whole contact book to `path` as a pretty-printed JSON array.
pub fn export_json(conn: &Connection, path: &Path) -> ContactsResult<ExportStats> {
    let details = collect(conn)?;
    let stats = ExportStats {
        contacts: details.len(),
        addresses: details.iter().map(|d| d.addresses.len()).sum(),
        emails: details.iter().map(|d| d.emails.len()).sum(),
        phone_numbers: details.iter().map(|d| d.phone_numbers.len()).sum(),
    };

    let json = serde_json::to_string_pretty(&details)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), contacts = stats.contacts, "contacts exported");
    Ok(stats)
}
