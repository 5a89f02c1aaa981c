use chrono::Utc;
use rusqlite::Connection;
use tracing::info;

use super::{ensure_contact_exists, rejected};
use crate::db::address_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::forms::ContactAddressForm;
use crate::model::{ContactAddress, Id, User};

pub fn add_address(
    conn: &Connection,
    actor: Id<User>,
    form: &ContactAddressForm,
) -> ContactsResult<ContactAddress> {
    let cleaned = form.clean().map_err(|e| rejected("address", e))?;
    ensure_contact_exists(conn, cleaned.contact_id)?;

    let entry = ContactAddress::create(cleaned.contact_id, cleaned.address, actor, Utc::now());
    address_repo::insert(conn, &entry)?;
    info!(address_id = %entry.id, contact_id = %entry.contact_id, "address added");
    Ok(entry)
}

/// Rewrites every address field from the form. The form's `contact` is not
/// read; the owning contact does not change.
pub fn update_address(
    conn: &Connection,
    actor: Id<User>,
    address_id: Id<ContactAddress>,
    form: &ContactAddressForm,
) -> ContactsResult<ContactAddress> {
    let mut entry = address_repo::find_by_id(conn, address_id)?
        .ok_or_else(|| ContactsError::not_found("ContactAddress", address_id))?;
    let address = form.clean_fields().map_err(|e| rejected("address", e))?;

    entry.address = address;
    entry.audit.touch(actor, Utc::now());
    address_repo::update(conn, &entry)?;
    info!(address_id = %entry.id, "address updated");
    Ok(entry)
}

pub fn remove_address(conn: &Connection, address_id: Id<ContactAddress>) -> ContactsResult<()> {
    if !address_repo::delete(conn, address_id)? {
        return Err(ContactsError::not_found("ContactAddress", address_id));
    }
    info!(%address_id, "address removed");
    Ok(())
}
