use chrono::Utc;
use rusqlite::Connection;
use tracing::info;

use super::{ensure_contact_exists, rejected};
use crate::db::phone_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::forms::ContactPhoneNumberForm;
use crate::model::{ContactPhoneNumber, Id, User};

pub fn add_phone(
    conn: &Connection,
    actor: Id<User>,
    form: &ContactPhoneNumberForm,
) -> ContactsResult<ContactPhoneNumber> {
    let cleaned = form.clean().map_err(|e| rejected("phone number", e))?;
    ensure_contact_exists(conn, cleaned.contact_id)?;

    let entry = ContactPhoneNumber::create(
        cleaned.contact_id,
        cleaned.phone_number,
        cleaned.label,
        actor,
        Utc::now(),
    );
    phone_repo::insert(conn, &entry)?;
    info!(phone_id = %entry.id, contact_id = %entry.contact_id, "phone number added");
    Ok(entry)
}

/// The form's `contact` is not read; the number stays with its contact.
pub fn update_phone(
    conn: &Connection,
    actor: Id<User>,
    phone_id: Id<ContactPhoneNumber>,
    form: &ContactPhoneNumberForm,
) -> ContactsResult<ContactPhoneNumber> {
    let mut entry = phone_repo::find_by_id(conn, phone_id)?
        .ok_or_else(|| ContactsError::not_found("ContactPhoneNumber", phone_id))?;
    let cleaned = form.clean_fields().map_err(|e| rejected("phone number", e))?;

    entry.phone_number = cleaned.phone_number;
    entry.label = cleaned.label;
    entry.audit.touch(actor, Utc::now());
    phone_repo::update(conn, &entry)?;
    info!(phone_id = %entry.id, "phone number updated");
    Ok(entry)
}

pub fn remove_phone(conn: &Connection, phone_id: Id<ContactPhoneNumber>) -> ContactsResult<()> {
    if !phone_repo::delete(conn, phone_id)? {
        return Err(ContactsError::not_found("ContactPhoneNumber", phone_id));
    }
    info!(%phone_id, "phone number removed");
    Ok(())
}
