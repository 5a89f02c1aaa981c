use chrono::Utc;
use rusqlite::Connection;
use tracing::info;

use super::{ensure_contact_exists, rejected};
use crate::db::email_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::forms::ContactEmailForm;
use crate::model::{ContactEmail, Id, User};

/// Email addresses are unique across every contact. The address is
/// normalized before the check so `A@B.com` and `a@b.com` collide.
pub fn add_email(conn: &Connection, actor: Id<User>, form: &ContactEmailForm) -> ContactsResult<ContactEmail> {
    let cleaned = form.clean().map_err(|e| rejected("email", e))?;
    ensure_contact_exists(conn, cleaned.contact_id)?;
    ensure_unused(conn, &cleaned.email_address, None)?;

    let entry = ContactEmail::create(
        cleaned.contact_id,
        cleaned.email_address,
        cleaned.label,
        actor,
        Utc::now(),
    );
    email_repo::insert(conn, &entry)?;
    info!(email_id = %entry.id, contact_id = %entry.contact_id, "email added");
    Ok(entry)
}

/// The form's `contact` is not read; the email stays with its contact.
pub fn update_email(
    conn: &Connection,
    actor: Id<User>,
    email_id: Id<ContactEmail>,
    form: &ContactEmailForm,
) -> ContactsResult<ContactEmail> {
    let mut entry = email_repo::find_by_id(conn, email_id)?
        .ok_or_else(|| ContactsError::not_found("ContactEmail", email_id))?;
    let cleaned = form.clean_fields().map_err(|e| rejected("email", e))?;
    ensure_unused(conn, &cleaned.email_address, Some(email_id))?;

    entry.email_address = cleaned.email_address;
    entry.label = cleaned.label;
    entry.audit.touch(actor, Utc::now());
    email_repo::update(conn, &entry)?;
    info!(email_id = %entry.id, "email updated");
    Ok(entry)
}

pub fn remove_email(conn: &Connection, email_id: Id<ContactEmail>) -> ContactsResult<()> {
    if !email_repo::delete(conn, email_id)? {
        return Err(ContactsError::not_found("ContactEmail", email_id));
    }
    info!(%email_id, "email removed");
    Ok(())
}

fn ensure_unused(
    conn: &Connection,
    email_address: &str,
    except: Option<Id<ContactEmail>>,
) -> ContactsResult<()> {
    match email_repo::find_by_address(conn, email_address)? {
        Some(existing) if Some(existing.id) != except => Err(ContactsError::AlreadyExists {
            entity_type: "ContactEmail".into(),
            identifier: email_address.to_string(),
        }),
        _ => Ok(()),
    }
}
