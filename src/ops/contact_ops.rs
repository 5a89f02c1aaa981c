use chrono::Utc;
use rusqlite::Connection;
use tracing::info;

use super::{ensure_contact_exists, rejected};
use crate::db::{address_repo, contact_repo, email_repo, phone_repo};
use crate::error::{ContactsError, ContactsResult};
use crate::forms::{ContactForm, ContactWithDetailsForm};
use crate::model::{
    Contact, ContactAddress, ContactDetail, ContactEmail, ContactPhoneNumber, Id, PersonName, User,
};
use crate::validation;

/// Normalization applied to every saved contact, whatever path the values
/// came in by.
pub(crate) fn normalize(mut name: PersonName) -> PersonName {
    name.job_title = name.job_title.map(|t| validation::title_case(&t));
    name
}

pub fn add_contact(conn: &Connection, actor: Id<User>, form: &ContactForm) -> ContactsResult<Contact> {
    let name = form.clean().map_err(|e| rejected("contact", e))?;
    let contact = Contact::create(normalize(name), actor, Utc::now());
    contact_repo::insert(conn, &contact)?;
    info!(contact_id = %contact.id, name = %contact.full_name(), "contact created");
    Ok(contact)
}

pub fn update_contact(
    conn: &Connection,
    actor: Id<User>,
    contact_id: Id<Contact>,
    form: &ContactForm,
) -> ContactsResult<Contact> {
    let mut contact = ensure_contact_exists(conn, contact_id)?;
    let name = form.clean().map_err(|e| rejected("contact", e))?;

    contact.name = normalize(name);
    contact.audit.touch(actor, Utc::now());
    contact_repo::update(conn, &contact)?;
    info!(contact_id = %contact.id, "contact updated");
    Ok(contact)
}

/// Deletes the contact together with its addresses, emails and phone numbers.
pub fn delete_contact(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<()> {
    if !contact_repo::delete(conn, contact_id)? {
        return Err(ContactsError::not_found("Contact", contact_id));
    }
    info!(%contact_id, "contact deleted");
    Ok(())
}

/// Creates a contact with one email, one phone number and one address in a
/// single transaction. If any insert fails nothing is kept.
pub fn add_contact_with_details(
    conn: &Connection,
    actor: Id<User>,
    form: &ContactWithDetailsForm,
) -> ContactsResult<ContactDetail> {
    let cleaned = form.clean().map_err(|e| rejected("contact with details", e))?;

    if email_repo::find_by_address(conn, &cleaned.email_address)?.is_some() {
        return Err(ContactsError::AlreadyExists {
            entity_type: "ContactEmail".into(),
            identifier: cleaned.email_address,
        });
    }

    let now = Utc::now();
    let contact = Contact::create(normalize(cleaned.name), actor, now);
    let address = ContactAddress::create(contact.id, cleaned.address, actor, now);
    let email = ContactEmail::create(
        contact.id,
        cleaned.email_address,
        Some(cleaned.email_label),
        actor,
        now,
    );
    let phone = ContactPhoneNumber::create(
        contact.id,
        cleaned.phone_number,
        Some(cleaned.phone_label),
        actor,
        now,
    );

    let tx = conn.unchecked_transaction()?;
    contact_repo::insert(&tx, &contact)?;
    address_repo::insert(&tx, &address)?;
    email_repo::insert(&tx, &email)?;
    phone_repo::insert(&tx, &phone)?;
    tx.commit()?;

    info!(contact_id = %contact.id, name = %contact.full_name(), "contact created with details");
    Ok(ContactDetail {
        contact,
        addresses: vec![address],
        emails: vec![email],
        phone_numbers: vec![phone],
    })
}
