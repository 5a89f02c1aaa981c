//! Read-only contact list and contact detail pages.

use std::fmt::Write;

use rusqlite::Connection;

use crate::db::{address_repo, contact_repo, email_repo, phone_repo};
use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactDetail, Id};

pub fn contact_list(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    contact_repo::find_all(conn)
}

pub fn contact_detail(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<ContactDetail> {
    let contact = contact_repo::find_by_id(conn, contact_id)?
        .ok_or_else(|| ContactsError::not_found("Contact", contact_id))?;
    Ok(ContactDetail {
        addresses: address_repo::find_by_contact(conn, contact.id)?,
        emails: email_repo::find_by_contact(conn, contact.id)?,
        phone_numbers: phone_repo::find_by_contact(conn, contact.id)?,
        contact,
    })
}

pub fn render_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts yet.\n".into();
    }
    let mut out = format!("Contacts ({}):\n", contacts.len());
    for c in contacts {
        match &c.name.job_title {
            Some(title) => {
                let _ = writeln!(out, "  {} - {}", c.full_name(), title);
            }
            None => {
                let _ = writeln!(out, "  {}", c.full_name());
            }
        }
    }
    out
}

pub fn render_detail(detail: &ContactDetail) -> String {
    let c = &detail.contact;
    let mut out = String::new();
    let _ = writeln!(out, "{}", c.full_name());
    if let Some(title) = &c.name.job_title {
        let _ = writeln!(out, "  Title: {}", title);
    }
    if let Some(desc) = &c.name.description {
        let _ = writeln!(out, "  About: {}", desc);
    }
    let _ = writeln!(out, "  Added: {}", c.audit.created_on.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "  Updated: {}", c.audit.updated_on.format("%Y-%m-%d %H:%M UTC"));

    if !detail.emails.is_empty() {
        let _ = writeln!(out, "  Emails:");
        for e in &detail.emails {
            let _ = writeln!(out, "    {}{}", e.email_address, label_suffix(e.label.as_deref()));
        }
    }
    if !detail.phone_numbers.is_empty() {
        let _ = writeln!(out, "  Phone numbers:");
        for p in &detail.phone_numbers {
            let _ = writeln!(out, "    {}{}", p.phone_number, label_suffix(p.label.as_deref()));
        }
    }
    if !detail.addresses.is_empty() {
        let _ = writeln!(out, "  Addresses:");
        for a in &detail.addresses {
            let _ = writeln!(out, "    {}", a.address.single_line_address(true));
        }
    }
    out
}

fn label_suffix(label: Option<&str>) -> String {
    label.map(|l| format!(" ({})", l)).unwrap_or_default()
}
