pub mod user_ops;
pub mod contact_ops;
pub mod address_ops;
pub mod email_ops;
pub mod phone_ops;

use rusqlite::Connection;

use crate::db::contact_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::forms::FormErrors;
use crate::model::{Contact, Id};

pub(crate) fn ensure_contact_exists(conn: &Connection, contact_id: Id<Contact>) -> ContactsResult<Contact> {
    contact_repo::find_by_id(conn, contact_id)?
        .ok_or_else(|| ContactsError::not_found("Contact", contact_id))
}

pub(crate) fn rejected(form: &str, errors: FormErrors) -> ContactsError {
    tracing::warn!(form, %errors, "form rejected");
    ContactsError::Invalid(errors)
}
