use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::UsAddress;
use super::audit::AuditStamp;
use super::ids::Id;
use super::person::PersonName;
use super::phone::PhoneNumber;
use super::user::User;

/// A person record. Addresses, emails and phone numbers hang off it and are
/// deleted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    #[serde(flatten)]
    pub name: PersonName,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

impl Contact {
    pub fn create(name: PersonName, actor: Id<User>, now: DateTime<Utc>) -> Self {
        Self {
            id: Id::generate(),
            name,
            audit: AuditStamp::new(actor, now),
        }
    }

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn short_name(&self) -> Option<String> {
        self.name.short_name()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAddress {
    pub id: Id<ContactAddress>,
    pub contact_id: Id<Contact>,
    #[serde(flatten)]
    pub address: UsAddress,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

impl ContactAddress {
    pub fn create(
        contact_id: Id<Contact>,
        address: UsAddress,
        actor: Id<User>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Id::generate(),
            contact_id,
            address,
            audit: AuditStamp::new(actor, now),
        }
    }
}

impl fmt::Display for ContactAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.address.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEmail {
    pub id: Id<ContactEmail>,
    pub contact_id: Id<Contact>,
    /// Stored trimmed and lowercased; unique across all contacts.
    pub email_address: String,
    pub label: Option<String>,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

impl ContactEmail {
    pub fn create(
        contact_id: Id<Contact>,
        email_address: String,
        label: Option<String>,
        actor: Id<User>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Id::generate(),
            contact_id,
            email_address,
            label,
            audit: AuditStamp::new(actor, now),
        }
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email_address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPhoneNumber {
    pub id: Id<ContactPhoneNumber>,
    pub contact_id: Id<Contact>,
    pub phone_number: PhoneNumber,
    pub label: Option<String>,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

impl ContactPhoneNumber {
    pub fn create(
        contact_id: Id<Contact>,
        phone_number: PhoneNumber,
        label: Option<String>,
        actor: Id<User>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Id::generate(),
            contact_id,
            phone_number,
            label,
            audit: AuditStamp::new(actor, now),
        }
    }
}

impl fmt::Display for ContactPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.phone_number.fmt(f)
    }
}

/// A contact with all of its child records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub contact: Contact,
    pub addresses: Vec<ContactAddress>,
    pub emails: Vec<ContactEmail>,
    pub phone_numbers: Vec<ContactPhoneNumber>,
}
