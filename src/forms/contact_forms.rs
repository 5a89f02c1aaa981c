use serde::{Deserialize, Serialize};

use crate::model::{Contact, Id, PersonName, PhoneNumber, UsAddress, DEFAULT_UNIT_TYPE};
use crate::validation;

use super::FormErrors;

pub const NAME_MAX: usize = 50;
pub const JOB_TITLE_MAX: usize = 50;
pub const BUILDING_NUMBER_MAX: usize = 50;
pub const STREET_MAX: usize = 150;
pub const UNIT_TYPE_MAX: usize = 20;
pub const UNIT_NUMBER_MAX: usize = 20;
pub const CITY_MAX: usize = 150;
pub const LABEL_MAX: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub description: String,
}

impl ContactForm {
    pub fn clean(&self) -> Result<PersonName, FormErrors> {
        let mut errors = FormErrors::new();
        let name = clean_person(
            &mut errors,
            &self.first_name,
            &self.last_name,
            &self.job_title,
            &self.description,
        );
        match name {
            Some(name) if errors.is_empty() => Ok(name),
            _ => Err(errors),
        }
    }
}

/// Street is entered as building number and street name, stored joined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactAddressForm {
    pub contact: String,
    pub name: String,
    pub building_number: String,
    pub street_name: String,
    pub unit_type: String,
    pub unit_number: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedAddress {
    pub contact_id: Id<Contact>,
    pub address: UsAddress,
}

impl ContactAddressForm {
    pub fn clean(&self) -> Result<CleanedAddress, FormErrors> {
        let mut errors = FormErrors::new();
        let contact_id = clean_contact_ref(&mut errors, &self.contact);
        let address = self.address(&mut errors);

        match (contact_id, address) {
            (Some(contact_id), Some(address)) if errors.is_empty() => {
                Ok(CleanedAddress { contact_id, address })
            }
            _ => Err(errors),
        }
    }

    /// Everything but the owning contact, which edits leave alone.
    pub fn clean_fields(&self) -> Result<UsAddress, FormErrors> {
        let mut errors = FormErrors::new();
        match self.address(&mut errors) {
            Some(address) if errors.is_empty() => Ok(address),
            _ => Err(errors),
        }
    }

    fn address(&self, errors: &mut FormErrors) -> Option<UsAddress> {
        let name = errors.check("name", validation::optional(Some(self.name.as_str()), LABEL_MAX, "name"));
        let mut address = clean_address(
            errors,
            AddressFields {
                building_number: &self.building_number,
                street_name: &self.street_name,
                unit_type: &self.unit_type,
                unit_number: &self.unit_number,
                city: &self.city,
                state: &self.state,
                zipcode: &self.zipcode,
            },
        )?;
        address.name = name?;
        Some(address)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactEmailForm {
    pub contact: String,
    pub email_address: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedEmail {
    pub contact_id: Id<Contact>,
    pub email_address: String,
    pub label: Option<String>,
}

/// Email values without the owning contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailFields {
    pub email_address: String,
    pub label: Option<String>,
}

impl ContactEmailForm {
    pub fn clean(&self) -> Result<CleanedEmail, FormErrors> {
        let mut errors = FormErrors::new();
        let contact_id = clean_contact_ref(&mut errors, &self.contact);
        let fields = self.fields(&mut errors);

        match (contact_id, fields) {
            (Some(contact_id), Some(fields)) if errors.is_empty() => Ok(CleanedEmail {
                contact_id,
                email_address: fields.email_address,
                label: fields.label,
            }),
            _ => Err(errors),
        }
    }

    /// Everything but the owning contact, which edits leave alone.
    pub fn clean_fields(&self) -> Result<EmailFields, FormErrors> {
        let mut errors = FormErrors::new();
        match self.fields(&mut errors) {
            Some(fields) if errors.is_empty() => Ok(fields),
            _ => Err(errors),
        }
    }

    fn fields(&self, errors: &mut FormErrors) -> Option<EmailFields> {
        let email = errors.check(
            "email_address",
            validation::email(&self.email_address, "email address"),
        );
        let label = errors.check("label", validation::optional(Some(self.label.as_str()), LABEL_MAX, "label"));
        Some(EmailFields {
            email_address: email?,
            label: label?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPhoneNumberForm {
    pub contact: String,
    pub phone_number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPhoneNumber {
    pub contact_id: Id<Contact>,
    pub phone_number: PhoneNumber,
    pub label: Option<String>,
}

/// Phone values without the owning contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFields {
    pub phone_number: PhoneNumber,
    pub label: Option<String>,
}

impl ContactPhoneNumberForm {
    pub fn clean(&self) -> Result<CleanedPhoneNumber, FormErrors> {
        let mut errors = FormErrors::new();
        let contact_id = clean_contact_ref(&mut errors, &self.contact);
        let fields = self.fields(&mut errors);

        match (contact_id, fields) {
            (Some(contact_id), Some(fields)) if errors.is_empty() => Ok(CleanedPhoneNumber {
                contact_id,
                phone_number: fields.phone_number,
                label: fields.label,
            }),
            _ => Err(errors),
        }
    }

    /// Everything but the owning contact, which edits leave alone.
    pub fn clean_fields(&self) -> Result<PhoneFields, FormErrors> {
        let mut errors = FormErrors::new();
        match self.fields(&mut errors) {
            Some(fields) if errors.is_empty() => Ok(fields),
            _ => Err(errors),
        }
    }

    fn fields(&self, errors: &mut FormErrors) -> Option<PhoneFields> {
        let phone = errors.check(
            "phone_number",
            validation::phone_number(&self.phone_number, "phone number"),
        );
        let label = errors.check("label", validation::optional(Some(self.label.as_str()), LABEL_MAX, "label"));
        Some(PhoneFields {
            phone_number: phone?,
            label: label?,
        })
    }
}

/// A new contact together with one email, one phone number and one
/// address. Each child record needs a label here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactWithDetailsForm {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub description: String,
    pub email_address: String,
    pub email_label: String,
    pub phone_number: String,
    pub phone_label: String,
    pub address_label: String,
    pub building_number: String,
    pub street_name: String,
    pub unit_type: String,
    pub unit_number: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedContactWithDetails {
    pub name: PersonName,
    pub email_address: String,
    pub email_label: String,
    pub phone_number: PhoneNumber,
    pub phone_label: String,
    /// `name` carries the address label.
    pub address: UsAddress,
}

impl ContactWithDetailsForm {
    pub fn clean(&self) -> Result<CleanedContactWithDetails, FormErrors> {
        let mut errors = FormErrors::new();
        let name = clean_person(
            &mut errors,
            &self.first_name,
            &self.last_name,
            &self.job_title,
            &self.description,
        );
        let email = errors.check(
            "email_address",
            validation::email(&self.email_address, "email address"),
        );
        let email_label = errors.check(
            "email_label",
            validation::required(&self.email_label, LABEL_MAX, "email label"),
        );
        let phone = errors.check(
            "phone_number",
            validation::phone_number(&self.phone_number, "phone number"),
        );
        let phone_label = errors.check(
            "phone_label",
            validation::required(&self.phone_label, LABEL_MAX, "phone label"),
        );
        let address_label = errors.check(
            "address_label",
            validation::required(&self.address_label, LABEL_MAX, "address label"),
        );
        let address = clean_address(
            &mut errors,
            AddressFields {
                building_number: &self.building_number,
                street_name: &self.street_name,
                unit_type: &self.unit_type,
                unit_number: &self.unit_number,
                city: &self.city,
                state: &self.state,
                zipcode: &self.zipcode,
            },
        );

        match (name, email, email_label, phone, phone_label, address_label, address) {
            (
                Some(name),
                Some(email_address),
                Some(email_label),
                Some(phone_number),
                Some(phone_label),
                Some(address_label),
                Some(mut address),
            ) if errors.is_empty() => {
                address.name = Some(address_label);
                Ok(CleanedContactWithDetails {
                    name,
                    email_address,
                    email_label,
                    phone_number,
                    phone_label,
                    address,
                })
            }
            _ => Err(errors),
        }
    }
}

fn clean_contact_ref(errors: &mut FormErrors, raw: &str) -> Option<Id<Contact>> {
    if raw.trim().is_empty() {
        errors.add("contact", "contact cannot be blank");
        return None;
    }
    match Id::parse(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add("contact", format!("not a valid contact id: {}", raw.trim()));
            None
        }
    }
}

fn clean_person(
    errors: &mut FormErrors,
    first_name: &str,
    last_name: &str,
    job_title: &str,
    description: &str,
) -> Option<PersonName> {
    let first = errors.check(
        "first_name",
        validation::required(first_name, NAME_MAX, "first name"),
    );
    let last = errors.check(
        "last_name",
        validation::required(last_name, NAME_MAX, "last name"),
    );
    let job_title = errors.check(
        "job_title",
        validation::optional(Some(job_title), JOB_TITLE_MAX, "job title"),
    );

    let mut name = PersonName::new(first?, last?);
    let job_title = job_title?;
    name.job_title = job_title.map(|t| validation::title_case(&t));
    name.description = validation::trim_optional(Some(description));
    Some(name)
}

struct AddressFields<'a> {
    building_number: &'a str,
    street_name: &'a str,
    unit_type: &'a str,
    unit_number: &'a str,
    city: &'a str,
    state: &'a str,
    zipcode: &'a str,
}

fn clean_address(errors: &mut FormErrors, f: AddressFields<'_>) -> Option<UsAddress> {
    let building = errors.check(
        "building_number",
        validation::required(f.building_number, BUILDING_NUMBER_MAX, "building number"),
    );
    let street_name = errors.check(
        "street_name",
        validation::required(f.street_name, STREET_MAX, "street name"),
    );
    let street = match (building, street_name) {
        (Some(b), Some(s)) => {
            let street = format!("{} {}", b, s);
            errors
                .check("street_name", validation::max_length(&street, STREET_MAX, "street"))
                .map(|_| street)
        }
        _ => None,
    };
    let unit_type = errors
        .check(
            "unit_type",
            validation::optional(Some(f.unit_type), UNIT_TYPE_MAX, "unit type"),
        )
        .map(|t| t.unwrap_or_else(|| DEFAULT_UNIT_TYPE.to_string()));
    let unit_number = errors.check(
        "unit_number",
        validation::optional(Some(f.unit_number), UNIT_NUMBER_MAX, "unit number"),
    );
    let city = errors.check("city", validation::required(f.city, CITY_MAX, "city"));
    let state = errors.check("state", validation::us_state(f.state, "state"));
    let zipcode = errors.check("zipcode", validation::us_zipcode(f.zipcode, "zipcode"));

    let mut address = UsAddress::new(street?, city?, state?, zipcode?);
    address.unit_type = unit_type?;
    address.unit_number = unit_number?;
    Some(address)
}
