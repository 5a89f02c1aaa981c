use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ContactsError, ContactsResult};
use crate::model::PhoneNumber;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .expect("Invalid email regex")
});

static ZIPCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").expect("Invalid zipcode regex"));

pub const EMAIL_MAX_LENGTH: usize = 254;

/// Postal codes accepted for a US address, with the names they may be
/// entered as.
pub const US_STATES: &[(&str, &str)] = &[
    ("AA", "Armed Forces Americas"),
    ("AE", "Armed Forces Europe"),
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AP", "Armed Forces Pacific"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactsResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactsError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Rejects values longer than `max` characters (not bytes).
pub fn max_length(value: &str, max: usize, field: &str) -> ContactsResult<()> {
    if value.chars().count() > max {
        Err(ContactsError::TooLong {
            field: field.to_string(),
            max,
        })
    } else {
        Ok(())
    }
}

/// `non_blank` followed by `max_length`.
pub fn required(value: &str, max: usize, field: &str) -> ContactsResult<String> {
    let trimmed = non_blank(value, field)?;
    max_length(&trimmed, max, field)?;
    Ok(trimmed)
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trims an optional string and enforces a maximum length on what remains.
pub fn optional(value: Option<&str>, max: usize, field: &str) -> ContactsResult<Option<String>> {
    let trimmed = trim_optional(value);
    if let Some(v) = &trimmed {
        max_length(v, max, field)?;
    }
    Ok(trimmed)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts after any non-alphabetic character.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes and checks an email address. Returns the normalized form.
pub fn email(value: &str, field: &str) -> ContactsResult<String> {
    let normalized = normalize_email(value);
    if normalized.is_empty() {
        return Err(ContactsError::BlankField {
            field: field.to_string(),
        });
    }
    max_length(&normalized, EMAIL_MAX_LENGTH, field)?;
    if !EMAIL_REGEX.is_match(&normalized) {
        return Err(ContactsError::InvalidFormat {
            field: field.to_string(),
            expected: "email address".into(),
        });
    }
    Ok(normalized)
}

/// Accepts a two-letter code in any case or a full state name.
/// Returns the upper-case code.
pub fn us_state(value: &str, field: &str) -> ContactsResult<String> {
    let trimmed = non_blank(value, field)?;
    US_STATES
        .iter()
        .find(|(code, name)| {
            code.eq_ignore_ascii_case(&trimmed) || name.eq_ignore_ascii_case(&trimmed)
        })
        .map(|(code, _)| code.to_string())
        .ok_or_else(|| ContactsError::InvalidFormat {
            field: field.to_string(),
            expected: "US state".into(),
        })
}

pub fn us_zipcode(value: &str, field: &str) -> ContactsResult<String> {
    let trimmed = non_blank(value, field)?;
    if ZIPCODE_REGEX.is_match(&trimmed) {
        Ok(trimmed)
    } else {
        Err(ContactsError::InvalidFormat {
            field: field.to_string(),
            expected: "zip code (XXXXX or XXXXX-XXXX)".into(),
        })
    }
}

pub fn phone_number(value: &str, field: &str) -> ContactsResult<PhoneNumber> {
    non_blank(value, field)?;
    PhoneNumber::parse(value).ok_or_else(|| ContactsError::InvalidFormat {
        field: field.to_string(),
        expected: "phone number".into(),
    })
}
