use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

const NANP_COUNTRY_CODE: &str = "1";

/// A telephone number held in canonical E.164 form (`+<country><number>`).
///
/// Input without a leading `+` is read as a North American (NANP) number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses common written forms: `(201) 555-0123`, `201.555.0123`,
    /// `1-201-555-0123`, `+44 20 7946 0958`. Returns `None` when the input
    /// is not a recognizable number.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (international, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if !rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
        {
            return None;
        }
        let digits: String = rest.chars().filter(char::is_ascii_digit).collect();

        if international {
            if let Some(national) = digits.strip_prefix(NANP_COUNTRY_CODE) {
                return Self::nanp(national);
            }
            if !(7..=15).contains(&digits.len()) || digits.starts_with('0') {
                return None;
            }
            return Some(Self(format!("+{}", digits)));
        }

        match digits.len() {
            10 => Self::nanp(&digits),
            11 => digits
                .strip_prefix(NANP_COUNTRY_CODE)
                .and_then(Self::nanp),
            _ => None,
        }
    }

    // Area code and exchange may not start with 0 or 1.
    fn nanp(national: &str) -> Option<Self> {
        let bytes = national.as_bytes();
        if bytes.len() != 10 || bytes[0] < b'2' || bytes[3] < b'2' {
            return None;
        }
        Some(Self(format!("+{}{}", NANP_COUNTRY_CODE, national)))
    }

    pub fn as_e164(&self) -> &str {
        &self.0
    }

    pub fn is_nanp(&self) -> bool {
        self.0.len() == 12 && self.0.starts_with("+1")
    }

    /// `(AAA) BBB-CCCC` for NANP numbers, E.164 for everything else.
    pub fn as_national(&self) -> String {
        if self.is_nanp() {
            let n = &self.0[2..];
            format!("({}) {}-{}", &n[..3], &n[3..6], &n[6..])
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_national())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhoneNumber::parse(&value).ok_or_else(|| format!("invalid phone number: {}", value))
    }
}

impl From<PhoneNumber> for String {
    fn from(p: PhoneNumber) -> Self {
        p.0
    }
}

impl ToSql for PhoneNumber {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for PhoneNumber {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        PhoneNumber::parse(s).ok_or_else(|| {
            FromSqlError::Other(format!("invalid stored phone number: {}", s).into())
        })
    }
}
