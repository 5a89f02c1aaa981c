use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT_TYPE: &str = "unit";

/// A US postal address.
///
/// Every rendering is pure string composition over the fields. The unit
/// line exists only when `unit_number` is set and always sits between the
/// street and the city/state/zip line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsAddress {
    /// Optional reference label, e.g. "home" or "office".
    pub name: Option<String>,
    /// Building number and street name.
    pub street: String,
    pub unit_type: String,
    pub unit_number: Option<String>,
    pub city: String,
    /// Two-letter state or territory code.
    pub state: String,
    pub zipcode: String,
}

impl UsAddress {
    pub fn new(street: String, city: String, state: String, zipcode: String) -> Self {
        Self {
            name: None,
            street,
            unit_type: DEFAULT_UNIT_TYPE.into(),
            unit_number: None,
            city,
            state,
            zipcode,
        }
    }

    pub fn has_unit(&self) -> bool {
        self.unit_number.is_some()
    }

    pub fn unit_line(&self) -> Option<String> {
        self.unit_number
            .as_ref()
            .map(|n| format!("{} {}", self.unit_type, n))
    }

    pub fn region_line(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    pub fn last_line(&self) -> String {
        format!("{} {}", self.region_line(), self.zipcode)
    }

    pub fn full_address_lines(&self) -> Vec<String> {
        let mut lines = vec![self.street.clone()];
        if let Some(unit) = self.unit_line() {
            lines.push(unit);
        }
        lines.push(self.last_line());
        lines
    }

    pub fn short_address_lines(&self) -> Vec<String> {
        vec![self.street.clone(), self.region_line()]
    }

    pub fn single_line_address(&self, named: bool) -> String {
        self.prefixed(self.full_address_lines().join(", "), named, ": ")
    }

    pub fn multi_line_address(&self, named: bool) -> String {
        self.prefixed(self.full_address_lines().join("\n"), named, "\n")
    }

    pub fn short_address(&self, named: bool) -> String {
        self.prefixed(self.short_address_lines().join(", "), named, ": ")
    }

    fn prefixed(&self, addr: String, named: bool, sep: &str) -> String {
        match (&self.name, named) {
            (Some(name), true) => format!("{}{}{}", name, sep, addr),
            _ => addr,
        }
    }
}

impl fmt::Display for UsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_address(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UsAddress {
        UsAddress::new(
            "123 Main St".into(),
            "Putnam".into(),
            "CT".into(),
            "06260".into(),
        )
    }

    #[test]
    fn lines_without_unit() {
        let addr = sample();
        assert!(!addr.has_unit());
        assert_eq!(addr.unit_line(), None);
        assert_eq!(addr.full_address_lines(), vec!["123 Main St", "Putnam, CT 06260"]);
    }

    #[test]
    fn unit_line_is_second() {
        let mut addr = sample();
        addr.unit_type = "Suite".into();
        addr.unit_number = Some("105".into());

        let lines = addr.full_address_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Suite 105");
    }

    #[test]
    fn default_unit_type_is_unit() {
        let mut addr = sample();
        addr.unit_number = Some("4B".into());
        assert_eq!(addr.unit_line().as_deref(), Some("unit 4B"));
    }

    #[test]
    fn renderings() {
        let mut addr = sample();
        addr.unit_number = Some("2".into());
        addr.name = Some("home".into());

        assert_eq!(
            addr.single_line_address(false),
            "123 Main St, unit 2, Putnam, CT 06260"
        );
        assert_eq!(
            addr.single_line_address(true),
            "home: 123 Main St, unit 2, Putnam, CT 06260"
        );
        assert_eq!(
            addr.multi_line_address(true),
            "home\n123 Main St\nunit 2\nPutnam, CT 06260"
        );
        assert_eq!(addr.short_address(true), "home: 123 Main St, Putnam, CT");
        assert_eq!(addr.to_string(), "123 Main St, Putnam, CT");
    }

    #[test]
    fn named_without_name_has_no_prefix() {
        let addr = sample();
        assert_eq!(addr.single_line_address(true), "123 Main St, Putnam, CT 06260");
        assert_eq!(addr.multi_line_address(true), "123 Main St\nPutnam, CT 06260");
    }
}
