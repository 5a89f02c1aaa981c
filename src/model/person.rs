use serde::{Deserialize, Serialize};

/// Name and role fields identifying an individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub description: Option<String>,
}

impl PersonName {
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
            job_title: None,
            description: None,
        }
    }

    /// `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `"{first initial}. {last}"`, or `None` when there is no first name to
    /// take an initial from.
    pub fn short_name(&self) -> Option<String> {
        let initial = self.first_name.chars().next()?;
        Some(format!("{}. {}", initial, self.last_name))
    }
}
