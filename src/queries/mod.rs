//! List, search and filter queries backing the admin screens.

pub mod contact_queries;
pub mod address_queries;
pub mod email_queries;
pub mod phone_queries;

use rusqlite::types::ToSql;

use crate::db::contains_pattern;

/// Accumulates `AND`-joined WHERE clauses with their positional parameters.
#[derive(Default)]
pub(crate) struct Conditions {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl Conditions {
    /// Adds a clause with one `?` placeholder.
    pub fn push<T: ToSql + 'static>(&mut self, clause: &str, value: T) {
        self.clauses.push(clause.to_string());
        self.params.push(Box::new(value));
    }

    /// Adds a clause whose `?` placeholders take `values` in order.
    pub fn push_many(&mut self, clause: &str, values: Vec<Box<dyn ToSql>>) {
        self.clauses.push(clause.to_string());
        self.params.extend(values);
    }

    /// Adds a clause with no parameters.
    pub fn push_raw(&mut self, clause: &str) {
        self.clauses.push(clause.to_string());
    }

    /// Case-insensitive substring match of `term` against any of `columns`.
    /// `%` and `_` in the term match themselves. Blank terms add nothing.
    pub fn search(&mut self, columns: &[&str], term: Option<&str>) {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return;
        };
        let pattern = contains_pattern(term);
        let ors: Vec<String> = columns
            .iter()
            .map(|c| format!(r"LOWER(COALESCE({}, '')) LIKE ? ESCAPE '\'", c))
            .collect();
        self.clauses.push(format!("({})", ors.join(" OR ")));
        for _ in columns {
            self.params.push(Box::new(pattern.clone()));
        }
    }

    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> impl Iterator<Item = &Box<dyn ToSql>> {
        self.params.iter()
    }
}

/// Reads the yes/no choice of the "has unit" filter.
pub fn parse_has_unit(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" | "1" | "y" => Some(true),
        "no" | "false" | "0" | "n" => Some(false),
        _ => None,
    }
}

pub(crate) const CONTACT_NAME_SQL: &str = "(c.first_name || ' ' || c.last_name)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conditions_render_nothing() {
        let c = Conditions::default();
        assert_eq!(c.where_sql(), "");
        assert_eq!(c.params().count(), 0);
    }

    #[test]
    fn search_binds_one_pattern_per_column() {
        let mut c = Conditions::default();
        c.push("state = ?", "CT".to_string());
        c.search(&["a", "b"], Some("  Main "));
        assert_eq!(
            c.where_sql(),
            r"WHERE state = ? AND (LOWER(COALESCE(a, '')) LIKE ? ESCAPE '\' OR LOWER(COALESCE(b, '')) LIKE ? ESCAPE '\')"
        );
        assert_eq!(c.params().count(), 3);
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Main"), "%main%");
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut c = Conditions::default();
        c.search(&["a"], Some("   "));
        c.search(&["a"], None);
        assert_eq!(c.where_sql(), "");
    }

    #[test]
    fn has_unit_choices() {
        assert_eq!(parse_has_unit("Yes"), Some(true));
        assert_eq!(parse_has_unit("false"), Some(false));
        assert_eq!(parse_has_unit("maybe"), None);
    }
}
