use rusqlite::Connection;
use std::io::{self, Write};

use crate::error::ContactsError;
use crate::model::*;
use crate::queries::contact_queries;

pub struct CLIContext {
    pub conn: Connection,
    pub user: User,
}

impl CLIContext {
    pub fn new(conn: Connection, user: User) -> Self {
        Self { conn, user }
    }

    /// The acting user stamped on every change made from this session.
    pub fn actor(&self) -> Id<User> {
        self.user.id
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Prompt showing the current value; Enter keeps it, "-" clears it.
    pub fn prompt_keep(&self, label: &str, current: Option<&str>) -> Option<String> {
        let shown = current.unwrap_or("");
        let input = self.prompt(&format!("{} [{}]: ", label, shown))?;
        Some(match input.as_str() {
            "" => shown.to_string(),
            "-" => String::new(),
            _ => input,
        })
    }

    /// Find a contact by name query. Prints an error if not found or ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<Contact> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = match contact_queries::find_by_name(&self.conn, query) {
            Ok(m) => m,
            Err(e) => {
                self.print_error(&e);
                return None;
            }
        };

        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => matches.into_iter().next(),
            _ => {
                if let Some(exact) = matches
                    .iter()
                    .find(|c| c.full_name().eq_ignore_ascii_case(query))
                {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}", c.full_name());
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Let the user pick one item from a numbered list.
    pub fn choose<'a, T>(&self, items: &'a [T], describe: impl Fn(&T) -> String) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, describe(item));
        }
        let choice = self.prompt(&format!("Choice (1-{}, or Enter to cancel): ", items.len()))?;
        if choice.is_empty() {
            println!("Cancelled.");
            return None;
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => items.get(n - 1),
            _ => {
                println!("Invalid choice.");
                None
            }
        }
    }

    /// Print an error. Form rejections list each bad field.
    pub fn print_error(&self, e: &ContactsError) {
        match e {
            ContactsError::Invalid(errors) => {
                println!("Please fix the following:");
                for fe in errors.errors() {
                    println!("  {}: {}", fe.field, fe.message);
                }
            }
            other => println!("Error: {}", other),
        }
    }
}
