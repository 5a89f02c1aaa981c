pub mod context;
pub mod contact_commands;
pub mod detail_commands;
pub mod admin_commands;

use rusqlite::Connection;
use tracing::{error, info};

use crate::config::Config;
use crate::db::schema;
use crate::ops::user_ops;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: &Config) {
    println!("Contacts");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match Connection::open(&config.db_path) {
        Ok(c) => c,
        Err(e) => {
            error!(path = %config.db_path.display(), error = %e, "cannot open database");
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        return;
    }

    let ctx = match sign_in(conn, config.username.as_deref()) {
        Some(ctx) => ctx,
        None => return,
    };
    info!(username = %ctx.user.username, "session started");

    repl_loop(&ctx);
}

/// Every change is stamped with a user, so a session needs one before any
/// command runs. Unknown names are registered on first use.
fn sign_in(conn: Connection, username: Option<&str>) -> Option<CLIContext> {
    let username = match username {
        Some(u) => u.to_string(),
        None => {
            print!("Username: ");
            use std::io::Write;
            std::io::stdout().flush().ok();
            let mut buf = String::new();
            std::io::stdin().read_line(&mut buf).ok()?;
            buf.trim().to_string()
        }
    };

    let lower = username.to_lowercase();
    if lower == "exit" || lower == "quit" || lower == "q" {
        return None;
    }

    match user_ops::find_or_register(&conn, &username) {
        Ok(user) => {
            println!("Signed in as {}", user.username);
            println!();
            Some(CLIContext::new(conn, user))
        }
        Err(e) => {
            println!("Cannot sign in: {}", e);
            None
        }
    }
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Contacts
            "list" | "ls" => contact_commands::list(ctx),
            "show" | "view" => contact_commands::show(ctx, args),
            "add-contact" | "add" => contact_commands::add(ctx),
            "quick-add" => contact_commands::quick_add(ctx, args),
            "edit-contact" => contact_commands::edit(ctx, args),
            "delete-contact" => contact_commands::delete(ctx, args),

            // Contact details
            "add-address" => detail_commands::add_address(ctx, args),
            "edit-address" => detail_commands::edit_address(ctx, args),
            "remove-address" => detail_commands::remove_address(ctx, args),
            "add-email" => detail_commands::add_email(ctx, args),
            "edit-email" => detail_commands::edit_email(ctx, args),
            "remove-email" => detail_commands::remove_email(ctx, args),
            "add-phone" => detail_commands::add_phone(ctx, args),
            "edit-phone" => detail_commands::edit_phone(ctx, args),
            "remove-phone" => detail_commands::remove_phone(ctx, args),

            // Admin lists
            "contacts" => admin_commands::contacts(ctx, args),
            "addresses" => admin_commands::addresses(ctx, args),
            "emails" => admin_commands::emails(ctx, args),
            "phones" => admin_commands::phones(ctx, args),
            "find" => admin_commands::find(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into the command word and the rest.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Contacts:
    list                      List all contacts
    show <name>               Show a contact with addresses, emails and phones
    add-contact               Add a contact with an email, phone and address
    quick-add <first> <last>  Add a contact by name only
    edit-contact <name>       Edit name, job title and description
    delete-contact <name>     Delete a contact and everything attached to it

  Details:
    add-address <name>        Add an address to a contact
    edit-address <name>       Edit one of a contact's addresses
    remove-address <name>     Remove one of a contact's addresses
    add-email <name>          Add an email address
    edit-email <name>         Edit an email address
    remove-email <name>       Remove an email address
    add-phone <name>          Add a phone number
    edit-phone <name>         Edit a phone number
    remove-phone <name>       Remove a phone number

  Admin:
    contacts [--title T] [search]
    addresses [--unit yes|no] [--state XX] [--city C] [--contact name] [search]
    emails [--label L] [--contact name] [search]
    phones [--label L] [--contact name] [search]
    find <query>              Search everything

  Other:
    help                      Show this help
    exit / quit / q           Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - When editing, Enter keeps a value and '-' clears it
  - 'contacts --title' alone lists job titles in use; 'addresses --city'
    or '--state' alone lists cities and states"#);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_splits_first_word() {
        assert_eq!(parse_command("show  Jack Hoff "), ("show", "Jack Hoff"));
        assert_eq!(parse_command("list"), ("list", ""));
        assert_eq!(parse_command("find\tacme"), ("find", "acme"));
    }
}
