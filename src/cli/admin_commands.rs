use rusqlite::Connection;

use crate::cli::context::CLIContext;
use crate::error::ContactsResult;
use crate::queries::address_queries::{self, AddressFilter};
use crate::queries::contact_queries::{self, ContactFilter};
use crate::queries::email_queries::{self, EmailFilter};
use crate::queries::phone_queries::{self, PhoneFilter};
use crate::queries::parse_has_unit;

/// Splits `--flag value` pairs off the argument string. Whatever is left
/// over is joined back into the free-text search term.
fn parse_flags<'a>(args: &'a str) -> (Vec<(&'a str, &'a str)>, Option<String>) {
    let mut flags = Vec::new();
    let mut rest = Vec::new();
    let mut words = args.split_whitespace();
    while let Some(word) = words.next() {
        if let Some(flag) = word.strip_prefix("--") {
            flags.push((flag, words.next().unwrap_or("")));
        } else {
            rest.push(word);
        }
    }
    let search = if rest.is_empty() { None } else { Some(rest.join(" ")) };
    (flags, search)
}

fn unknown_flag(flag: &str, usage: &str) {
    println!("Unknown option --{}", flag);
    println!("Usage: {}", usage);
}

/// Job titles in use, for `contacts --title`.
fn title_choices(conn: &Connection) -> ContactsResult<String> {
    let titles = contact_queries::job_titles(conn)?;
    Ok(choices("Job titles", &titles))
}

/// Cities and states in use, for `addresses --city` and `--state`.
fn place_choices(conn: &Connection) -> ContactsResult<String> {
    let pairs = address_queries::cities(conn)?;
    let cities: Vec<String> = pairs.iter().map(|(c, s)| format!("{}, {}", c, s)).collect();
    let mut states: Vec<String> = pairs.into_iter().map(|(_, s)| s).collect();
    states.dedup();
    Ok(format!("{}{}", choices("Cities", &cities), choices("States", &states)))
}

fn choices(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("{}: none yet\n", heading)
    } else {
        format!("{}: {}\n", heading, items.join("; "))
    }
}

fn print_choices(ctx: &CLIContext, result: ContactsResult<String>) {
    match result {
        Ok(text) => print!("{}", text),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn contacts(ctx: &CLIContext, args: &str) {
    const USAGE: &str = "contacts [--title T] [search]";
    let (flags, search) = parse_flags(args);
    let mut filter = ContactFilter {
        search,
        ..Default::default()
    };
    for (flag, value) in flags {
        match flag {
            "title" if value.is_empty() => {
                println!("Usage: {}", USAGE);
                return print_choices(ctx, title_choices(&ctx.conn));
            }
            "title" => filter.job_title = Some(value.to_string()),
            _ => return unknown_flag(flag, USAGE),
        }
    }

    let contacts = match contact_queries::list(&ctx.conn, &filter) {
        Ok(c) => c,
        Err(e) => return ctx.print_error(&e),
    };
    if contacts.is_empty() {
        println!("No matching contacts.");
        if filter.job_title.is_some() {
            print_choices(ctx, title_choices(&ctx.conn));
        }
        return;
    }
    println!("{:<30} {:<30} {}", "NAME", "JOB TITLE", "UPDATED");
    for c in &contacts {
        println!(
            "{:<30} {:<30} {}",
            c.full_name(),
            c.name.job_title.as_deref().unwrap_or("-"),
            c.audit.updated_on.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn addresses(ctx: &CLIContext, args: &str) {
    const USAGE: &str = "addresses [--unit yes|no] [--state XX] [--city C] [--contact name] [search]";
    let (flags, search) = parse_flags(args);
    let mut filter = AddressFilter {
        search,
        ..Default::default()
    };
    for (flag, value) in flags {
        match flag {
            "unit" => match parse_has_unit(value) {
                Some(b) => filter.has_unit = Some(b),
                None => {
                    println!("--unit takes yes or no");
                    return;
                }
            },
            "state" | "city" if value.is_empty() => {
                println!("Usage: {}", USAGE);
                return print_choices(ctx, place_choices(&ctx.conn));
            }
            "state" => filter.state = Some(value.to_uppercase()),
            "city" => filter.city = Some(value.to_string()),
            "contact" => match ctx.find_contact(value) {
                Some(c) => filter.contact_id = Some(c.id),
                None => return,
            },
            _ => return unknown_flag(flag, USAGE),
        }
    }

    let rows = match address_queries::list(&ctx.conn, &filter) {
        Ok(r) => r,
        Err(e) => return ctx.print_error(&e),
    };
    if rows.is_empty() {
        println!("No matching addresses.");
        if filter.city.is_some() || filter.state.is_some() {
            print_choices(ctx, place_choices(&ctx.conn));
        }
        return;
    }
    println!("{:<25} {:<45} {}", "CONTACT", "ADDRESS", "UNIT");
    for row in &rows {
        println!(
            "{:<25} {:<45} {}",
            row.contact_name,
            row.short_address(),
            if row.has_unit() { "yes" } else { "no" }
        );
    }
}

pub fn emails(ctx: &CLIContext, args: &str) {
    const USAGE: &str = "emails [--label L] [--contact name] [search]";
    let (flags, search) = parse_flags(args);
    let mut filter = EmailFilter {
        search,
        ..Default::default()
    };
    for (flag, value) in flags {
        match flag {
            "label" => filter.label = Some(value.to_string()),
            "contact" => match ctx.find_contact(value) {
                Some(c) => filter.contact_id = Some(c.id),
                None => return,
            },
            _ => return unknown_flag(flag, USAGE),
        }
    }

    let rows = match email_queries::list(&ctx.conn, &filter) {
        Ok(r) => r,
        Err(e) => return ctx.print_error(&e),
    };
    if rows.is_empty() {
        println!("No matching email addresses.");
        return;
    }
    println!("{:<25} {:<35} {}", "CONTACT", "EMAIL", "LABEL");
    for row in &rows {
        println!(
            "{:<25} {:<35} {}",
            row.contact_name,
            row.entry.email_address,
            row.entry.label.as_deref().unwrap_or("-")
        );
    }
}

pub fn phones(ctx: &CLIContext, args: &str) {
    const USAGE: &str = "phones [--label L] [--contact name] [search]";
    let (flags, search) = parse_flags(args);
    let mut filter = PhoneFilter {
        search,
        ..Default::default()
    };
    for (flag, value) in flags {
        match flag {
            "label" => filter.label = Some(value.to_string()),
            "contact" => match ctx.find_contact(value) {
                Some(c) => filter.contact_id = Some(c.id),
                None => return,
            },
            _ => return unknown_flag(flag, USAGE),
        }
    }

    let rows = match phone_queries::list(&ctx.conn, &filter) {
        Ok(r) => r,
        Err(e) => return ctx.print_error(&e),
    };
    if rows.is_empty() {
        println!("No matching phone numbers.");
        return;
    }
    println!("{:<25} {:<20} {}", "CONTACT", "PHONE", "LABEL");
    for row in &rows {
        println!(
            "{:<25} {:<20} {}",
            row.contact_name,
            row.entry.phone_number.to_string(),
            row.entry.label.as_deref().unwrap_or("-")
        );
    }
}

/// Searches contacts, addresses, emails and phone numbers at once.
pub fn find(ctx: &CLIContext, args: &str) {
    let query = args.trim();
    if query.is_empty() {
        println!("Usage: find <query>");
        return;
    }
    let term = Some(query.to_string());

    let contacts = contact_queries::list(
        &ctx.conn,
        &ContactFilter {
            search: term.clone(),
            ..Default::default()
        },
    );
    let addresses = address_queries::list(
        &ctx.conn,
        &AddressFilter {
            search: term.clone(),
            ..Default::default()
        },
    );
    let emails = email_queries::list(
        &ctx.conn,
        &EmailFilter {
            search: term.clone(),
            ..Default::default()
        },
    );
    let phones = phone_queries::list(
        &ctx.conn,
        &PhoneFilter {
            search: term,
            ..Default::default()
        },
    );

    let mut found = false;
    match contacts {
        Ok(list) if !list.is_empty() => {
            found = true;
            println!("Contacts:");
            for c in &list {
                println!("  {}", c);
            }
        }
        Ok(_) => {}
        Err(e) => ctx.print_error(&e),
    }
    match addresses {
        Ok(rows) if !rows.is_empty() => {
            found = true;
            println!("Addresses:");
            for r in &rows {
                println!("  {}: {}", r.contact_name, r.short_address());
            }
        }
        Ok(_) => {}
        Err(e) => ctx.print_error(&e),
    }
    match emails {
        Ok(rows) if !rows.is_empty() => {
            found = true;
            println!("Emails:");
            for r in &rows {
                println!("  {}: {}", r.contact_name, r.entry.email_address);
            }
        }
        Ok(_) => {}
        Err(e) => ctx.print_error(&e),
    }
    match phones {
        Ok(rows) if !rows.is_empty() => {
            found = true;
            println!("Phone numbers:");
            for r in &rows {
                println!("  {}: {}", r.contact_name, r.entry.phone_number);
            }
        }
        Ok(_) => {}
        Err(e) => ctx.print_error(&e),
    }
    if !found {
        println!("Nothing matches '{}'", query);
    }
}
