use crate::cli::context::CLIContext;
use crate::forms::{ContactForm, ContactWithDetailsForm};
use crate::ops::*;
use crate::views;

pub fn list(ctx: &CLIContext) {
    match views::contact_list(&ctx.conn) {
        Ok(contacts) => print!("{}", views::render_list(&contacts)),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name>");
        return;
    }
    let Some(contact) = ctx.find_contact(args) else {
        return;
    };

    match views::contact_detail(&ctx.conn, contact.id) {
        Ok(detail) => {
            println!();
            print!("{}", views::render_detail(&detail));
            println!();
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// Collects a new contact with one email, phone number and address.
pub fn add(ctx: &CLIContext) {
    println!("Adding a new contact (required fields are marked *)");
    println!();

    macro_rules! ask {
        ($prompt:expr) => {
            match ctx.prompt($prompt) {
                Some(s) => s,
                None => return,
            }
        };
    }

    let form = ContactWithDetailsForm {
        first_name: ask!("First name*: "),
        last_name: ask!("Last name*: "),
        job_title: ask!("Job title: "),
        description: ask!("About: "),
        email_address: ask!("Email*: "),
        email_label: ask!("Email label* (e.g. work): "),
        phone_number: ask!("Phone*: "),
        phone_label: ask!("Phone label* (e.g. mobile): "),
        address_label: ask!("Address label* (e.g. home): "),
        building_number: ask!("Building number*: "),
        street_name: ask!("Street name*: "),
        unit_type: ask!("Unit type (Suite, Box, Unit...): "),
        unit_number: ask!("Unit number: "),
        city: ask!("City*: "),
        state: ask!("State*: "),
        zipcode: ask!("Zipcode*: "),
    };

    match contact_ops::add_contact_with_details(&ctx.conn, ctx.actor(), &form) {
        Ok(detail) => println!("Added {}", detail.contact.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}

/// Adds a contact with just name fields, e.g. `quick-add Ada Lovelace`.
pub fn quick_add(ctx: &CLIContext, args: &str) {
    let mut parts = args.splitn(2, char::is_whitespace);
    let form = ContactForm {
        first_name: parts.next().unwrap_or_default().to_string(),
        last_name: parts.next().unwrap_or_default().trim().to_string(),
        ..Default::default()
    };
    match contact_ops::add_contact(&ctx.conn, ctx.actor(), &form) {
        Ok(contact) => println!("Added {}", contact.full_name()),
        Err(e) => {
            ctx.print_error(&e);
            println!("Usage: quick-add <first name> <last name>");
        }
    }
}

pub fn edit(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: edit-contact <name>");
        return;
    }
    let Some(contact) = ctx.find_contact(args) else {
        return;
    };

    println!("Editing {} (Enter keeps a value, '-' clears it)", contact.full_name());
    let n = &contact.name;
    let form = ContactForm {
        first_name: match ctx.prompt_keep("First name", Some(&n.first_name)) {
            Some(s) => s,
            None => return,
        },
        last_name: match ctx.prompt_keep("Last name", Some(&n.last_name)) {
            Some(s) => s,
            None => return,
        },
        job_title: match ctx.prompt_keep("Job title", n.job_title.as_deref()) {
            Some(s) => s,
            None => return,
        },
        description: match ctx.prompt_keep("About", n.description.as_deref()) {
            Some(s) => s,
            None => return,
        },
    };

    match contact_ops::update_contact(&ctx.conn, ctx.actor(), contact.id, &form) {
        Ok(updated) => println!("Updated {}", updated.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: delete-contact <name>");
        return;
    }
    let Some(contact) = ctx.find_contact(args) else {
        return;
    };

    let answer = ctx
        .prompt(&format!(
            "Delete {} and all of their addresses, emails and phone numbers? (y/n): ",
            contact.full_name()
        ))
        .unwrap_or_default();
    if !answer.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match contact_ops::delete_contact(&ctx.conn, contact.id) {
        Ok(()) => println!("Deleted {}", contact.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}
