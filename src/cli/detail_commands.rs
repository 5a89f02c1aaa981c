use crate::cli::context::CLIContext;
use crate::db::{address_repo, email_repo, phone_repo};
use crate::forms::{ContactAddressForm, ContactEmailForm, ContactPhoneNumberForm};
use crate::model::*;
use crate::ops::*;

fn contact_arg(ctx: &CLIContext, args: &str, usage: &str) -> Option<Contact> {
    if args.is_empty() {
        println!("Usage: {}", usage);
        return None;
    }
    ctx.find_contact(args)
}

// ---- addresses ----

pub fn add_address(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "add-address <name>") else {
        return;
    };
    let Some(form) = address_form(ctx, contact.id, None) else {
        return;
    };
    match address_ops::add_address(&ctx.conn, ctx.actor(), &form) {
        Ok(entry) => println!("Added address: {}", entry.address.single_line_address(false)),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit_address(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "edit-address <name>") else {
        return;
    };
    let addresses = address_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if addresses.is_empty() {
        println!("{} has no addresses.", contact.full_name());
        return;
    }
    let Some(entry) = ctx.choose(&addresses, |a| a.address.single_line_address(true)) else {
        return;
    };
    let Some(form) = address_form(ctx, contact.id, Some(&entry.address)) else {
        return;
    };
    match address_ops::update_address(&ctx.conn, ctx.actor(), entry.id, &form) {
        Ok(updated) => println!("Updated address: {}", updated.address.single_line_address(false)),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove_address(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "remove-address <name>") else {
        return;
    };
    let addresses = address_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if addresses.is_empty() {
        println!("{} has no addresses.", contact.full_name());
        return;
    }
    if let Some(entry) = ctx.choose(&addresses, |a| a.address.single_line_address(true)) {
        match address_ops::remove_address(&ctx.conn, entry.id) {
            Ok(()) => println!("Removed address."),
            Err(e) => ctx.print_error(&e),
        }
    }
}

// The stored street is one field; editing splits it back at the first space.
fn address_form(
    ctx: &CLIContext,
    contact_id: Id<Contact>,
    current: Option<&UsAddress>,
) -> Option<ContactAddressForm> {
    let (building, street) = match current {
        Some(a) => match a.street.split_once(' ') {
            Some((b, s)) => (Some(b.to_string()), Some(s.to_string())),
            None => (None, Some(a.street.clone())),
        },
        None => (None, None),
    };
    Some(ContactAddressForm {
        contact: contact_id.to_string(),
        name: ctx.prompt_keep("Label", current.and_then(|a| a.name.as_deref()))?,
        building_number: ctx.prompt_keep("Building number*", building.as_deref())?,
        street_name: ctx.prompt_keep("Street name*", street.as_deref())?,
        unit_type: ctx.prompt_keep("Unit type", current.map(|a| a.unit_type.as_str()))?,
        unit_number: ctx.prompt_keep("Unit number", current.and_then(|a| a.unit_number.as_deref()))?,
        city: ctx.prompt_keep("City*", current.map(|a| a.city.as_str()))?,
        state: ctx.prompt_keep("State*", current.map(|a| a.state.as_str()))?,
        zipcode: ctx.prompt_keep("Zipcode*", current.map(|a| a.zipcode.as_str()))?,
    })
}

// ---- emails ----

pub fn add_email(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "add-email <name>") else {
        return;
    };
    let Some(email_address) = ctx.prompt("Email*: ") else {
        return;
    };
    let Some(label) = ctx.prompt("Label (e.g. work, personal): ") else {
        return;
    };
    let form = ContactEmailForm {
        contact: contact.id.to_string(),
        email_address,
        label,
    };
    match email_ops::add_email(&ctx.conn, ctx.actor(), &form) {
        Ok(entry) => println!("Added email: {}", entry),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit_email(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "edit-email <name>") else {
        return;
    };
    let emails = email_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if emails.is_empty() {
        println!("{} has no email addresses.", contact.full_name());
        return;
    }
    let Some(entry) = ctx.choose(&emails, |e| e.email_address.clone()) else {
        return;
    };
    let Some(email_address) = ctx.prompt_keep("Email*", Some(&entry.email_address)) else {
        return;
    };
    let Some(label) = ctx.prompt_keep("Label", entry.label.as_deref()) else {
        return;
    };
    let form = ContactEmailForm {
        contact: contact.id.to_string(),
        email_address,
        label,
    };
    match email_ops::update_email(&ctx.conn, ctx.actor(), entry.id, &form) {
        Ok(updated) => println!("Updated email: {}", updated),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove_email(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "remove-email <name>") else {
        return;
    };
    let emails = email_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if emails.is_empty() {
        println!("{} has no email addresses.", contact.full_name());
        return;
    }
    if let Some(entry) = ctx.choose(&emails, |e| e.email_address.clone()) {
        match email_ops::remove_email(&ctx.conn, entry.id) {
            Ok(()) => println!("Removed {}", entry.email_address),
            Err(e) => ctx.print_error(&e),
        }
    }
}

// ---- phone numbers ----

pub fn add_phone(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "add-phone <name>") else {
        return;
    };
    let Some(phone_number) = ctx.prompt("Phone*: ") else {
        return;
    };
    let Some(label) = ctx.prompt("Label (e.g. mobile, work): ") else {
        return;
    };
    let form = ContactPhoneNumberForm {
        contact: contact.id.to_string(),
        phone_number,
        label,
    };
    match phone_ops::add_phone(&ctx.conn, ctx.actor(), &form) {
        Ok(entry) => println!("Added phone: {}", entry),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit_phone(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "edit-phone <name>") else {
        return;
    };
    let phones = phone_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if phones.is_empty() {
        println!("{} has no phone numbers.", contact.full_name());
        return;
    }
    let Some(entry) = ctx.choose(&phones, |p| p.phone_number.as_national()) else {
        return;
    };
    let current = entry.phone_number.as_national();
    let Some(phone_number) = ctx.prompt_keep("Phone*", Some(&current)) else {
        return;
    };
    let Some(label) = ctx.prompt_keep("Label", entry.label.as_deref()) else {
        return;
    };
    let form = ContactPhoneNumberForm {
        contact: contact.id.to_string(),
        phone_number,
        label,
    };
    match phone_ops::update_phone(&ctx.conn, ctx.actor(), entry.id, &form) {
        Ok(updated) => println!("Updated phone: {}", updated),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove_phone(ctx: &CLIContext, args: &str) {
    let Some(contact) = contact_arg(ctx, args, "remove-phone <name>") else {
        return;
    };
    let phones = phone_repo::find_by_contact(&ctx.conn, contact.id).unwrap_or_default();
    if phones.is_empty() {
        println!("{} has no phone numbers.", contact.full_name());
        return;
    }
    if let Some(entry) = ctx.choose(&phones, |p| p.phone_number.as_national()) {
        match phone_ops::remove_phone(&ctx.conn, entry.id) {
            Ok(()) => println!("Removed {}", entry.phone_number),
            Err(e) => ctx.print_error(&e),
        }
    }
}
