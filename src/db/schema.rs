use rusqlite::Connection;

use crate::error::ContactsResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// Foreign keys are a per-connection setting in SQLite, so this must run on
/// every connection that writes, not just the one that first creates the
/// file.
pub fn initialize(conn: &Connection) -> ContactsResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE COLLATE NOCASE CHECK (length(trim(username)) > 0),
            email TEXT
        );

        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY NOT NULL,
            first_name TEXT NOT NULL CHECK (length(trim(first_name)) > 0),
            last_name TEXT NOT NULL CHECK (length(trim(last_name)) > 0),
            job_title TEXT,
            description TEXT,
            created_on TEXT NOT NULL,
            updated_on TEXT NOT NULL,
            created_by TEXT REFERENCES users(id) ON DELETE SET NULL,
            updated_by TEXT REFERENCES users(id) ON DELETE SET NULL
        );

        CREATE TABLE IF NOT EXISTS contact_addresses (
            id TEXT PRIMARY KEY NOT NULL,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            name TEXT,
            street TEXT NOT NULL CHECK (length(trim(street)) > 0),
            unit_type TEXT NOT NULL DEFAULT 'unit',
            unit_number TEXT,
            city TEXT NOT NULL CHECK (length(trim(city)) > 0),
            state TEXT NOT NULL CHECK (length(trim(state)) > 0),
            zipcode TEXT NOT NULL CHECK (length(trim(zipcode)) > 0),
            created_on TEXT NOT NULL,
            updated_on TEXT NOT NULL,
            created_by TEXT REFERENCES users(id) ON DELETE SET NULL,
            updated_by TEXT REFERENCES users(id) ON DELETE SET NULL
        );

        CREATE TABLE IF NOT EXISTS contact_emails (
            id TEXT PRIMARY KEY NOT NULL,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            email_address TEXT NOT NULL UNIQUE COLLATE NOCASE
                CHECK (length(trim(email_address)) > 0),
            label TEXT,
            created_on TEXT NOT NULL,
            updated_on TEXT NOT NULL,
            created_by TEXT REFERENCES users(id) ON DELETE SET NULL,
            updated_by TEXT REFERENCES users(id) ON DELETE SET NULL
        );

        CREATE TABLE IF NOT EXISTS contact_phone_numbers (
            id TEXT PRIMARY KEY NOT NULL,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            phone_number TEXT NOT NULL CHECK (length(trim(phone_number)) > 0),
            label TEXT,
            created_on TEXT NOT NULL,
            updated_on TEXT NOT NULL,
            created_by TEXT REFERENCES users(id) ON DELETE SET NULL,
            updated_by TEXT REFERENCES users(id) ON DELETE SET NULL
        );

        CREATE INDEX IF NOT EXISTS idx_contact_addresses_contact ON contact_addresses(contact_id);
        CREATE INDEX IF NOT EXISTS idx_contact_emails_contact ON contact_emails(contact_id);
        CREATE INDEX IF NOT EXISTS idx_contact_phone_numbers_contact ON contact_phone_numbers(contact_id);
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory database");
    initialize(&conn).expect("initialize schema");
    conn
}
