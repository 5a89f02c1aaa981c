use rusqlite::ErrorCode;
use thiserror::Error;

use crate::forms::FormErrors;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} cannot be longer than {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} is not a valid {expected}")]
    InvalidFormat { field: String, expected: String },

    #[error("Invalid input: {0}")]
    Invalid(FormErrors),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactsError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        ContactsError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}

// Storage constraint failures (NOT NULL, CHECK, UNIQUE, FOREIGN KEY) get their
// own variant so callers can tell them apart from plain I/O failures.
impl From<rusqlite::Error> for ContactsError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, msg)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                ContactsError::Constraint(msg.clone().unwrap_or_else(|| err.to_string()))
            }
            _ => ContactsError::Database(e),
        }
    }
}

pub type ContactsResult<T> = Result<T, ContactsError>;
