pub mod ids;
pub mod user;
pub mod audit;
pub mod person;
pub mod address;
pub mod phone;
pub mod contact;

// Re-exports for convenience
pub use ids::Id;
pub use user::User;
pub use audit::AuditStamp;
pub use person::PersonName;
pub use address::{UsAddress, DEFAULT_UNIT_TYPE};
pub use phone::PhoneNumber;
pub use contact::{Contact, ContactAddress, ContactDetail, ContactEmail, ContactPhoneNumber};
