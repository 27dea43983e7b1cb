pub mod command;
pub mod run;

use crate::domain::Contact;
use crate::errors::AppError;

pub use run::run_app;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Phone: {}\n\
        Email: {}",
        contact.id, contact.name, contact.phone, contact.email
    )
}

pub fn listing_row(contact: &Contact) -> String {
    format!(
        "{:>4}. {:<24} {:<18} {}",
        contact.id, contact.name, contact.phone, contact.email
    )
}

/// What the user is told when an operation fails.
pub fn describe_error(err: &AppError) -> String {
    match err {
        AppError::InvalidArgument(msg) => format!("Validation failed: {}", msg),
        AppError::NotFound(item) => {
            format!("{} Not found. Refresh the contact list and try again", item)
        }
        AppError::Storage(_) => {
            "Storage unavailable, nothing was changed. Check the database and try again"
                .to_string()
        }
        other => other.to_string(),
    }
}
