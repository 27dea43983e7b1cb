pub mod session;
pub mod sqlite;
pub mod storage_port;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub use session::{DbTarget, SessionFactory};
pub use sqlite::SqliteStore;

/// Transactional CRUD gateway over stored contacts.
///
/// Every mutating call is one all-or-nothing transaction; a failed call has
/// changed nothing. Field contents are not validated here, only ids.
pub trait ContactStore {
    /// Store a contact that has no id yet and return it with its new id.
    fn create(&self, contact: &Contact) -> Result<Contact, AppError>;

    /// All contacts, ordered by name.
    fn list_all(&self) -> Result<Vec<Contact>, AppError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Replace the stored fields of `contact.id` with the given values.
    fn update(&self, contact: &Contact) -> Result<(), AppError>;

    fn delete(&self, id: i64) -> Result<(), AppError>;

    fn close(self: Box<Self>) -> Result<(), AppError>;
}

pub fn parse_store(target: DbTarget) -> Result<Box<dyn ContactStore>, AppError> {
    Ok(Box::new(SqliteStore::open(target)?))
}

pub(crate) fn ensure_valid_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::InvalidArgument(format!(
            "contact id must be greater than zero, got {id}"
        )));
    }
    Ok(())
}
