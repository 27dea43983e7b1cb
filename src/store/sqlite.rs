use rusqlite::{OptionalExtension, Row, Transaction, params};
use tracing::{error, info, warn};

use super::{ContactStore, DbTarget, SessionFactory, ensure_valid_id};
use crate::domain::contact::Contact;
use crate::errors::AppError;

const SELECT_CONTACT: &str = "SELECT id, name, phone, email FROM contacts";

pub struct SqliteStore {
    factory: SessionFactory,
}

impl SqliteStore {
    pub fn open(target: DbTarget) -> Result<Self, AppError> {
        let factory = SessionFactory::open(target)?;
        info!(db = ?factory.target(), "contact store opened");
        Ok(Self { factory })
    }

    pub fn target(&self) -> &DbTarget {
        self.factory.target()
    }

    /// Run `op` inside one transaction on a fresh session.
    /// Commits on `Ok`, rolls back before returning on `Err`.
    fn in_transaction<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, AppError>,
    {
        let mut conn = self.factory.session()?;
        let tx = conn.transaction()?;

        match op(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    error!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
        })
    }
}

impl ContactStore for SqliteStore {
    fn create(&self, contact: &Contact) -> Result<Contact, AppError> {
        if contact.is_persisted() {
            return Err(AppError::InvalidArgument(format!(
                "a new contact must not carry an id, got {}",
                contact.id
            )));
        }

        let result = self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
                params![contact.name, contact.phone, contact.email],
            )?;
            Ok(contact.clone().with_id(tx.last_insert_rowid()))
        });

        match &result {
            Ok(saved) => info!(id = saved.id, name = %saved.name, "contact saved"),
            Err(err) => log_failure("save", &contact.name, err),
        }
        result
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let result = self.factory.session().and_then(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_CONTACT} ORDER BY name ASC, id ASC"))?;
            let contacts = stmt
                .query_map([], Self::row_to_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(contacts)
        });

        match &result {
            Ok(contacts) => info!(total = contacts.len(), "contacts listed"),
            Err(err) => log_failure("list", "all", err),
        }
        result
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        ensure_valid_id(id)?;

        let result = self.factory.session().and_then(|conn| {
            let contact = conn
                .query_row(
                    &format!("{SELECT_CONTACT} WHERE id = ?1"),
                    [id],
                    Self::row_to_contact,
                )
                .optional()?;
            Ok(contact)
        });

        if let Err(err) = &result {
            log_failure("find", &id.to_string(), err);
        }
        result
    }

    fn update(&self, contact: &Contact) -> Result<(), AppError> {
        ensure_valid_id(contact.id)?;

        let result = self.in_transaction(|tx| {
            let changed = tx.execute(
                "UPDATE contacts SET name = ?1, phone = ?2, email = ?3 WHERE id = ?4",
                params![contact.name, contact.phone, contact.email, contact.id],
            )?;
            if changed == 0 {
                return Err(AppError::NotFound(format!("Contact {}", contact.id)));
            }
            Ok(())
        });

        match &result {
            Ok(()) => info!(id = contact.id, name = %contact.name, "contact updated"),
            Err(err) => log_failure("update", &contact.id.to_string(), err),
        }
        result
    }

    fn delete(&self, id: i64) -> Result<(), AppError> {
        ensure_valid_id(id)?;

        let result = self.in_transaction(|tx| {
            let removed = tx.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
            if removed == 0 {
                return Err(AppError::NotFound(format!("Contact {id}")));
            }
            Ok(())
        });

        match &result {
            Ok(()) => info!(id, "contact deleted"),
            Err(err) => log_failure("delete", &id.to_string(), err),
        }
        result
    }

    fn close(self: Box<Self>) -> Result<(), AppError> {
        self.factory.close()
    }
}

fn log_failure(action: &str, subject: &str, err: &AppError) {
    match err {
        AppError::NotFound(_) => warn!(action, subject, "contact not found"),
        AppError::Storage(cause) => error!(action, subject, error = %cause, "storage failure"),
        other => warn!(action, subject, error = %other, "contact operation rejected"),
    }
}
