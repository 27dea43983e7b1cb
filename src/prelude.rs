pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::contact::{self, Contact};
pub use crate::errors::AppError;
pub use crate::store::{
    self, ContactStore, DbTarget, SessionFactory, SqliteStore, parse_store, storage_port,
};
pub use crate::validation::{
    Field, validate_email, validate_fields, validate_name, validate_phone,
};
