//! Contact agenda: field validation plus a transactional SQLite contact store,
//! with a small command-line front end.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod store;
pub mod validation;
