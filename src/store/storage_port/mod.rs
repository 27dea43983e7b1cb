pub mod export_csv;
pub mod import_csv;

use super::*;
pub use export_csv::export_contacts_to_csv;
pub use import_csv::{ImportReport, import_contacts_from_csv};
