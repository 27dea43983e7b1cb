use std::path::PathBuf;

use super::*;
use crate::validation::validate_fields;
use csv::Reader;
use tracing::warn;

pub const IMPORT_PATH: &str = "./import_export/contacts.csv";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub imported: u64,
    pub skipped: u64,
}

/// Read `id,name,phone,email` rows and create each valid one as a new contact.
///
/// Ids in the file are ignored; storage assigns fresh ones. Rows failing
/// validation are skipped and counted. Each row is its own transaction, so a
/// storage failure stops the import but keeps the rows already created.
pub fn import_contacts_from_csv(
    store: &dyn ContactStore,
    src: Option<&str>,
) -> Result<ImportReport, AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::InvalidArgument("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut report = ImportReport {
        path: file_path,
        ..ImportReport::default()
    };

    for (line, result) in reader.deserialize().enumerate() {
        let record: Contact = result?;
        let record = record.trimmed();

        if let Err(err) = validate_fields(&record.name, &record.phone, &record.email) {
            warn!(row = line + 1, error = %err, "skipping invalid contact row");
            report.skipped += 1;
            continue;
        }

        store.create(&Contact::new(record.name, record.phone, record.email))?;
        report.imported += 1;
    }

    Ok(report)
}
