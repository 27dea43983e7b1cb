use std::fs;
use std::path::PathBuf;

use super::*;
use csv::Writer;

pub const EXPORT_PATH: &str = "./import_export/exported.csv";

/// Write every stored contact, ordered by name, to a CSV file.
/// A directory destination gets an `exported.csv` inside it.
pub fn export_contacts_to_csv(
    store: &dyn ContactStore,
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::InvalidArgument(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let contacts = store.list_all()?;
    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in &contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
