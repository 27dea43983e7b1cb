use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{display_contact, listing_row},
    config::Config,
    logging,
    prelude::{
        AppError, Contact, ContactStore,
        command::{Cli, Commands},
        parse_store,
        storage_port::{export_contacts_to_csv, import_contacts_from_csv},
        validate_fields,
    },
};

/// Contacts inserted by `seed`.
pub const SAMPLE_CONTACTS: [(&str, &str, &str); 3] = [
    ("João Silva", "(11) 99999-9999", "joao@email.com"),
    ("Maria Santos", "(11) 88888-8888", "maria@email.com"),
    ("Pedro Costa", "(11) 77777-7777", "pedro@email.com"),
];

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = Config::load(cli.db.as_deref())?;
    logging::init(&config.log_filter);
    debug!(?config, "configuration loaded");

    let store = parse_store(config.db)?;

    let mut stdout = io::stdout().lock();
    run_and_close(store, cli.command, &mut stdout)
}

/// Execute `command` and always close the store afterwards.
/// A failing command is reported even when the close fails too.
pub fn run_and_close(
    store: Box<dyn ContactStore>,
    command: Commands,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let outcome = execute(store.as_ref(), command, out);
    let closed = store.close();
    outcome.and(closed)
}

/// Trim the raw fields, validate them and store a new contact.
pub fn add_contact(
    store: &dyn ContactStore,
    name: &str,
    phone: &str,
    email: &str,
) -> Result<Contact, AppError> {
    let (name, phone, email) = (name.trim(), phone.trim(), email.trim());
    validate_fields(name, phone, email)?;

    store.create(&Contact::new(
        name.to_string(),
        phone.to_string(),
        email.to_string(),
    ))
}

/// Overlay the given fields on the stored contact, re-validate all of them
/// and write the result back.
pub fn edit_contact(
    store: &dyn ContactStore,
    id: i64,
    new_name: Option<String>,
    new_phone: Option<String>,
    new_email: Option<String>,
) -> Result<Contact, AppError> {
    let mut contact = store
        .find_by_id(id)?
        .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

    let old_name = contact.name.clone();
    contact.overlay(new_name, new_phone, new_email);
    let contact = contact.trimmed();
    validate_fields(&contact.name, &contact.phone, &contact.email)?;

    store.update(&contact)?;
    info!(id, from = %old_name, to = %contact.name, "contact edited");
    Ok(contact)
}

pub fn execute(
    store: &dyn ContactStore,
    command: Commands,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Commands::Add { name, phone, email } => {
            let saved = add_contact(store, &name, &phone, &email)?;
            writeln!(out, "Contact added successfully (id {})", saved.id)?;
        }

        // Listing contacts
        Commands::List { json } => {
            let contacts = store.list_all()?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&contacts)?)?;
                return Ok(());
            }

            if contacts.is_empty() {
                writeln!(out, "No contact yet")?;
                return Ok(());
            }

            for contact in &contacts {
                writeln!(out, "{}", listing_row(contact))?;
            }
            writeln!(out, "Total contacts: {}", contacts.len())?;
        }

        Commands::Show { id, json } => {
            let contact = store
                .find_by_id(id)?
                .ok_or_else(|| AppError::NotFound(format!("Contact {id}")))?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&contact)?)?;
            } else {
                writeln!(out, "{}", display_contact(&contact))?;
            }
        }

        Commands::Edit {
            id,
            new_name,
            new_phone,
            new_email,
        } => {
            edit_contact(store, id, new_name, new_phone, new_email)?;
            writeln!(out, "Contact updated successfully")?;
        }

        Commands::Delete { id } => {
            store.delete(id)?;
            writeln!(out, "Contact deleted successfully")?;
        }

        Commands::Seed => {
            for (name, phone, email) in SAMPLE_CONTACTS {
                add_contact(store, name, phone, email)?;
            }
            writeln!(out, "Added {} sample contacts", SAMPLE_CONTACTS.len())?;
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let report = import_contacts_from_csv(store, src.as_deref())?;

            writeln!(
                out,
                "Successfully imported {} contacts from {:?} ({} skipped).",
                report.imported, report.path, report.skipped
            )?;
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(store, des.as_deref())?;

            writeln!(out, "Successfully exported {} contacts to {:?}.", total, path)?;
        }
    }

    Ok(())
}
