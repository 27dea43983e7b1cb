use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rusty-agenda", version, about = "Contact agenda backed by SQLite")]
pub struct Cli {
    /// Database file, or :memory: for a throwaway database
    /// (defaults to AGENDA_DB_PATH, then ./.instance/contacts.db)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number: digits, spaces, ( ) - and +, at least 8 characters
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },
    /// List contacts ordered by name
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single contact
    Show {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit the data of an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Add the sample contacts
    Seed,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
