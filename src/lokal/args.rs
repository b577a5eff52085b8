use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lokal")]
#[command(about = "Apartment unit listing and contact inbox tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (holds units/, site_settings/, contact_messages/)
    #[arg(short, long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List units with optional filters, sorting and pagination
    #[command(alias = "ls")]
    List {
        /// Substring match against id, building and unit number
        #[arg(short, long)]
        search: Option<String>,

        /// Exact status (AVAILABLE, RESERVED, SOLD)
        #[arg(long)]
        status: Option<String>,

        /// Exact floor (0 = ground floor)
        #[arg(long)]
        floor: Option<String>,

        /// Minimum area in m²
        #[arg(long)]
        area_min: Option<String>,

        /// Maximum area in m²
        #[arg(long)]
        area_max: Option<String>,

        /// Minimum price
        #[arg(long)]
        price_min: Option<String>,

        /// Maximum price
        #[arg(long)]
        price_max: Option<String>,

        /// Sort column (id, building, unit, floor, area, extras, price,
        /// price-per-area, status)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Units per page (10, 25, 50 or 100)
        #[arg(long, default_value_t = 25)]
        per_page: usize,

        /// Render stacked cards instead of a table
        #[arg(long)]
        cards: bool,
    },

    /// Show site settings (branding, contact details)
    Settings,

    /// Submit a contact message
    Submit {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email
        #[arg(long)]
        email: String,

        /// Sender phone
        #[arg(long)]
        phone: String,

        /// Optional subject line
        #[arg(long, default_value = "")]
        subject: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Data-processing consent given
        #[arg(long)]
        consent: bool,

        /// Marketing contact allowed
        #[arg(long)]
        marketing: bool,
    },

    /// List stored contact messages, newest first
    #[command(alias = "inbox")]
    Messages,

    /// Update the status (and optionally notes) of a contact message
    SetStatus {
        /// Message ID
        id: String,

        /// New status (new, in-progress, resolved)
        status: String,

        /// Handling notes
        #[arg(long)]
        notes: Option<String>,
    },
}
