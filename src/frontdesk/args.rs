use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "frontdesk")]
#[command(about = "Hotel administration console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<std::path::PathBuf>,
}

/// Which record collection a command operates on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Reservations,
    Rooms,
    Guests,
    Payments,
}

/// Filter and paging flags shared by every list screen.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Status to filter by (or "all")
    #[arg(short, long)]
    pub status: Option<String>,

    /// Search term matched against the domain's text fields
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Start of the date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the date range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Page to show (1-based; out-of-range pages clamp)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the configured page-size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List reservations
    #[command(alias = "res")]
    Reservations {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by room type
        #[arg(long)]
        room_type: Option<String>,
    },

    /// List rooms
    Rooms {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by hotel id
        #[arg(long)]
        hotel: Option<String>,

        /// Filter by room type
        #[arg(long)]
        room_type: Option<String>,

        /// Filter by floor
        #[arg(long)]
        floor: Option<String>,
    },

    /// List guests
    Guests {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by room type
        #[arg(long)]
        room_type: Option<String>,

        /// Filter by loyalty tier
        #[arg(long)]
        loyalty: Option<String>,
    },

    /// List payments
    #[command(alias = "pay")]
    Payments {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by payment method
        #[arg(long)]
        method: Option<String>,
    },

    /// View a single record
    #[command(alias = "v")]
    View {
        /// Collection the record belongs to
        #[arg(value_enum)]
        domain: Domain,

        /// Record id (e.g. res-12)
        id: String,
    },

    /// Change a record's status
    SetStatus {
        /// Collection the record belongs to
        #[arg(value_enum)]
        domain: Domain,

        /// Record id (e.g. res-12)
        id: String,

        /// New status label (case-insensitive)
        status: String,
    },

    /// Delete a record permanently
    #[command(alias = "rm")]
    Delete {
        /// Collection the record belongs to
        #[arg(value_enum)]
        domain: Domain,

        /// Record id (e.g. pay-7)
        id: String,
    },

    /// Summary counters for a collection
    Stats {
        /// Collection to summarize
        #[arg(value_enum)]
        domain: Domain,

        /// Limit the aggregation to records with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Limit the aggregation to records matching this term
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Daily activity report and occupancy
    Report {
        /// Start of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Show the occupancy snapshot instead of daily rows
        #[arg(long)]
        occupancy: bool,
    },

    /// Export filtered payments as CSV
    Export {
        /// Status to filter by (or "all")
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by payment method
        #[arg(long)]
        method: Option<String>,

        /// Start of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Fill every collection with deterministic sample data
    Seed {
        /// RNG seed; the same seed always produces the same data
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
