use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlog
/// CLI application to track factory/on-site attendance with SQLite
#[derive(Parser)]
#[command(
    name = "shiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking CLI: check-in/out, overtime in half-hour units, geofenced factory gating",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as a different user than the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check in for the day (factory check-in requires a position inside the geofence)
    CheckIn {
        /// Work type: factory (geofenced) or site
        #[arg(value_name = "TYPE", help = "Work type: factory | site")]
        work_type: String,

        /// Current latitude (decimal degrees)
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Current longitude (decimal degrees)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Date override (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Time override (HH:MM, default now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Check out (same geofence gate as check-in for factory days)
    CheckOut {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        at: Option<String>,
    },

    /// Start overtime (requires a completed day; not location-gated)
    OtStart {
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        at: Option<String>,
    },

    /// End overtime and record the billable half-hour units
    OtEnd {
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        at: Option<String>,
    },

    /// Show the derived status and hours for a day
    Status {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Keep printing the live overtime elapsed time every second
        #[arg(long)]
        watch: bool,

        /// Current latitude, to classify the position on the panel
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Current longitude, to classify the position on the panel
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// List day summaries for a period
    List {
        /// Filter by period: YYYY, YYYY-MM or YYYY-MM-DD (default current month)
        #[arg(long, short)]
        period: Option<String>,
    },
}
