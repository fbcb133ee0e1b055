use crate::export::{ExportFormat, ExportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rafflepick
#[derive(Parser)]
#[command(
    name = "rafflepick",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pick weighted raffle winners from a CSV of participants and keep a history of draws",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Show the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Draw winners from a CSV of participants
    Draw {
        /// CSV file with one participant per row
        #[arg(long, short = 'f', value_name = "FILE")]
        file: String,

        /// Column holding the participant name (default: guessed, then first column)
        #[arg(long = "name-col", value_name = "COLUMN")]
        name_col: Option<String>,

        /// Column holding the participant email
        #[arg(long = "email-col", value_name = "COLUMN")]
        email_col: Option<String>,

        /// Column holding the ticket count
        #[arg(long = "tickets-col", value_name = "COLUMN")]
        tickets_col: Option<String>,

        /// Column holding the prize the tickets were bought for
        #[arg(long = "prize-col", value_name = "COLUMN")]
        prize_col: Option<String>,

        /// Prize to draw, in order: NAME=COUNT or NAME (repeatable).
        ///
        /// If omitted, every prize found in the CSV is drawn in alphabetical
        /// order, or the configured default prize when the CSV has none.
        #[arg(long = "prize", value_name = "NAME[=COUNT]")]
        prizes: Vec<String>,

        /// Winners per prize when no explicit count is given
        #[arg(long, short = 'w')]
        winners: Option<usize>,

        /// Seed the random generator for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Draw each prize only among the tickets bought for that prize
        #[arg(long = "per-prize")]
        per_prize: bool,

        /// Do not store the run
        #[arg(long = "no-save")]
        no_save: bool,

        /// Mark the stored run as public
        #[arg(long, conflicts_with = "no_save")]
        public: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored runs, or show one run
    Runs {
        /// Run id to show
        #[arg(long)]
        id: Option<String>,

        /// Print as JSON (same shapes as the /runs API)
        #[arg(long)]
        json: bool,
    },

    /// Export winners or the ticket audit of a stored run
    Export {
        /// Run id to export
        #[arg(long = "run", value_name = "RUN_ID")]
        run: String,

        /// What to export
        #[arg(long, value_enum, default_value = "winners")]
        what: ExportKind,

        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Resolve the deployment environment and its URLs
    Env {
        /// Requested environment (prod / production selects production)
        #[arg(long = "deploy-env", env = "DEPLOY_ENV")]
        deploy_env: Option<String>,

        /// Treat the deployment as an ephemeral preview
        #[arg(long, env = "IS_EPHEMERAL")]
        ephemeral: bool,

        /// Hostname of the deployment (currently not used for resolution)
        #[arg(long, env = "HOSTNAME")]
        hostname: Option<String>,

        /// Name used in URLs, e.g. pr42 (default: the resolved environment)
        #[arg(long = "env-name")]
        env_name: Option<String>,

        /// Hosted zone (default: from configuration)
        #[arg(long = "hosted-zone")]
        hosted_zone: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
