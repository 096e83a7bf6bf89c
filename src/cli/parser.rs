use clap::{Parser, Subcommand};

/// Command-line interface definition for emchecklist
#[derive(Parser)]
#[command(
    name = "emchecklist",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record facility temperature, humidity, noise and lux checks and export them as PDF",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a new, empty checklist (discards the current draft)
    New {
        /// Date of the checks (YYYY-MM-DD)
        #[arg(long, conflicts_with = "today")]
        date: Option<String>,

        /// Use today's date
        #[arg(long)]
        today: bool,

        /// Shift (A, B or C)
        #[arg(long)]
        shift: Option<String>,
    },

    /// Set one or more fields of the current draft
    #[command(after_help = "Fields:\n  \
        date | shift\n  \
        primary.cws1 | primary.cws2 | primary.cwr1 | primary.cwr2 | primary.mcf01 | primary.mcf04\n  \
        <location-id>.g1.temp | .g1.rh | .g1.noise | .g1.lux (same with g2)\n  \
        <location-id>.remark\n\n\
        Run `emchecklist locations` for the location ids.")]
    Set {
        /// Assignments in the form FIELD=VALUE (an empty VALUE clears the field)
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// Show the current draft
    Show,

    /// Show whether the current draft is complete
    Status {
        #[arg(long, help = "List every required field that is still empty")]
        missing: bool,
    },

    /// Save the current draft under its date and shift
    Save,

    /// Replace the current draft with a saved checklist
    Load {
        /// Date of the saved checklist (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Shift of the saved checklist (A, B or C)
        #[arg(long)]
        shift: Option<String>,
    },

    /// List saved checklists
    List,

    /// List the facility locations covered by the checklist
    Locations,

    /// Export the current draft as a PDF report
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default from config: checklist.pdf)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,

        #[arg(long = "allow-incomplete", help = "Export even if required fields are empty")]
        allow_incomplete: bool,
    },

    /// Email the PDF report of the current draft
    Send {
        #[arg(long, value_name = "EMAIL", help = "Recipient (default from config)")]
        to: Option<String>,

        #[arg(long = "allow-incomplete", help = "Send even if required fields are empty")]
        allow_incomplete: bool,
    },
}
