use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rMedAlarm
/// Turn medication usage text into daily alarms anchored to your meals
#[derive(Parser)]
#[command(
    name = "rmedalarm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn medication usage text into a daily alarm schedule anchored to your meal times",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or several profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Classify a usage text: timing, per-dose amount, daily frequency
    Classify {
        /// Usage text, e.g. "1회 2정, 1일 3회 식후 30분에 복용"
        text: String,

        /// Patient age in years (selects the child or adult block)
        #[arg(long, conflicts_with = "birthdate")]
        age: Option<u32>,

        /// Patient birthdate (YYYY-MM-DD); defaults to the configured one
        #[arg(long)]
        birthdate: Option<String>,
    },

    /// Print the alarm times for a timing category
    Plan {
        /// Timing category: after-meal, before-meal, between-meals, before-sleep, fasting, unknown (or the Korean label)
        #[arg(long)]
        timing: String,

        /// Doses per day (0 is planned as 1, more than 3 is capped at 3)
        #[arg(long, default_value_t = 3)]
        times: u32,

        #[arg(long, value_name = "HH:MM", help = "Breakfast time")]
        breakfast: Option<String>,

        #[arg(long, value_name = "HH:MM", help = "Lunch time")]
        lunch: Option<String>,

        #[arg(long, value_name = "HH:MM", help = "Dinner time")]
        dinner: Option<String>,
    },

    /// Match OCR lines against the drug lexicon and print prescription records
    Scan {
        /// JSON file with { "texts": [...], "scores": [...] }
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Lexicon file (canonical | alias | ...); defaults to the configured one
        #[arg(long, value_name = "FILE")]
        lexicon: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Build the alarm schedule for a list of prescribed medicines
    Schedule {
        /// JSON file with { "profile": {...}, "medicines": [...] }
        #[arg(long, value_name = "FILE")]
        input: String,

        /// Usage catalog (name → usage text, JSON or YAML); defaults to the configured one
        #[arg(long, value_name = "FILE")]
        catalog: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
