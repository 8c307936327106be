use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "ballo",
    about = "Ballo: dancesport age categories, classes and competition entry rules",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct GlobalArgs {
    /// Path to ballo.toml (default: ./ballo.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Reference date YYYY-MM-DD (default: season date from config, else today)
    #[arg(long, global = true)]
    pub on: Option<String>,
}

/// Roster file overrides shared by commands that read JSONL records.
#[derive(Args, Clone, Default)]
pub struct RosterArgs {
    /// Path to athletes JSONL
    #[arg(long)]
    pub athletes: Option<String>,

    /// Path to couples JSONL (default: pair athletes by partner code)
    #[arg(long)]
    pub couples: Option<String>,

    /// Path to competitions JSONL
    #[arg(long)]
    pub competitions: Option<String>,

    /// Path to competition event types JSONL
    #[arg(long)]
    pub events: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GroupArg {
    Standard,
    Latin,
    Combinata,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sports age and allowed categories for a birth date
    Age {
        /// Birth date, ISO YYYY-MM-DD
        birth_date: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an athlete's stored category against their birth date
    Category {
        /// Stored category text (label, abbreviation or age-range code)
        #[arg(long)]
        stored: String,

        /// Birth date, ISO YYYY-MM-DD
        #[arg(long)]
        birth: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a couple's stored category against both birth dates
    Couple {
        /// Stored category text
        #[arg(long)]
        stored: String,

        /// First partner's birth date
        #[arg(long)]
        birth1: Option<String>,

        /// Second partner's birth date
        #[arg(long)]
        birth2: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve per-discipline and overall classes from discipline entries
    Classes {
        /// Entry `<discipline label>:<class>` (repeatable)
        #[arg(long = "entry", required = true)]
        entries: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build couples from athletes' partner codes
    Pair {
        #[command(flatten)]
        roster: RosterArgs,

        /// Write the couples to this JSONL path
        #[arg(long)]
        out: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan the roster for category, certificate and pairing anomalies
    Anomalies {
        #[command(flatten)]
        roster: RosterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a couple may enter a competition
    Eligible {
        /// Competition id
        #[arg(long)]
        competition: String,

        /// Couple pair key (`CODE1-CODE2`) or either partner's code
        #[arg(long)]
        couple: String,

        #[command(flatten)]
        roster: RosterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List event presets, or generate event types for a competition
    Presets {
        /// Discipline group (default: all groups)
        #[arg(long, value_enum)]
        group: Option<GroupArg>,

        /// Only presets whose classes are all syllabus classes
        #[arg(long)]
        syllabus: bool,

        /// Generate event types for this competition id
        #[arg(long)]
        competition: Option<String>,

        /// Write generated event types to this JSONL path
        #[arg(long, requires = "competition")]
        out: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
