use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::email::{Priority, Sentiment};

#[derive(Parser)]
#[command(name = "desk", about = concat!("desk v", env!("CARGO_PKG_VERSION"), " - support inbox triage"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "project-dir", global = true)]
    pub project_dir: Option<String>,

    /// Read emails from this JSON file instead of the desk's data file
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a desk in the current directory
    Init(InitArgs),
    /// List emails, optionally filtered
    List(ListArgs),
    /// Show one email in full
    Show(ShowArgs),
    /// Print the templated response for an email
    Draft(DraftArgs),
    /// Show quick stats (total, pending, urgent)
    Stats,
    /// Validate the email data and report rejected records
    Check,
    /// Read or change desk settings
    Config(ConfigCmd),
}

#[derive(Args)]
pub struct InitArgs {
    /// Desk name shown in the TUI
    #[arg(long)]
    pub name: Option<String>,
    /// Also write the sample inbox to desk/emails.json
    #[arg(long)]
    pub with_seed: bool,
    /// Reinitialize even if desk/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against sender and subject
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub sentiment: Option<SentimentArg>,
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Email id
    pub id: String,
}

#[derive(Args)]
pub struct DraftArgs {
    /// Email id
    pub id: String,
}

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current settings
    Show,
    /// Set provider, model or tone
    Set {
        key: String,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SentimentArg {
    Positive,
    Neutral,
    Negative,
}

impl From<SentimentArg> for Sentiment {
    fn from(arg: SentimentArg) -> Self {
        match arg {
            SentimentArg::Positive => Sentiment::Positive,
            SentimentArg::Neutral => Sentiment::Neutral,
            SentimentArg::Negative => Sentiment::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Urgent,
    Normal,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Urgent => Priority::Urgent,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::Low => Priority::Low,
        }
    }
}
