//! Mindful session host.
//!
//! Every invocation runs one activity against the file store. Only the
//! pet-facing commands load the pet and apply the start-of-session check.

mod commands;

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mindful::config::{AppConfig, LoggingConfig};
use mindful::domain::meditation::Ambience;
use mindful::domain::mood::Mood;

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "A private, local-first wellness companion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data directory (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the pet after the start-of-session check
    Status,
    /// Care for the pet (once per day)
    Care,
    /// Give the pet a new name
    Rename { name: String },
    /// Run a guided breathing exercise
    Breathe {
        /// Pattern name, e.g. "Box Breathing"
        #[arg(long)]
        pattern: Option<String>,
        /// Cycles to complete
        #[arg(long)]
        cycles: Option<u32>,
    },
    /// Run the meditation timer
    Meditate {
        /// Length in minutes (1-60)
        #[arg(long)]
        minutes: Option<u32>,
        #[arg(long, value_enum, default_value = "none")]
        ambience: AmbienceArg,
    },
    /// Show or write today's journal entry
    Journal {
        /// Entry text; omit to show today's entry and a prompt
        text: Option<String>,
    },
    /// Record how you feel right now
    Checkin {
        #[arg(value_enum)]
        mood: MoodArg,
    },
    /// Community forum
    Forum {
        #[command(subcommand)]
        cmd: ForumCommands,
    },
    /// Privacy settings
    Privacy {
        #[command(subcommand)]
        cmd: PrivacyCommands,
    },
    /// Delete journal, pet and forum data
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ForumCommands {
    /// List posts, newest first
    List,
    /// Publish a post
    Post { content: String },
    /// Reply to a post
    Reply { post_id: String, content: String },
    /// Like or unlike a post, or one of its replies
    Like {
        post_id: String,
        #[arg(long)]
        reply: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PrivacyCommands {
    /// Print current settings
    Show,
    AnonymousMode {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    EncryptData {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    ShowMoodHistory {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Auto-delete period in days (30, 90 or 365); omit to disable
    AutoDelete { days: Option<u32> },
}

impl Commands {
    /// Whether the command shows or changes the pet, and so starts a pet
    /// session first.
    pub fn touches_pet(&self) -> bool {
        matches!(self, Commands::Status | Commands::Care | Commands::Rename { .. })
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AmbienceArg {
    None,
    Rain,
    Forest,
    Ocean,
}

impl From<AmbienceArg> for Ambience {
    fn from(arg: AmbienceArg) -> Self {
        match arg {
            AmbienceArg::None => Ambience::None,
            AmbienceArg::Rain => Ambience::Rain,
            AmbienceArg::Forest => Ambience::Forest,
            AmbienceArg::Ocean => Ambience::Ocean,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MoodArg {
    Great,
    Good,
    Okay,
    Bad,
    Awful,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Self {
        match arg {
            MoodArg::Great => Mood::Great,
            MoodArg::Good => Mood::Good,
            MoodArg::Okay => Mood::Okay,
            MoodArg::Bad => Mood::Bad,
            MoodArg::Awful => Mood::Awful,
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    config.validate()?;

    init_tracing(&config.logging);
    info!(data_dir = %config.storage.data_dir.display(), "Mindful starting");

    let session = commands::Session::open(&config);
    session.run(cli.command.unwrap_or(Commands::Status)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("mindful").chain(args.iter().copied()))
            .unwrap()
            .command
            .unwrap_or(Commands::Status)
    }

    #[test]
    fn only_pet_commands_start_a_pet_session() {
        assert!(parse(&[]).touches_pet());
        assert!(parse(&["status"]).touches_pet());
        assert!(parse(&["care"]).touches_pet());
        assert!(parse(&["rename", "Mochi"]).touches_pet());

        assert!(!parse(&["journal", "slept well"]).touches_pet());
        assert!(!parse(&["checkin", "good"]).touches_pet());
        assert!(!parse(&["forum", "post", "hello"]).touches_pet());
        assert!(!parse(&["privacy", "show"]).touches_pet());
        assert!(!parse(&["breathe", "--cycles", "1"]).touches_pet());
        assert!(!parse(&["meditate", "--minutes", "5"]).touches_pet());
        assert!(!parse(&["clear"]).touches_pet());
    }
}
