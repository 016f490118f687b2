//! Session host commands.

use std::error::Error;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use mindful::adapters::FileStateStorage;
use mindful::application::handlers::{
    CareForPetCommand, CareForPetHandler, ClearAllDataCommand, ClearAllDataHandler,
    CreatePostCommand, CreatePostHandler, CreateReplyCommand, CreateReplyHandler, LikeTarget,
    RenamePetCommand, RenamePetHandler, SaveJournalEntryCommand, SaveJournalEntryHandler,
    SelectJournalDateHandler, SelectJournalDateQuery, StartPetSessionCommand,
    StartPetSessionHandler, ToggleLikeCommand, ToggleLikeHandler, UpdatePrivacySettingsCommand,
    UpdatePrivacySettingsHandler,
};
use mindful::application::{load_snapshot, TickDriver, TickDriverConfig, TickStop};
use mindful::config::AppConfig;
use mindful::domain::breathing::{BreathingPattern, BreathingState};
use mindful::domain::foundation::{CommandContext, PostId, ReplyId};
use mindful::domain::forum::Forum;
use mindful::domain::journal::{pick_prompt, SaveOutcome, PROMPTS};
use mindful::domain::meditation::{Ambience, MeditationTimer};
use mindful::domain::mood::{Mood, MoodTracker};
use mindful::domain::pet::{CareResult, PetState};
use mindful::domain::privacy::{PrivacySettings, SettingChange};
use mindful::ports::{StateStorage, StorageKey};

use crate::{Commands, ForumCommands, PrivacyCommands};

type CliResult = Result<(), Box<dyn Error>>;

/// One invocation of the host.
pub struct Session {
    config: AppConfig,
    storage: Arc<dyn StateStorage>,
}

impl Session {
    /// Opens the store. Nothing is read until a command needs it.
    pub fn open(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
            storage: Arc::new(FileStateStorage::new(&config.storage.data_dir)),
        }
    }

    pub async fn run(self, command: Commands) -> CliResult {
        if command.touches_pet() {
            self.start_pet().await?;
        }

        match command {
            Commands::Status => Ok(()),
            Commands::Care => self.care().await,
            Commands::Rename { name } => self.rename(name).await,
            Commands::Breathe { pattern, cycles } => self.breathe(pattern, cycles).await,
            Commands::Meditate { minutes, ambience } => {
                self.meditate(minutes, ambience.into()).await
            }
            Commands::Journal { text } => self.journal(text).await,
            Commands::Checkin { mood } => self.checkin(mood.into()).await,
            Commands::Forum { cmd } => self.forum(cmd).await,
            Commands::Privacy { cmd } => self.privacy(cmd).await,
            Commands::Clear { yes } => self.clear(yes).await,
        }
    }

    /// Runs the start-of-session pet check and shows the pet.
    async fn start_pet(&self) -> CliResult {
        let started = StartPetSessionHandler::new(self.storage.clone())
            .handle(StartPetSessionCommand, ctx())
            .await?;
        if let Some(message) = started.message() {
            println!("{}", message);
        }
        print_pet(&started.pet);
        Ok(())
    }

    async fn care(&self) -> CliResult {
        let result = CareForPetHandler::new(self.storage.clone())
            .handle(CareForPetCommand, ctx())
            .await?;

        match result.outcome {
            CareResult::AlreadyCaredToday => println!(
                "You've already cared for {} today. Come back tomorrow!",
                result.pet.name()
            ),
            CareResult::Cared { streak, evolved_to } => {
                if let Some(stage) = evolved_to {
                    println!("{} evolved into a {} {}!", result.pet.name(), stage, stage.emoji());
                }
                println!("Streak: {} day(s)", streak);
                print_pet(&result.pet);
            }
        }
        Ok(())
    }

    async fn rename(&self, name: String) -> CliResult {
        let result = RenamePetHandler::new(self.storage.clone())
            .handle(RenamePetCommand { new_name: name }, ctx())
            .await?;
        println!("{} is now called {}", result.old_name, result.pet.name());
        Ok(())
    }

    async fn breathe(&self, pattern: Option<String>, cycles: Option<u32>) -> CliResult {
        let pattern = match pattern {
            Some(name) => BreathingPattern::find(&name)?,
            None => self.config.session.pattern()?,
        };
        let target_cycles = cycles.unwrap_or(self.config.session.breathing_cycles).max(1);

        let mut breathing = BreathingState::new(pattern);
        breathing.toggle();
        println!("{}: {}", pattern.name, pattern.description);
        println!("{} ({})", breathing.phase().instruction(), breathing.counter());

        let mut last_phase = breathing.phase();
        let stop = self
            .driver()
            .run(
                &mut breathing,
                |b| {
                    if b.phase() != last_phase {
                        last_phase = b.phase();
                        println!("{} ({})", b.phase().instruction(), b.counter());
                    }
                    b.cycles() >= target_cycles
                },
                shutdown_on_ctrl_c(),
            )
            .await;

        info!(cycles = breathing.cycles(), stop = ?stop, "Breathing session ended");
        println!("Cycles completed: {}", breathing.cycles());
        Ok(())
    }

    async fn meditate(&self, minutes: Option<u32>, ambience: Ambience) -> CliResult {
        let mut timer =
            MeditationTimer::new(minutes.unwrap_or(self.config.session.meditation_minutes));
        timer.set_ambience(ambience);
        timer.toggle();
        println!("Meditating for {} ({})", timer.format_remaining(), timer.ambience());

        let stop = self
            .driver()
            .run(
                &mut timer,
                |t| {
                    if t.remaining_secs() % 60 == 0 {
                        println!("{}", t.format_remaining());
                    }
                    false
                },
                shutdown_on_ctrl_c(),
            )
            .await;

        info!(remaining = timer.remaining_secs(), stop = ?stop, "Meditation ended");
        if stop == TickStop::TargetStopped && timer.is_finished() {
            println!("Session complete.");
        }
        Ok(())
    }

    async fn journal(&self, text: Option<String>) -> CliResult {
        let now = ctx().issued_at;
        match text {
            Some(content) => {
                let result = SaveJournalEntryHandler::new(self.storage.clone())
                    .handle(SaveJournalEntryCommand { date: now, content }, ctx())
                    .await?;
                let verb = match result.outcome {
                    SaveOutcome::Created { .. } => "saved",
                    SaveOutcome::Updated { .. } => "updated",
                };
                println!("Entry {} ({} total)", verb, result.entry_count);
            }
            None => {
                let view = SelectJournalDateHandler::new(self.storage.clone())
                    .handle(SelectJournalDateQuery { date: now }, ctx())
                    .await?;
                if let Some(prompt) = pick_prompt(&mut rand::thread_rng(), &PROMPTS) {
                    println!("Prompt: {}", prompt);
                }
                if view.content.is_empty() {
                    println!("No entry for {} yet.", view.date.calendar_day());
                } else {
                    println!("{}", view.content);
                }
            }
        }
        Ok(())
    }

    async fn checkin(&self, mood: Mood) -> CliResult {
        let settings = self.privacy_settings().await;
        let mut tracker = MoodTracker::new();
        tracker.record(mood, ctx().issued_at);

        println!("Feeling {} {}", mood, mood.emoji());
        for entry in tracker.visible_history(settings.show_mood_history) {
            println!("  {} {}", entry.recorded_at, entry.mood);
        }
        Ok(())
    }

    async fn forum(&self, cmd: ForumCommands) -> CliResult {
        match cmd {
            ForumCommands::List => {
                let forum: Forum = load_snapshot(self.storage.as_ref(), StorageKey::CommunityPosts)
                    .await
                    .unwrap_or_default();
                for post in forum.posts() {
                    println!("[{}] {} ({} likes)", post.id, post.content, post.likes);
                    for reply in &post.replies {
                        println!("    [{}] {} ({} likes)", reply.id, reply.content, reply.likes);
                    }
                }
            }
            ForumCommands::Post { content } => {
                let result = CreatePostHandler::new(self.storage.clone())
                    .handle(CreatePostCommand { content }, ctx())
                    .await?;
                println!("Posted {}", result.post.id);
            }
            ForumCommands::Reply { post_id, content } => {
                let result = CreateReplyHandler::new(self.storage.clone())
                    .handle(
                        CreateReplyCommand {
                            post_id: post_id.parse::<PostId>()?,
                            content,
                        },
                        ctx(),
                    )
                    .await?;
                println!("Replied {}", result.reply_id);
            }
            ForumCommands::Like { post_id, reply } => {
                let post_id = post_id.parse::<PostId>()?;
                let target = match reply {
                    Some(reply_id) => LikeTarget::Reply {
                        post_id,
                        reply_id: reply_id.parse::<ReplyId>()?,
                    },
                    None => LikeTarget::Post(post_id),
                };
                let result = ToggleLikeHandler::new(self.storage.clone())
                    .handle(ToggleLikeCommand { target }, ctx())
                    .await?;
                println!(
                    "{} ({} likes)",
                    if result.liked { "Liked" } else { "Unliked" },
                    result.likes
                );
            }
        }
        Ok(())
    }

    async fn privacy(&self, cmd: PrivacyCommands) -> CliResult {
        let change = match cmd {
            PrivacyCommands::Show => {
                println!("{:#?}", self.privacy_settings().await);
                return Ok(());
            }
            PrivacyCommands::AnonymousMode { enabled } => SettingChange::AnonymousMode(enabled),
            PrivacyCommands::EncryptData { enabled } => SettingChange::EncryptData(enabled),
            PrivacyCommands::ShowMoodHistory { enabled } => {
                SettingChange::ShowMoodHistory(enabled)
            }
            PrivacyCommands::AutoDelete { days } => SettingChange::AutoDeleteAfterDays(days),
        };

        let result = UpdatePrivacySettingsHandler::new(self.storage.clone())
            .handle(UpdatePrivacySettingsCommand { change }, ctx())
            .await?;
        println!("{:#?}", result.settings);
        Ok(())
    }

    async fn clear(&self, yes: bool) -> CliResult {
        if !yes {
            warn!("Refusing to clear data without --yes");
            println!("This deletes your journal, pet and forum posts. Re-run with --yes.");
            return Ok(());
        }
        let result = ClearAllDataHandler::new(self.storage.clone())
            .handle(ClearAllDataCommand, ctx())
            .await?;
        println!("Cleared {} item(s).", result.removed.len());
        Ok(())
    }

    async fn privacy_settings(&self) -> PrivacySettings {
        load_snapshot(self.storage.as_ref(), StorageKey::PrivacySettings)
            .await
            .unwrap_or_default()
    }

    fn driver(&self) -> TickDriver {
        TickDriver::new(TickDriverConfig::default().with_interval(self.config.session.tick_interval()))
    }
}

fn ctx() -> CommandContext {
    CommandContext::now().with_source("cli")
}

fn print_pet(pet: &PetState) {
    println!(
        "{} {} the {} | happiness {}% | growth {}% | streak {}",
        pet.stage().emoji(),
        pet.name(),
        pet.stage(),
        pet.happiness(),
        pet.growth(),
        pet.streak()
    );
}

/// Returns a receiver that flips to `true` on Ctrl-C.
fn shutdown_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
        // A dropped sender reads as shutdown to the driver.
        tx.closed().await;
    });
    rx
}
