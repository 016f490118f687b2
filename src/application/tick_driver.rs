//! TickDriver - Drives a once-per-second state machine on a tokio interval.
//!
//! ## Stopping
//!
//! The loop ends when the first of these happens:
//!
//! | Reason | When |
//! |--------|------|
//! | `Completed` | the caller's predicate holds after a tick |
//! | `TargetStopped` | the target reports it is no longer running |
//! | `Shutdown` | the watch channel carries `true` or its sender is dropped |

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::domain::breathing::BreathingState;
use crate::domain::meditation::MeditationTimer;

/// Anything that advances one step per tick.
pub trait Tickable {
    /// Advances one tick.
    fn tick(&mut self);

    /// Whether ticks currently change anything.
    fn is_running(&self) -> bool;
}

impl Tickable for BreathingState {
    fn tick(&mut self) {
        BreathingState::tick(self);
    }

    fn is_running(&self) -> bool {
        self.is_active()
    }
}

impl Tickable for MeditationTimer {
    fn tick(&mut self) {
        MeditationTimer::tick(self);
    }

    fn is_running(&self) -> bool {
        self.is_playing()
    }
}

/// Why the driver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStop {
    Completed,
    TargetStopped,
    Shutdown,
}

/// Configuration for the TickDriver.
#[derive(Debug, Clone)]
pub struct TickDriverConfig {
    /// Time between ticks.
    pub interval: Duration,
}

impl Default for TickDriverConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
        }
    }
}

impl TickDriverConfig {
    /// Create config with a custom tick interval. Zero is raised to 1 ms.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }
}

/// Ticks a target until it completes, stops, or shutdown is signalled.
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    config: TickDriverConfig,
}

impl TickDriver {
    pub fn new(config: TickDriverConfig) -> Self {
        Self { config }
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Run the tick loop.
    ///
    /// `until` is checked after every tick. The first tick fires one full
    /// interval after the call.
    pub async fn run<T, F>(
        &self,
        target: &mut T,
        mut until: F,
        mut shutdown: watch::Receiver<bool>,
    ) -> TickStop
    where
        T: Tickable,
        F: FnMut(&T) -> bool,
    {
        if *shutdown.borrow() {
            return TickStop::Shutdown;
        }

        let mut interval = time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately.
        interval.tick().await;

        let mut ticks: u64 = 0;
        loop {
            if !target.is_running() {
                debug!(ticks, "Tick target stopped");
                return TickStop::TargetStopped;
            }

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!(ticks, "Tick driver shutting down");
                        return TickStop::Shutdown;
                    }
                }

                _ = interval.tick() => {
                    target.tick();
                    ticks += 1;
                    if until(target) {
                        debug!(ticks, "Tick driver completed");
                        return TickStop::Completed;
                    }
                }
            }
        }
    }
}
