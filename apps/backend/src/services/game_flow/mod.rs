//! Game flow orchestration: serializes every mutation of a room behind its
//! lock, drives bot seats, schedules timed advancement and fans the
//! resulting views out over the room channel.

mod auto_advance;
mod bot_coordinator;
pub mod channel;
mod mutation;
mod player_actions;
pub mod scheduler;

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use auto_advance::TaskOutcome;
pub use channel::RoomChannel;
pub use scheduler::{ScheduledTask, TaskKind, TaskScheduler, TokioScheduler};

use crate::ai::{BotPlayer, LowballBot};
use crate::config::EngineTiming;
use crate::domain::state::GameState;
use crate::rooms::{RoomCode, RoomRegistry};

/// Cheap to clone; every clone drives the same registry.
#[derive(Clone)]
pub struct GameFlowService {
    inner: Arc<Inner>,
}

struct Inner {
    registry: RoomRegistry,
    channel: Arc<dyn RoomChannel>,
    scheduler: Arc<dyn TaskScheduler>,
    bot: Arc<dyn BotPlayer>,
    timing: EngineTiming,
    rng: Mutex<StdRng>,
}

impl GameFlowService {
    pub fn new(
        channel: Arc<dyn RoomChannel>,
        scheduler: Arc<dyn TaskScheduler>,
        timing: EngineTiming,
    ) -> Self {
        Self::with_parts(
            channel,
            scheduler,
            Arc::new(LowballBot::new()),
            timing,
            StdRng::from_os_rng(),
        )
    }

    /// Full control over the collaborators; tests pass a seeded rng.
    pub fn with_parts(
        channel: Arc<dyn RoomChannel>,
        scheduler: Arc<dyn TaskScheduler>,
        bot: Arc<dyn BotPlayer>,
        timing: EngineTiming,
        rng: StdRng,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry: RoomRegistry::new(),
                channel,
                scheduler,
                bot,
                timing,
                rng: Mutex::new(rng),
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn timing(&self) -> EngineTiming {
        self.inner.timing
    }

    /// Copy of a live room's game state.
    pub fn game_state(&self, code: &RoomCode) -> Option<GameState> {
        let handle = self.inner.registry.get(code)?;
        let room = handle.lock();
        (!room.is_closed()).then(|| room.game.clone())
    }
}
