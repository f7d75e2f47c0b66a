//! Timer-driven tasks. A task captures the room state it was scheduled
//! against and is re-validated when it fires; there is no cancellation.

use std::time::Duration;

use tracing::{error, warn};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::state::{Phase, Seat};
use crate::rooms::{Room, RoomCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A bot seat plays its card.
    BotPlay { seat: Seat },
    /// Between tricks → playing.
    AutoNextTrick,
    /// Round finished → next round or game finished.
    AutoNextRound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub room: RoomCode,
    /// Codes are reused after deletion; the instance pins the exact room.
    pub room_instance: Uuid,
    pub kind: TaskKind,
    pub expected_phase: Phase,
    pub expected_round: u8,
    pub expected_version: u64,
}

impl ScheduledTask {
    /// Capture `room`'s current game as the expectation for `kind`.
    pub fn capture(room: &Room, kind: TaskKind) -> Self {
        let state = &room.game;
        Self {
            room: room.code().clone(),
            room_instance: room.instance(),
            kind,
            expected_phase: state.phase,
            expected_round: state.round_index,
            expected_version: state.version,
        }
    }

    /// Why this task no longer applies to `room`, if it doesn't.
    pub fn stale_reason(&self, room: &Room) -> Option<&'static str> {
        if room.instance() != self.room_instance {
            return Some("room replaced");
        }
        let state = &room.game;
        if state.phase != self.expected_phase {
            return Some("phase changed");
        }
        if state.round_index != self.expected_round {
            return Some("round changed");
        }
        match self.kind {
            TaskKind::BotPlay { seat } => {
                if state.version != self.expected_version {
                    Some("game advanced")
                } else if state.turn != seat || !state.is_bot(seat) {
                    Some("not this bot's turn")
                } else {
                    None
                }
            }
            TaskKind::AutoNextTrick => {
                (state.version != self.expected_version).then_some("game advanced")
            }
            TaskKind::AutoNextRound => {
                if state.round_advanced_for == Some(self.expected_round) {
                    Some("round already advanced")
                } else if state.version != self.expected_version {
                    Some("game advanced")
                } else {
                    None
                }
            }
        }
    }
}

/// Runs a task after a delay. Fire-and-forget from the caller's side.
pub trait TaskScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask, flow: GameFlowService);
}

/// Production scheduler on the ambient tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TaskScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask, flow: GameFlowService) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(room = %task.room, kind = ?task.kind, "No runtime for scheduled task, dropping");
            return;
        };

        let room = task.room.clone();
        let kind = task.kind;
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            flow.run_task(task);
        });

        // A panicking task only loses itself; parking_lot locks do not poison.
        runtime.spawn(async move {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    error!(room = %room, kind = ?kind, "Scheduled task panicked");
                }
            }
        });
    }
}
