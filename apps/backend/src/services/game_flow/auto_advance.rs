use tracing::{debug, info};

use super::scheduler::{ScheduledTask, TaskKind};
use super::GameFlowService;
use crate::domain::game_transition::{advance_round, advance_trick, Advance};

/// What firing a scheduled task did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Applied,
    /// Room gone or state moved on; nothing changed.
    Stale,
}

impl GameFlowService {
    /// Fire a scheduled task: re-validate it against the room's current state
    /// under the room lock and apply it only if it still holds.
    pub fn run_task(&self, task: ScheduledTask) -> TaskOutcome {
        let Some(handle) = self.inner.registry.get(&task.room) else {
            debug!(room = %task.room, kind = ?task.kind, "Scheduled task for deleted room");
            return TaskOutcome::Stale;
        };
        let mut room = handle.lock();
        if room.is_closed() {
            debug!(room = %task.room, kind = ?task.kind, "Scheduled task for closed room");
            return TaskOutcome::Stale;
        }
        if let Some(reason) = task.stale_reason(&room) {
            debug!(room = %task.room, kind = ?task.kind, reason, "Skipping stale scheduled task");
            return TaskOutcome::Stale;
        }

        let result = match task.kind {
            TaskKind::BotPlay { seat } => self.play_for_bot(&mut room, seat),
            TaskKind::AutoNextTrick => advance_trick(&mut room.game),
            TaskKind::AutoNextRound => {
                let mut rng = self.inner.rng.lock();
                advance_round(&mut room.game, &mut *rng).map(|adv| {
                    if let Advance::NextRound { round_index } = adv {
                        info!(room = %task.room, round_index, "Next round dealt");
                    }
                })
            }
        };

        match result {
            Ok(()) => {
                self.after_mutation(&mut room);
                TaskOutcome::Applied
            }
            Err(err) => {
                debug!(room = %task.room, kind = ?task.kind, %err, "Scheduled task rejected");
                TaskOutcome::Stale
            }
        }
    }
}
