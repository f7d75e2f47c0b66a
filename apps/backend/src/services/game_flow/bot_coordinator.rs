use tracing::{debug, info, warn};

use super::scheduler::{ScheduledTask, TaskKind};
use super::GameFlowService;
use crate::ai::BotView;
use crate::domain::bidding::place_bid;
use crate::domain::state::{Phase, Seat};
use crate::domain::tricks::play_card;
use crate::errors::domain::DomainError;
use crate::rooms::Room;

impl GameFlowService {
    /// React to the state a mutation left behind: bots bid at once, a bot on
    /// turn gets a delayed play, a finished round always gets a timed deal of
    /// the next one, and rooms with bots also advance between tricks.
    pub(super) fn drive_bots(&self, room: &mut Room) {
        if room.game.phase == Phase::Bidding {
            self.place_bot_bids(room);
        }

        let game = &room.game;
        let timing = self.inner.timing;
        let task = match game.phase {
            Phase::Playing if game.is_bot(game.turn) => Some((
                timing.bot_think,
                TaskKind::BotPlay { seat: game.turn },
            )),
            Phase::BetweenTricks if game.has_bots() => {
                Some((timing.auto_next_trick, TaskKind::AutoNextTrick))
            }
            Phase::RoundFinished => {
                info!(
                    room = %room.code(),
                    round_index = game.round_index,
                    points = ?game.points_total,
                    "Round finished"
                );
                Some((timing.auto_next_round, TaskKind::AutoNextRound))
            }
            Phase::GameFinished => {
                info!(room = %room.code(), points = ?game.points_total, "Game finished");
                None
            }
            _ => None,
        };

        if let Some((delay, kind)) = task {
            let task = ScheduledTask::capture(room, kind);
            debug!(room = %task.room, kind = ?kind, ?delay, "Scheduling task");
            self.inner.scheduler.schedule(delay, task, self.clone());
        }
    }

    /// Every bot seat without a bid bids now. The last bid may start play.
    fn place_bot_bids(&self, room: &mut Room) {
        let pending: Vec<Seat> = room
            .game
            .bot_seats
            .iter()
            .copied()
            .filter(|&s| room.game.bids.get(s as usize) == Some(&None))
            .collect();

        for seat in pending {
            let bid = match BotView::for_seat(&room.game, seat) {
                Some(view) => self.inner.bot.choose_bid(&view).unwrap_or_else(|err| {
                    warn!(room = %room.code(), seat, %err, "Bot bid failed, bidding 0");
                    0
                }),
                None => 0,
            };
            let bid = bid.min(room.game.cards_dealt());
            if let Err(err) = place_bid(&mut room.game, seat, bid) {
                warn!(room = %room.code(), seat, %err, "Bot bid rejected");
            }
        }
    }

    /// Play a card for the bot on turn. An erroring or illegal choice falls
    /// back to the first legal card.
    pub(super) fn play_for_bot(&self, room: &mut Room, seat: Seat) -> Result<(), DomainError> {
        let card = {
            let view = BotView::for_seat(&room.game, seat).ok_or_else(|| {
                DomainError::validation_other(format!("Seat {seat} is outside the table"))
            })?;
            let fallback = view.legal_plays.first().copied().ok_or_else(|| {
                DomainError::validation_other(format!("Bot seat {seat} has no legal card"))
            })?;
            match self.inner.bot.choose_play(&view) {
                Ok(card) if view.legal_plays.contains(&card) => card,
                Ok(card) => {
                    warn!(
                        room = %room.code(),
                        seat,
                        bot = self.inner.bot.name(),
                        %card,
                        "Bot chose an illegal card, playing first legal card"
                    );
                    fallback
                }
                Err(err) => {
                    warn!(room = %room.code(), seat, %err, "Bot play failed, playing first legal card");
                    fallback
                }
            }
        };
        play_card(&mut room.game, seat, card)?;
        Ok(())
    }
}
