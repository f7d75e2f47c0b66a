use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::rules::{cards_per_seat, valid_seat_count};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat index within a room, `0..seat_count`.
pub type Seat = u8;

/// Room game phases. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Seats are filling; no cards dealt yet.
    Lobby,
    /// Every seat submits one bid for the round.
    Bidding,
    /// Seats play cards in turn into the current trick.
    Playing,
    /// A trick was resolved; the table still shows it until the next trick.
    BetweenTricks,
    /// All hands are empty and the round has been scored.
    RoundFinished,
    /// The last scheduled round has been scored. Absorbing.
    GameFinished,
}

/// Immutable record of one scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u8,
    pub cards_dealt: u8,
    pub bids: Vec<u8>,
    pub tricks_taken: Vec<u8>,
    pub points: Vec<i32>,
}

/// The complete game state of one room, sufficient for pure domain operations.
///
/// Per-seat vectors are always `seat_count` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub seat_count: u8,
    pub phase: Phase,
    /// 0-based index into the round schedule.
    pub round_index: u8,
    /// Private hands, sorted in display order.
    pub hands: Vec<Vec<Card>>,
    /// `None` until the seat bids this round.
    pub bids: Vec<Option<u8>>,
    /// Card each seat has played into the current trick.
    pub table: Vec<Option<Card>>,
    pub lead_suit: Option<Suit>,
    /// Seat that leads the current trick.
    pub leader: Seat,
    /// Seat expected to act next.
    pub turn: Seat,
    /// Winner of the most recently resolved trick.
    pub winner: Option<Seat>,
    pub tricks_round: Vec<u8>,
    pub tricks_total: Vec<u32>,
    pub points_total: Vec<i32>,
    pub history: Vec<RoundSummary>,
    /// Bot-controlled seats, fixed at room creation.
    pub bot_seats: BTreeSet<Seat>,
    /// One-shot guard: the round index whose round-finished advance already ran.
    pub round_advanced_for: Option<u8>,
    /// Bumped on every successful mutation.
    pub version: u64,
}

impl GameState {
    /// Fresh lobby state for `seat_count` seats.
    pub fn new(seat_count: u8, bot_seats: BTreeSet<Seat>) -> Result<Self, DomainError> {
        if !valid_seat_count(seat_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeatCount,
                format!("Seat count must be 2..=8, got {seat_count}"),
            ));
        }
        if let Some(&bad) = bot_seats.iter().find(|&&s| s >= seat_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBotCount,
                format!("Bot seat {bad} is outside the table"),
            ));
        }
        let n = seat_count as usize;
        Ok(Self {
            seat_count,
            phase: Phase::Lobby,
            round_index: 0,
            hands: vec![Vec::new(); n],
            bids: vec![None; n],
            table: vec![None; n],
            lead_suit: None,
            leader: 0,
            turn: 0,
            winner: None,
            tricks_round: vec![0; n],
            tricks_total: vec![0; n],
            points_total: vec![0; n],
            history: Vec::new(),
            bot_seats,
            round_advanced_for: None,
            version: 0,
        })
    }

    /// Cards dealt to each seat this round.
    pub fn cards_dealt(&self) -> u8 {
        cards_per_seat(self.round_index, self.seat_count).unwrap_or(0)
    }

    pub fn is_bot(&self, seat: Seat) -> bool {
        self.bot_seats.contains(&seat)
    }

    pub fn has_bots(&self) -> bool {
        !self.bot_seats.is_empty()
    }

    pub fn all_bids_in(&self) -> bool {
        self.bids.iter().all(Option::is_some)
    }

    pub fn trick_complete(&self) -> bool {
        self.table.iter().all(Option::is_some)
    }

    pub fn hands_empty(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }

    /// Cards accounted for this round: in hand, on the table, or already
    /// resolved into a trick. Equals `cards_dealt * seat_count` while a round
    /// is live.
    pub fn cards_accounted(&self) -> usize {
        let in_hand: usize = self.hands.iter().map(Vec::len).sum();
        let resolved_tricks: usize = self.tricks_round.iter().map(|&t| t as usize).sum();
        // A resolved trick stays on the table until the next trick starts.
        let on_table = if self.trick_complete() {
            0
        } else {
            self.table.iter().filter(|c| c.is_some()).count()
        };
        in_hand + on_table + resolved_tricks * self.seat_count as usize
    }

    pub(crate) fn require_seat(&self, seat: Seat) -> Result<usize, DomainError> {
        if seat < self.seat_count {
            Ok(seat as usize)
        } else {
            Err(DomainError::validation_other(format!(
                "Seat {seat} is outside the table"
            )))
        }
    }

    pub(crate) fn require_phase(&self, expected: Phase, action: &str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot {action} during {:?}", self.phase),
            ))
        }
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}

/// Next seat clockwise, wrapping at `seat_count`.
#[inline]
pub fn next_seat(seat: Seat, seat_count: u8) -> Seat {
    ((seat as u16 + 1) % seat_count as u16) as Seat
}
