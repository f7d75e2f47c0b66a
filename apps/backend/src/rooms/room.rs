use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::rules::valid_seat_count;
use crate::domain::state::{GameState, Seat};
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind, ValidationKind};
use crate::rooms::RoomCode;

const MAX_NAME_CHARS: usize = 32;

/// Identity of one client connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatBinding {
    /// Waiting for a human to join.
    Open,
    Human(ConnectionId),
    /// Fixed at room creation; never bound to a connection.
    Bot,
}

/// One game room: seat bindings, display names and the game itself.
#[derive(Debug)]
pub struct Room {
    code: RoomCode,
    /// Distinguishes this room from earlier ones that held the same code.
    instance: Uuid,
    seats: Vec<SeatBinding>,
    names: Vec<Option<String>>,
    pub game: GameState,
    closed: bool,
}

impl Room {
    /// Creator takes seat 0; bots take seats `1..=bots`.
    pub fn new(
        code: RoomCode,
        creator: ConnectionId,
        creator_name: &str,
        seat_count: u8,
        bots: u8,
    ) -> Result<Self, DomainError> {
        if !valid_seat_count(seat_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeatCount,
                format!("Seat count must be 2..=8, got {seat_count}"),
            ));
        }
        if bots >= seat_count {
            return Err(DomainError::validation(
                ValidationKind::InvalidBotCount,
                format!("At most {} bots fit a {seat_count}-seat room", seat_count - 1),
            ));
        }

        let bot_seats: BTreeSet<Seat> = (1..=bots).collect();
        let game = GameState::new(seat_count, bot_seats)?;

        let mut seats = vec![SeatBinding::Open; seat_count as usize];
        let mut names = vec![None; seat_count as usize];
        seats[0] = SeatBinding::Human(creator);
        names[0] = Some(display_name(creator_name, 0));
        for bot in 1..=bots {
            seats[bot as usize] = SeatBinding::Bot;
            names[bot as usize] = Some(format!("Computer {bot}"));
        }

        Ok(Self {
            code,
            instance: Uuid::new_v4(),
            seats,
            names,
            game,
            closed: false,
        })
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn instance(&self) -> Uuid {
        self.instance
    }

    pub fn seat_count(&self) -> u8 {
        self.game.seat_count
    }

    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }

    pub fn binding(&self, seat: Seat) -> Option<SeatBinding> {
        self.seats.get(seat as usize).copied()
    }

    pub fn seat_of(&self, conn: ConnectionId) -> Option<Seat> {
        self.seats
            .iter()
            .position(|b| *b == SeatBinding::Human(conn))
            .map(|i| i as Seat)
    }

    /// Seat bound to `conn`, or `NotSeated`.
    pub fn require_seat(&self, conn: ConnectionId) -> Result<Seat, DomainError> {
        self.seat_of(conn).ok_or_else(|| {
            DomainError::forbidden(
                ForbiddenKind::NotSeated,
                format!("You are not seated in room {}", self.code),
            )
        })
    }

    /// Bind `conn` to the first open seat. A connection already seated here
    /// gets its existing seat back.
    pub fn join(&mut self, conn: ConnectionId, name: &str) -> Result<Seat, DomainError> {
        if let Some(seat) = self.seat_of(conn) {
            return Ok(seat);
        }
        let Some(idx) = self.seats.iter().position(|b| *b == SeatBinding::Open) else {
            return Err(DomainError::conflict(
                ConflictKind::RoomFull,
                format!("Room {} is full", self.code),
            ));
        };
        self.seats[idx] = SeatBinding::Human(conn);
        self.names[idx] = Some(display_name(name, idx as Seat));
        Ok(idx as Seat)
    }

    /// Unbind `conn`; its seat waits for a new joiner. Bot seats are unaffected.
    pub fn leave(&mut self, conn: ConnectionId) -> Option<Seat> {
        let seat = self.seat_of(conn)?;
        self.seats[seat as usize] = SeatBinding::Open;
        self.names[seat as usize] = None;
        Some(seat)
    }

    /// Human connections and their seats.
    pub fn bound_connections(&self) -> impl Iterator<Item = (ConnectionId, Seat)> + '_ {
        self.seats.iter().enumerate().filter_map(|(i, b)| match b {
            SeatBinding::Human(conn) => Some((*conn, i as Seat)),
            _ => None,
        })
    }

    pub fn has_humans(&self) -> bool {
        self.bound_connections().next().is_some()
    }

    /// Human-bound plus bot seats.
    pub fn occupied_seats(&self) -> usize {
        self.seats
            .iter()
            .filter(|b| !matches!(b, SeatBinding::Open))
            .count()
    }

    /// A game needs one human and two occupied seats.
    pub fn ensure_startable(&self) -> Result<(), DomainError> {
        if !self.has_humans() || self.occupied_seats() < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                "Need at least one human and two occupied seats to start",
            ));
        }
        Ok(())
    }

    /// Mark the room as gone; late lock holders must treat it as not found.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

fn display_name(raw: &str, seat: Seat) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_CHARS).collect();
    if trimmed.is_empty() {
        format!("Player {}", seat + 1)
    } else {
        trimmed
    }
}
