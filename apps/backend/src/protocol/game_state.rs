//! State projection: the public view of a room and the per-seat private view.
//!
//! The only place a hand leaves the room is [`seat_view`], and only for the
//! seat it is built for.

use serde::Serialize;

use crate::domain::state::{Phase, RoundSummary, Seat};
use crate::domain::{Card, Suit};
use crate::rooms::{Room, RoomCode};

/// Everything about a room except the hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicState {
    pub code: RoomCode,
    pub n: u8,
    pub names: Vec<Option<String>>,
    pub phase: Phase,
    pub round_index: u8,
    pub cards_dealt: u8,
    pub leader: Seat,
    pub turn: Seat,
    pub winner: Option<Seat>,
    pub lead_suit: Option<Suit>,
    pub table: Vec<Option<Card>>,
    pub bids: Vec<Option<u8>>,
    pub tricks_round: Vec<u8>,
    pub tricks_total: Vec<u32>,
    pub points_total: Vec<i32>,
    pub history: Vec<RoundSummary>,
    pub bot_seats: Vec<Seat>,
}

/// Public state plus the viewer's own hand. `hands[k]` is `None` for every
/// seat other than `seat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    #[serde(flatten)]
    pub public: PublicState,
    pub seat: Seat,
    pub hands: Vec<Option<Vec<Card>>>,
}

pub fn public_view(room: &Room) -> PublicState {
    let game = &room.game;
    PublicState {
        code: room.code().clone(),
        n: game.seat_count,
        names: room.names().to_vec(),
        phase: game.phase,
        round_index: game.round_index,
        cards_dealt: game.cards_dealt(),
        leader: game.leader,
        turn: game.turn,
        winner: game.winner,
        lead_suit: game.lead_suit,
        table: game.table.clone(),
        bids: game.bids.clone(),
        tricks_round: game.tricks_round.clone(),
        tricks_total: game.tricks_total.clone(),
        points_total: game.points_total.clone(),
        history: game.history.clone(),
        bot_seats: game.bot_seats.iter().copied().collect(),
    }
}

pub fn seat_view(room: &Room, seat: Seat) -> SeatView {
    let hands = room
        .game
        .hands
        .iter()
        .enumerate()
        .map(|(i, hand)| (i == seat as usize).then(|| hand.clone()))
        .collect();
    SeatView {
        public: public_view(room),
        seat,
        hands,
    }
}
