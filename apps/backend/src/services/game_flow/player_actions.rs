use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::bidding::place_bid;
use crate::domain::game_transition::{advance, start_game, Advance};
use crate::domain::state::Seat;
use crate::domain::tricks::play_card;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::protocol::{ClientMsg, ServerMsg};
use crate::rooms::{ConnectionId, Room, RoomCode};

impl GameFlowService {
    /// Route one client request. Failures go back to the requester only.
    pub fn handle(&self, conn: ConnectionId, msg: ClientMsg) {
        let result = match msg {
            ClientMsg::CreateRoom { name, seats, bots } => {
                self.create_room(conn, &name, seats, bots).map(drop)
            }
            ClientMsg::JoinRoom { room, name } => self.join_room(conn, &room, &name).map(drop),
            ClientMsg::LeaveRoom { room } => self.leave_room(conn, &room),
            ClientMsg::StartGame { room } => self.start_game(conn, &room),
            ClientMsg::SubmitBid { room, bid } => self.submit_bid(conn, &room, bid),
            ClientMsg::PlayCard { room, card } => self.play_card(conn, &room, &card),
            ClientMsg::RequestNext { room } => self.request_next(conn, &room).map(drop),
        };

        if let Err(err) = result {
            debug!(%conn, code = %ErrorCode::from(&err), %err, "Request rejected");
            self.inner.channel.send(conn, ServerMsg::error(&err));
        }
    }

    /// New room with the creator in seat 0 and `bots` bots after it.
    pub fn create_room(
        &self,
        conn: ConnectionId,
        name: &str,
        seats: u8,
        bots: u8,
    ) -> Result<RoomCode, DomainError> {
        let handle = {
            let mut rng = self.inner.rng.lock();
            self.inner
                .registry
                .create(&mut *rng, |code| Room::new(code, conn, name, seats, bots))?
        };

        let room = handle.lock();
        let code = room.code().clone();
        self.inner.registry.track(conn, &code);
        self.inner.channel.subscribe(conn, &code);
        self.inner.channel.send(
            conn,
            ServerMsg::RoomCreated {
                room: code.clone(),
                seat: 0,
            },
        );
        self.broadcast(&room);
        info!(room = %code, %conn, seats, bots, "Room opened by creator");
        Ok(code)
    }

    /// Take the first open seat, in any phase. Re-joining returns the
    /// existing seat.
    pub fn join_room(
        &self,
        conn: ConnectionId,
        raw_code: &str,
        name: &str,
    ) -> Result<Seat, DomainError> {
        let code = RoomCode::parse(raw_code)?;
        self.with_room(&code, |room| {
            let seat = room.join(conn, name)?;
            self.inner.registry.track(conn, &code);
            self.inner.channel.subscribe(conn, &code);
            self.inner.channel.send(
                conn,
                ServerMsg::Joined {
                    room: code.clone(),
                    seat,
                },
            );
            self.broadcast(room);
            info!(room = %code, %conn, seat, phase = ?room.game.phase, "Seat joined");
            Ok(seat)
        })
    }

    pub fn leave_room(&self, conn: ConnectionId, raw_code: &str) -> Result<(), DomainError> {
        let code = RoomCode::parse(raw_code)?;
        self.with_room(&code, |room| {
            self.vacate(room, conn).ok_or_else(|| {
                DomainError::forbidden(
                    ForbiddenKind::NotSeated,
                    format!("You are not seated in room {code}"),
                )
            })?;
            self.inner
                .channel
                .send(conn, ServerMsg::Left { room: code.clone() });
            Ok(())
        })
    }

    /// Implicit leave from every room the connection sits in.
    pub fn disconnect(&self, conn: ConnectionId) {
        for code in self.inner.registry.rooms_of(conn) {
            match self.inner.registry.get(&code) {
                Some(handle) => {
                    let mut room = handle.lock();
                    if !room.is_closed() {
                        self.vacate(&mut room, conn);
                    }
                }
                None => self.inner.registry.untrack(conn, &code),
            }
        }
        debug!(%conn, "Connection disconnected");
    }

    /// Unbind `conn` from the locked room. The room is deleted when no human
    /// remains; otherwise the others see the freed seat.
    fn vacate(&self, room: &mut Room, conn: ConnectionId) -> Option<Seat> {
        let seat = room.leave(conn)?;
        let code = room.code().clone();
        self.inner.registry.untrack(conn, &code);
        self.inner.channel.unsubscribe(conn, &code);
        info!(room = %code, %conn, seat, "Seat vacated");

        if room.has_humans() {
            self.broadcast(room);
        } else {
            room.close();
            self.inner.registry.remove(&code);
        }
        Some(seat)
    }

    pub fn start_game(&self, conn: ConnectionId, raw_code: &str) -> Result<(), DomainError> {
        self.run_seated_action(conn, raw_code, "start_game", |room, _seat, rng| {
            room.ensure_startable()?;
            start_game(&mut room.game, rng)?;
            info!(
                room = %room.code(),
                seats = room.seat_count(),
                bots = room.game.bot_seats.len(),
                "Game started"
            );
            Ok(())
        })
    }

    /// Bids arrive as raw integers; anything outside `0..=cards_dealt` is an
    /// invalid bid.
    pub fn submit_bid(&self, conn: ConnectionId, raw_code: &str, bid: i64) -> Result<(), DomainError> {
        self.run_seated_action(conn, raw_code, "submit_bid", |room, seat, _rng| {
            let bid = u8::try_from(bid).map_err(|_| {
                DomainError::validation(ValidationKind::InvalidBid, format!("Bid {bid} out of range"))
            })?;
            place_bid(&mut room.game, seat, bid).map(drop)
        })
    }

    pub fn play_card(&self, conn: ConnectionId, raw_code: &str, card_key: &str) -> Result<(), DomainError> {
        self.run_seated_action(conn, raw_code, "play_card", |room, seat, _rng| {
            let card: Card = card_key.parse()?;
            play_card(&mut room.game, seat, card).map(drop)
        })
    }

    /// Explicit "continue" out of between-tricks or round-finished.
    pub fn request_next(&self, conn: ConnectionId, raw_code: &str) -> Result<Advance, DomainError> {
        self.run_seated_action(conn, raw_code, "request_next", |room, _seat, rng| {
            let adv = advance(&mut room.game, rng)?;
            if let Advance::NextRound { round_index } = adv {
                info!(room = %room.code(), round_index, "Next round dealt");
            }
            Ok(adv)
        })
    }
}
