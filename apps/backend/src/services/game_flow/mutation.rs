use rand::rngs::StdRng;
use tracing::debug;

use super::GameFlowService;
use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::protocol::{public_view, seat_view, ServerMsg};
use crate::rooms::{ConnectionId, Room, RoomCode};

impl GameFlowService {
    /// Lock a live room and run `f` against it. The lock is held for the
    /// whole call, including any broadcast `f` performs.
    pub(super) fn with_room<T>(
        &self,
        code: &RoomCode,
        f: impl FnOnce(&mut Room) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let handle = self.inner.registry.require(code)?;
        let mut room = handle.lock();
        // Lost a race with the last member leaving.
        if room.is_closed() {
            return Err(DomainError::not_found(
                NotFoundKind::Room,
                format!("Room {code} not found"),
            ));
        }
        f(&mut *room)
    }

    /// A game action from a seated connection: validate the room code and the
    /// seat, apply `f`, then drive bots and broadcast. A failing `f` leaves
    /// the room untouched and broadcasts nothing.
    pub(super) fn run_seated_action<T>(
        &self,
        conn: ConnectionId,
        raw_code: &str,
        action: &'static str,
        f: impl FnOnce(&mut Room, Seat, &mut StdRng) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let code = RoomCode::parse(raw_code)?;
        self.with_room(&code, |room| {
            let seat = room.require_seat(conn)?;
            let out = {
                let mut rng = self.inner.rng.lock();
                f(room, seat, &mut *rng)?
            };
            debug!(
                room = %code,
                seat,
                action,
                phase = ?room.game.phase,
                version = room.game.version,
                "Game action applied"
            );
            self.after_mutation(room);
            Ok(out)
        })
    }

    /// Follow-up for every successful game mutation.
    pub(super) fn after_mutation(&self, room: &mut Room) {
        self.drive_bots(room);
        self.broadcast(room);
    }

    /// Public view to the room, then one private view per bound connection.
    pub(super) fn broadcast(&self, room: &Room) {
        let code = room.code();
        self.inner.channel.publish(
            code,
            ServerMsg::PublicState {
                room: code.clone(),
                state: public_view(room),
            },
        );
        for (conn, seat) in room.bound_connections() {
            self.inner.channel.send(
                conn,
                ServerMsg::SeatState {
                    room: code.clone(),
                    state: seat_view(room, seat),
                },
            );
        }
    }
}
