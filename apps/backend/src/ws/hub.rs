use std::collections::BTreeSet;

use actix::prelude::*;
use dashmap::DashMap;
use tracing::debug;

use crate::protocol::ServerMsg;
use crate::rooms::{ConnectionId, RoomCode};
use crate::services::game_flow::RoomChannel;

/// Delivered to a session's mailbox; the session serializes it to the socket.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub enum HubEvent {
    Deliver(ServerMsg),
}

/// Live websocket sessions and their room subscriptions.
#[derive(Default)]
pub struct WsRegistry {
    connections: DashMap<ConnectionId, Recipient<HubEvent>>,
    rooms: DashMap<RoomCode, BTreeSet<ConnectionId>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_connection(&self, conn: ConnectionId, recipient: Recipient<HubEvent>) {
        self.connections.insert(conn, recipient);
    }

    /// Forget the connection and drop it from every room topic.
    pub fn unregister_connection(&self, conn: ConnectionId) {
        self.connections.remove(&conn);
        self.rooms.retain(|_, members| {
            members.remove(&conn);
            !members.is_empty()
        });
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn subscribers(&self, room: &RoomCode) -> Vec<ConnectionId> {
        self.rooms
            .get(room)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    fn deliver(&self, conn: ConnectionId, msg: ServerMsg) {
        match self.connections.get(&conn) {
            Some(recipient) => recipient.do_send(HubEvent::Deliver(msg)),
            None => debug!(%conn, "Dropping message for unknown connection"),
        }
    }
}

impl RoomChannel for WsRegistry {
    fn subscribe(&self, conn: ConnectionId, room: &RoomCode) {
        self.rooms.entry(room.clone()).or_default().insert(conn);
    }

    fn unsubscribe(&self, conn: ConnectionId, room: &RoomCode) {
        if let dashmap::mapref::entry::Entry::Occupied(mut entry) = self.rooms.entry(room.clone()) {
            entry.get_mut().remove(&conn);
            if entry.get().is_empty() {
                entry.remove();
            }
        }
    }

    fn publish(&self, room: &RoomCode, msg: ServerMsg) {
        for conn in self.subscribers(room) {
            self.deliver(conn, msg.clone());
        }
    }

    fn send(&self, conn: ConnectionId, msg: ServerMsg) {
        self.deliver(conn, msg);
    }
}
