use crate::protocol::ServerMsg;
use crate::rooms::{ConnectionId, RoomCode};

/// Room-scoped publish/subscribe with per-connection addressing.
///
/// Called with the room lock held, so implementations must not block.
/// Delivery order per connection follows call order.
pub trait RoomChannel: Send + Sync {
    fn subscribe(&self, conn: ConnectionId, room: &RoomCode);

    fn unsubscribe(&self, conn: ConnectionId, room: &RoomCode);

    /// Deliver to every connection subscribed to `room`.
    fn publish(&self, room: &RoomCode, msg: ServerMsg);

    /// Deliver to one connection.
    fn send(&self, conn: ConnectionId, msg: ServerMsg);
}
