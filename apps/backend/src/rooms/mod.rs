//! Room registry: room codes, seat bindings and the connection index.

pub mod join_code;
pub mod registry;
pub mod room;

pub use join_code::RoomCode;
pub use registry::{RoomHandle, RoomRegistry};
pub use room::{ConnectionId, Room, SeatBinding};
