//! Wire messages between clients and the game server.

use serde::{Deserialize, Serialize};

use crate::domain::state::Seat;
use crate::errors::{DomainError, ErrorCategory, ErrorCode};
use crate::protocol::game_state::{PublicState, SeatView};
use crate::rooms::RoomCode;

/// Requests a client may send. Room codes arrive raw and are validated by
/// the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    CreateRoom {
        #[serde(default)]
        name: String,
        seats: u8,
        #[serde(default)]
        bots: u8,
    },
    JoinRoom {
        room: String,
        #[serde(default)]
        name: String,
    },
    LeaveRoom {
        room: String,
    },
    StartGame {
        room: String,
    },
    SubmitBid {
        room: String,
        bid: i64,
    },
    PlayCard {
        room: String,
        card: String,
    },
    RequestNext {
        room: String,
    },
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    RoomCreated {
        room: RoomCode,
        seat: Seat,
    },
    Joined {
        room: RoomCode,
        seat: Seat,
    },
    Left {
        room: RoomCode,
    },
    /// Broadcast to every subscriber of the room.
    PublicState {
        room: RoomCode,
        state: PublicState,
    },
    /// Sent to one connection only.
    SeatState {
        room: RoomCode,
        state: SeatView,
    },
    Error {
        code: ErrorCode,
        category: ErrorCategory,
        message: String,
    },
}

impl ServerMsg {
    pub fn error(err: &DomainError) -> Self {
        ServerMsg::Error {
            code: ErrorCode::from(err),
            category: err.category(),
            message: err.detail().to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ServerMsg::Error {
            code: ErrorCode::BadRequest,
            category: ErrorCategory::InvalidValue,
            message: message.into(),
        }
    }
}
