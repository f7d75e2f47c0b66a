//! Error codes reported to clients.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code is
//! SCREAMING_SNAKE_CASE and maps 1:1 to the string sent on the wire.

use core::fmt;

use serde::{Serialize, Serializer};

use super::domain::{ConflictKind, DomainError, ForbiddenKind, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rooms
    /// No room with that code
    RoomNotFound,
    /// Room code is not four digits
    BadRoomCode,
    /// No open seat left
    RoomFull,
    /// Could not allocate a free room code
    RoomCodesExhausted,
    /// Seat count outside 2..=8
    InvalidSeatCount,
    /// Bot count outside 0..=seats-1
    InvalidBotCount,
    /// Not enough occupied seats to start
    NotEnoughPlayers,

    // Authorization
    /// Connection has no seat in the room
    NotSeated,
    /// Not this seat's turn
    OutOfTurn,

    // Gameplay
    /// Action not legal in the current phase
    PhaseMismatch,
    /// Bid out of range
    InvalidBid,
    /// Seat already bid this round
    BidAlreadyPlaced,
    /// Card not in the seat's hand
    CardNotInHand,
    /// Unparseable card key
    ParseCard,
    /// Must follow the lead suit
    MustFollowSuit,
    /// Round index outside the schedule
    InvalidRound,

    // Transport / system
    /// Malformed request
    BadRequest,
    /// Generic validation failure
    ValidationError,
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        Self::RoomNotFound,
        Self::BadRoomCode,
        Self::RoomFull,
        Self::RoomCodesExhausted,
        Self::InvalidSeatCount,
        Self::InvalidBotCount,
        Self::NotEnoughPlayers,
        Self::NotSeated,
        Self::OutOfTurn,
        Self::PhaseMismatch,
        Self::InvalidBid,
        Self::BidAlreadyPlaced,
        Self::CardNotInHand,
        Self::ParseCard,
        Self::MustFollowSuit,
        Self::InvalidRound,
        Self::BadRequest,
        Self::ValidationError,
        Self::Internal,
        Self::ConfigError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::BadRoomCode => "BAD_ROOM_CODE",
            Self::RoomFull => "ROOM_FULL",
            Self::RoomCodesExhausted => "ROOM_CODES_EXHAUSTED",
            Self::InvalidSeatCount => "INVALID_SEAT_COUNT",
            Self::InvalidBotCount => "INVALID_BOT_COUNT",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",

            Self::NotSeated => "NOT_SEATED",
            Self::OutOfTurn => "OUT_OF_TURN",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidBid => "INVALID_BID",
            Self::BidAlreadyPlaced => "BID_ALREADY_PLACED",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::ParseCard => "PARSE_CARD",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::InvalidRound => "INVALID_ROUND",

            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::BidAlreadyPlaced => ErrorCode::BidAlreadyPlaced,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                ValidationKind::BadRoomCode => ErrorCode::BadRoomCode,
                ValidationKind::InvalidSeatCount => ErrorCode::InvalidSeatCount,
                ValidationKind::InvalidBotCount => ErrorCode::InvalidBotCount,
                ValidationKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
                ValidationKind::InvalidRound => ErrorCode::InvalidRound,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Forbidden(kind, _) => match kind {
                ForbiddenKind::NotSeated => ErrorCode::NotSeated,
                ForbiddenKind::OutOfTurn => ErrorCode::OutOfTurn,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::RoomFull => ErrorCode::RoomFull,
                ConflictKind::RoomCodesExhausted => ErrorCode::RoomCodesExhausted,
            },
        }
    }
}
