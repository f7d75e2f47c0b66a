//! Domain-level error type used by the game engine, rooms and services.
//!
//! This error type is transport-agnostic. Every variant is recoverable: it is
//! reported to the requesting connection only and never mutates room state.

use serde::Serialize;
use thiserror::Error;

/// Validation failures: malformed values, wrong phase, broken play rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PhaseMismatch,
    InvalidBid,
    BidAlreadyPlaced,
    CardNotInHand,
    ParseCard,
    MustFollowSuit,
    BadRoomCode,
    InvalidSeatCount,
    InvalidBotCount,
    NotEnoughPlayers,
    InvalidRound,
    Other(String),
}

/// The requester is not allowed to perform the action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForbiddenKind {
    NotSeated,
    OutOfTurn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomFull,
    RoomCodesExhausted,
}

/// Coarse classification reported alongside every error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    NotFound,
    NotAuthorized,
    InvalidPhase,
    InvalidValue,
    RuleViolation,
    Capacity,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("validation error: {1}")]
    Validation(ValidationKind, String),
    #[error("forbidden: {1}")]
    Forbidden(ForbiddenKind, String),
    #[error("not found: {1}")]
    NotFound(NotFoundKind, String),
    #[error("conflict: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    /// Invariant breaches inside the engine. These should never reach a client
    /// in practice, but are still reported rather than panicking.
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn forbidden(kind: ForbiddenKind, detail: impl Into<String>) -> Self {
        Self::Forbidden(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    /// Human-readable detail without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::Forbidden(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Conflict(_, d) => d,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::NotFound(..) => ErrorCategory::NotFound,
            DomainError::Forbidden(..) => ErrorCategory::NotAuthorized,
            DomainError::Conflict(..) => ErrorCategory::Capacity,
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => ErrorCategory::InvalidPhase,
                ValidationKind::MustFollowSuit | ValidationKind::BidAlreadyPlaced => {
                    ErrorCategory::RuleViolation
                }
                ValidationKind::InvalidSeatCount
                | ValidationKind::InvalidBotCount
                | ValidationKind::NotEnoughPlayers => ErrorCategory::Capacity,
                ValidationKind::BadRoomCode => ErrorCategory::NotFound,
                ValidationKind::InvalidBid
                | ValidationKind::CardNotInHand
                | ValidationKind::ParseCard
                | ValidationKind::InvalidRound
                | ValidationKind::Other(_) => ErrorCategory::InvalidValue,
            },
        }
    }
}
