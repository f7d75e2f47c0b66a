//! Room codes: 4 decimal digits, generated at random and regenerated on
//! collision by the registry.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const CODE_LEN: usize = 4;

/// A validated room code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Random code in `0000..=9999`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n: u16 = rng.random_range(0..10_000);
        Self(format!("{n:04}"))
    }

    /// Validate client input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.len() == CODE_LEN && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::validation(
                ValidationKind::BadRoomCode,
                format!("Room code must be {CODE_LEN} digits"),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
