//! Card keys: the short wire identity of a card, rank label followed by the
//! suit symbol (e.g. "A♠", "10♥", "2♣").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    /// Accepts the suit symbol, or its ASCII letter for clients that cannot
    /// easily type the symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "♠" | "S" => Ok(Suit::Spades),
            "♥" | "H" => Ok(Suit::Hearts),
            "♦" | "D" => Ok(Suit::Diamonds),
            "♣" | "C" => Ok(Suit::Clubs),
            _ => Err(parse_error(s)),
        }
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| parse_error(s))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // The suit is always the final char; everything before it is the rank.
        let Some((idx, _)) = trimmed.char_indices().last() else {
            return Err(parse_error(s));
        };
        if idx == 0 {
            return Err(parse_error(s));
        }
        let (rank_part, suit_part) = trimmed.split_at(idx);
        let rank = rank_part.parse::<Rank>().map_err(|_| parse_error(s))?;
        let suit = suit_part.parse::<Suit>().map_err(|_| parse_error(s))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse several card keys at once.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
