//! Shuffle-and-deal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{cards_per_seat, valid_seat_count};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a fresh 52-card deck in display order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Deal one round.
///
/// The deck is shuffled uniformly, the first `per_seat * seat_count`
/// cards are dealt one at a time round-robin (seat `i` gets deck positions
/// `i, i + n, i + 2n, ...`) and the rest are discarded. Each hand is returned
/// sorted in display order.
pub fn deal_hands<R: Rng + ?Sized>(
    seat_count: u8,
    round_index: u8,
    rng: &mut R,
) -> Result<Vec<Vec<Card>>, DomainError> {
    if !valid_seat_count(seat_count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeatCount,
            format!("Seat count must be 2..=8, got {seat_count}"),
        ));
    }
    let per_seat = cards_per_seat(round_index, seat_count).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidRound,
            format!("No round {round_index} in the schedule"),
        )
    })?;

    let n = seat_count as usize;
    let needed = per_seat as usize * n;

    let mut deck = full_deck();
    deck.shuffle(rng);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(per_seat as usize); n];
    for (i, card) in deck.into_iter().take(needed).enumerate() {
        hands[i % n].push(card);
    }
    for hand in &mut hands {
        hand.sort();
    }

    Ok(hands)
}
