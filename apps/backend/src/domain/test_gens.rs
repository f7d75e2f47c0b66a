// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::rules::{MAX_SEATS, MIN_SEATS, ROUND_COUNT};
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn seat_count() -> impl Strategy<Value = u8> {
    MIN_SEATS..=MAX_SEATS
}

pub fn round_index() -> impl Strategy<Value = u8> {
    0..ROUND_COUNT
}

/// `n` distinct cards in random order.
pub fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck[..n].to_vec())
}

/// A fully played table (one distinct card per seat) plus the leader seat.
pub fn complete_trick() -> impl Strategy<Value = (Vec<Card>, Seat)> {
    seat_count().prop_flat_map(|n| (distinct_cards(n as usize), 0..n))
}
