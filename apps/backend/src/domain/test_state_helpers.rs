//! Test-only game state builders for domain unit tests.

use std::collections::BTreeSet;

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::Card;

/// Parse card keys like `"A♠"` or `"10H"`; panics on bad input.
pub fn cards(keys: &[&str]) -> Vec<Card> {
    try_parse_cards(keys.iter().copied()).expect("test card keys must parse")
}

/// A `Playing` state with the given hands, every bid set to 0, `leader` to
/// lead the first trick, and a round index whose schedule matches the hand
/// size when one exists.
pub fn playing_state(hands: Vec<Vec<Card>>, leader: Seat) -> GameState {
    let n = hands.len() as u8;
    let mut state = GameState::new(n, BTreeSet::new()).expect("valid seat count");
    let hand_size = hands.first().map(Vec::len).unwrap_or(0) as u8;
    state.round_index = (0..14u8)
        .find(|&r| crate::domain::rules::cards_for_round(r) == Some(hand_size))
        .unwrap_or(0);
    state.hands = hands;
    state.bids = vec![Some(0); n as usize];
    state.phase = Phase::Playing;
    state.leader = leader;
    state.turn = leader;
    state
}

/// A `Bidding` state for round `round_index` with empty hands of the right
/// size left to the caller.
pub fn bidding_state(seat_count: u8, round_index: u8) -> GameState {
    let mut state = GameState::new(seat_count, BTreeSet::new()).expect("valid seat count");
    state.round_index = round_index;
    state.phase = Phase::Bidding;
    state
}
