//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{place_bid, BidOutcome};
pub use cards_logic::{card_beats, compare_cards, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, TRUMP};
pub use dealing::{deal_hands, full_deck};
pub use game_transition::{advance, advance_round, advance_trick, start_game, Advance};
pub use rules::{cards_for_round, cards_per_seat};
pub use state::{next_seat, GameState, Phase, RoundSummary, Seat};
pub use tricks::{legal_moves, play_card, trick_winner, PlayOutcome};
