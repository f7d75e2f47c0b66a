//! Property-based tests for trick winner resolution.

use proptest::prelude::*;

use crate::domain::state::Seat;
use crate::domain::tricks::trick_winner;
use crate::domain::{test_gens, test_prelude, Card, Suit};

/// Independent oracle: highest trump if any trump was played, otherwise the
/// highest card of the lead suit.
fn oracle_winner(cards: &[Card], lead: Suit) -> usize {
    let pick = |suit: Suit| {
        cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == suit)
            .max_by_key(|(_, c)| c.rank)
            .map(|(i, _)| i)
    };
    pick(Suit::Spades)
        .or_else(|| pick(lead))
        .expect("lead card is always on the table")
}

fn table_of(cards: &[Card]) -> Vec<Option<Card>> {
    cards.iter().copied().map(Some).collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolved winner matches the oracle for every table size.
    #[test]
    fn prop_winner_matches_oracle((cards, leader) in test_gens::complete_trick()) {
        let lead = cards[leader as usize].suit;
        let winner = trick_winner(&table_of(&cards), leader, Some(lead));
        prop_assert_eq!(winner, Some(oracle_winner(&cards, lead) as Seat));
    }

    /// Rotating which seat holds which card (keeping the led card) does not
    /// change the winning card.
    #[test]
    fn prop_winner_is_order_invariant(
        (cards, leader) in test_gens::complete_trick(),
        shift in 0usize..8,
    ) {
        let n = cards.len();
        let lead = cards[leader as usize].suit;
        let winner = trick_winner(&table_of(&cards), leader, Some(lead))
            .expect("complete trick");
        let winning_card = cards[winner as usize];

        let mut rotated = cards.clone();
        rotated.rotate_left(shift % n);
        let new_leader = rotated
            .iter()
            .position(|&c| c == cards[leader as usize])
            .expect("card still on table") as Seat;
        let rotated_winner = trick_winner(&table_of(&rotated), new_leader, Some(lead))
            .expect("complete trick");

        prop_assert_eq!(rotated[rotated_winner as usize], winning_card);
    }

    /// If any trump is on the table the winner holds trump.
    #[test]
    fn prop_trump_wins_when_present((cards, leader) in test_gens::complete_trick()) {
        let lead = cards[leader as usize].suit;
        let winner = trick_winner(&table_of(&cards), leader, Some(lead)).expect("complete trick");
        if cards.iter().any(|c| c.suit.is_trump()) {
            prop_assert!(cards[winner as usize].suit.is_trump());
        } else {
            prop_assert_eq!(cards[winner as usize].suit, lead);
        }
    }
}
