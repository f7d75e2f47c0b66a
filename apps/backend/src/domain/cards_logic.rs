//! Card game logic: checking suits in hands, comparing card strength

use std::cmp::Ordering;

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Compare two cards played into the same trick.
///
/// `Greater` means `a` beats `b`. Trump beats non-trump; same suit compares by
/// rank; otherwise a lead-suit card beats an off-suit card. Two off-suit,
/// non-trump cards of different suits fall back to rank.
pub fn compare_cards(a: Card, b: Card, lead: Option<Suit>) -> Ordering {
    let a_trump = a.suit.is_trump();
    let b_trump = b.suit.is_trump();
    if a_trump != b_trump {
        return if a_trump {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    if a.suit == b.suit {
        return a.rank.cmp(&b.rank);
    }

    if let Some(lead) = lead {
        let a_follows = a.suit == lead;
        let b_follows = b.suit == lead;
        if a_follows != b_follows {
            return if a_follows {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
    }

    a.rank.cmp(&b.rank)
}

pub fn card_beats(a: Card, b: Card, lead: Option<Suit>) -> bool {
    compare_cards(a, b, lead) == Ordering::Greater
}
