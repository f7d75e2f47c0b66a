//! LowballBot: a deliberately simple, deterministic, non-competitive bot.
//!
//! Bidding: `round(trumps * 0.6 + high_cards * 0.35)` clamped to the cards
//! dealt, where a high card is jack or better in any suit.
//!
//! Play: lowest card of the lead suit when following is possible, else the
//! lowest trump, else the lowest card by (suit, rank) with suits ordered
//! ♠ ♣ ♥ ♦.

use crate::ai::{AiError, BotPlayer, BotView};
use crate::domain::{Card, Rank, Suit, TRUMP};

const TRUMP_WEIGHT: f64 = 0.6;
const HIGH_CARD_WEIGHT: f64 = 0.35;

#[derive(Debug, Clone, Copy, Default)]
pub struct LowballBot;

impl LowballBot {
    pub const NAME: &'static str = "LowballBot";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Bid estimate for a hand, before clamping.
    fn estimate(hand: &[Card]) -> u8 {
        let trumps = hand.iter().filter(|c| c.suit == TRUMP).count() as f64;
        let high = hand.iter().filter(|c| c.rank >= Rank::Jack).count() as f64;
        let raw = (trumps * TRUMP_WEIGHT + high * HIGH_CARD_WEIGHT).round_ties_even();
        raw.clamp(0.0, u8::MAX as f64) as u8
    }

    /// Suit order for the last-resort pick. Differs from display order.
    fn fallback_suit_key(suit: Suit) -> u8 {
        match suit {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    fn lowest_rank_of(hand: &[Card], pred: impl Fn(&Card) -> bool) -> Option<Card> {
        hand.iter().copied().filter(pred).min_by_key(|c| c.rank)
    }
}

impl BotPlayer for LowballBot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_bid(&self, view: &BotView<'_>) -> Result<u8, AiError> {
        Ok(Self::estimate(view.hand).min(view.cards_dealt))
    }

    fn choose_play(&self, view: &BotView<'_>) -> Result<Card, AiError> {
        if let Some(lead) = view.lead_suit {
            if let Some(card) = Self::lowest_rank_of(view.hand, |c| c.suit == lead) {
                return Ok(card);
            }
        }
        if let Some(card) = Self::lowest_rank_of(view.hand, |c| c.suit == TRUMP) {
            return Ok(card);
        }
        view.hand
            .iter()
            .copied()
            .min_by_key(|c| (Self::fallback_suit_key(c.suit), c.rank))
            .ok_or(AiError::EmptyHand)
    }
}
