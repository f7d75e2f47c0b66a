//! Bot player trait definition.

use crate::domain::state::{GameState, Seat};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, Suit};

/// Errors that can occur during bot decision-making.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("bot has no cards to play")]
    EmptyHand,
    #[error("bot internal error: {0}")]
    Internal(String),
}

/// Everything a bot is allowed to see when it acts: its own hand and the
/// public trick state. Never another seat's hand.
#[derive(Debug, Clone)]
pub struct BotView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub lead_suit: Option<Suit>,
    pub cards_dealt: u8,
    pub legal_plays: Vec<Card>,
}

impl<'a> BotView<'a> {
    pub fn for_seat(state: &'a GameState, seat: Seat) -> Option<Self> {
        let hand = state.hands.get(seat as usize)?;
        Some(Self {
            seat,
            hand,
            lead_suit: state.lead_suit,
            cards_dealt: state.cards_dealt(),
            legal_plays: legal_moves(state, seat),
        })
    }
}

/// Trait for bot players.
///
/// Implementations pick a bid in `0..=cards_dealt` and a card from the hand.
/// The caller validates the choice through the normal game rules.
pub trait BotPlayer: Send + Sync {
    fn name(&self) -> &'static str;

    fn choose_bid(&self, view: &BotView<'_>) -> Result<u8, AiError>;

    fn choose_play(&self, view: &BotView<'_>) -> Result<Card, AiError>;
}
