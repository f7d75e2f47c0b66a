use crate::domain::scoring::apply_round_scoring;
use crate::domain::state::{next_seat, GameState, Phase, Seat};
use crate::domain::{card_beats, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

/// What a legal play caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The trick is still open; `next` is to play.
    NextTurn { next: Seat },
    /// The trick was resolved and cards remain in hand.
    TrickComplete { winner: Seat },
    /// The trick was resolved, hands are empty and the round was scored.
    RoundComplete { winner: Seat },
}

/// Cards `seat` may legally play right now, in display order.
///
/// A seat holding the lead suit must follow it; otherwise anything goes.
/// Empty outside `Playing`.
pub fn legal_moves(state: &GameState, seat: Seat) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let Some(hand) = state.hands.get(seat as usize) else {
        return Vec::new();
    };

    if let Some(lead) = state.lead_suit {
        if hand_has_suit(hand, lead) {
            return hand.iter().copied().filter(|c| c.suit == lead).collect();
        }
    }
    hand.clone()
}

/// Seat that wins a complete trick.
///
/// Starts from the leader's card and walks the table in seat order from the
/// leader, replacing the best card whenever another strictly beats it.
pub fn trick_winner(table: &[Option<Card>], leader: Seat, lead: Option<Suit>) -> Option<Seat> {
    let n = table.len();
    let mut best_seat = leader;
    let mut best = table.get(leader as usize).copied().flatten()?;
    for offset in 1..n {
        let seat = ((leader as usize + offset) % n) as Seat;
        let card = table[seat as usize]?;
        if card_beats(card, best, lead) {
            best = card;
            best_seat = seat;
        }
    }
    Some(best_seat)
}

/// Play `card` from `seat`'s hand into the current trick.
///
/// Validates phase, turn, ownership and suit-following before touching state.
/// Completing the trick resolves it; emptying every hand scores the round.
pub fn play_card(state: &mut GameState, seat: Seat, card: Card) -> Result<PlayOutcome, DomainError> {
    state.require_phase(Phase::Playing, "play a card")?;
    let idx = state.require_seat(seat)?;

    if state.turn != seat {
        return Err(DomainError::forbidden(
            ForbiddenKind::OutOfTurn,
            format!("It is seat {}'s turn", state.turn),
        ));
    }

    let Some(pos) = state.hands[idx].iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} is not in your hand"),
        ));
    };

    if !legal_moves(state, seat).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!(
                "Must follow {}",
                state.lead_suit.map(|s| s.to_string()).unwrap_or_default()
            ),
        ));
    }

    let played = state.hands[idx].remove(pos);
    if state.lead_suit.is_none() {
        state.lead_suit = Some(played.suit);
    }
    state.table[idx] = Some(played);
    state.bump_version();

    if !state.trick_complete() {
        let mut next = next_seat(seat, state.seat_count);
        while state.table[next as usize].is_some() {
            next = next_seat(next, state.seat_count);
        }
        state.turn = next;
        return Ok(PlayOutcome::NextTurn { next });
    }

    let winner = trick_winner(&state.table, state.leader, state.lead_suit).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: complete trick has no winner")
    })?;
    state.tricks_round[winner as usize] += 1;
    state.tricks_total[winner as usize] += 1;
    state.winner = Some(winner);

    if state.hands_empty() {
        apply_round_scoring(state);
        state.phase = Phase::RoundFinished;
        Ok(PlayOutcome::RoundComplete { winner })
    } else {
        state.phase = Phase::BetweenTricks;
        Ok(PlayOutcome::TrickComplete { winner })
    }
}
