//! Phase transitions that are not a single seat's bid or play: dealing,
//! starting the game, and the explicit "continue" between tricks and rounds.

use rand::Rng;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::LAST_ROUND_INDEX;
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an explicit or timer-driven "continue".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Between tricks → playing; the previous winner now leads.
    NextTrick,
    /// Round finished → bidding of `round_index`.
    NextRound { round_index: u8 },
    /// The terminal round was finished; the game is over.
    GameFinished,
}

/// Deal `round_index` and reset every per-round field. Enters `Bidding`
/// with leader and turn at seat 0.
pub fn deal_round<R: Rng + ?Sized>(
    state: &mut GameState,
    round_index: u8,
    rng: &mut R,
) -> Result<(), DomainError> {
    let hands = deal_hands(state.seat_count, round_index, rng)?;
    let n = state.seat_count as usize;

    state.round_index = round_index;
    state.hands = hands;
    state.bids = vec![None; n];
    state.table = vec![None; n];
    state.tricks_round = vec![0; n];
    state.lead_suit = None;
    state.winner = None;
    state.leader = 0;
    state.turn = 0;
    state.phase = Phase::Bidding;
    state.bump_version();
    Ok(())
}

/// Lobby → bidding of round 0. Seat occupancy is checked by the room.
pub fn start_game<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<(), DomainError> {
    state.require_phase(Phase::Lobby, "start the game")?;
    deal_round(state, 0, rng)
}

/// Between tricks → playing. The previous trick's winner leads and the
/// table is cleared.
pub fn advance_trick(state: &mut GameState) -> Result<(), DomainError> {
    state.require_phase(Phase::BetweenTricks, "start the next trick")?;

    if let Some(winner) = state.winner.take() {
        state.leader = winner;
    }
    state.table.iter_mut().for_each(|slot| *slot = None);
    state.lead_suit = None;
    state.turn = state.leader;
    state.phase = Phase::Playing;
    state.bump_version();
    Ok(())
}

/// Round finished → next round's bidding, or game finished after the last
/// round. Runs at most once per round index.
pub fn advance_round<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<Advance, DomainError> {
    state.require_phase(Phase::RoundFinished, "start the next round")?;

    let finished = state.round_index;
    if state.round_advanced_for == Some(finished) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Round {finished} has already been advanced"),
        ));
    }

    if finished >= LAST_ROUND_INDEX {
        state.round_advanced_for = Some(finished);
        state.phase = Phase::GameFinished;
        state.bump_version();
        return Ok(Advance::GameFinished);
    }

    let next = finished + 1;
    deal_round(state, next, rng)?;
    state.round_advanced_for = Some(finished);
    Ok(Advance::NextRound { round_index: next })
}

/// The "continue" request: dispatches on the current phase.
pub fn advance<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<Advance, DomainError> {
    match state.phase {
        Phase::BetweenTricks => advance_trick(state).map(|()| Advance::NextTrick),
        Phase::RoundFinished => advance_round(state, rng),
        other => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Nothing to continue during {other:?}"),
        )),
    }
}
