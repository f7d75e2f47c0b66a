use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameState, Phase, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of a recorded bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Other seats still have to bid.
    Waiting,
    /// This was the last bid; the round moved to `Playing`.
    BiddingComplete,
}

/// Record `seat`'s bid for the current round.
///
/// A seat bids at most once per round and the bid must lie in
/// `0..=cards_dealt`. When the last bid lands, play starts with the leader.
pub fn place_bid(state: &mut GameState, seat: Seat, bid: u8) -> Result<BidOutcome, DomainError> {
    state.require_phase(Phase::Bidding, "bid")?;
    let idx = state.require_seat(seat)?;

    if state.bids[idx].is_some() {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyPlaced,
            format!("Seat {seat} has already bid this round"),
        ));
    }

    let range = valid_bid_range(state.cards_dealt());
    if !range.contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "Bid {bid} out of range {}..={}",
                range.start(),
                range.end()
            ),
        ));
    }

    state.bids[idx] = Some(bid);
    state.bump_version();

    if state.all_bids_in() {
        state.phase = Phase::Playing;
        state.turn = state.leader;
        return Ok(BidOutcome::BiddingComplete);
    }
    Ok(BidOutcome::Waiting)
}
