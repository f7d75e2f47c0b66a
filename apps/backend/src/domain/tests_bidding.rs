use crate::domain::bidding::{place_bid, BidOutcome};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::bidding_state;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn bids_are_recorded_until_the_last_one_starts_play() {
    let mut state = bidding_state(3, 0);
    assert_eq!(place_bid(&mut state, 0, 2).unwrap(), BidOutcome::Waiting);
    assert_eq!(place_bid(&mut state, 2, 0).unwrap(), BidOutcome::Waiting);
    assert_eq!(state.phase, Phase::Bidding);

    assert_eq!(
        place_bid(&mut state, 1, 7).unwrap(),
        BidOutcome::BiddingComplete
    );
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, state.leader);
    assert_eq!(state.bids, vec![Some(2), Some(7), Some(0)]);
}

#[test]
fn bids_can_arrive_in_any_seat_order() {
    let mut state = bidding_state(4, 6);
    for seat in [3, 1, 0] {
        place_bid(&mut state, seat, 1).unwrap();
    }
    assert_eq!(state.phase, Phase::Bidding);
    place_bid(&mut state, 2, 0).unwrap();
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn second_bid_from_same_seat_is_rejected_without_change() {
    let mut state = bidding_state(2, 0);
    place_bid(&mut state, 0, 3).unwrap();
    let before = state.clone();

    let err = place_bid(&mut state, 0, 4).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BidAlreadyPlaced, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn bid_above_cards_dealt_is_rejected() {
    // Round 6 deals a single card.
    let mut state = bidding_state(2, 6);
    let err = place_bid(&mut state, 0, 2).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidBid, _)
    ));
    assert_eq!(state.bids, vec![None, None]);
    assert!(place_bid(&mut state, 0, 1).is_ok());
}

#[test]
fn bid_outside_bidding_is_a_phase_mismatch() {
    let mut state = bidding_state(2, 0);
    state.phase = Phase::Playing;
    let err = place_bid(&mut state, 0, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn bid_bumps_version_only_on_success() {
    let mut state = bidding_state(2, 0);
    let v0 = state.version;
    place_bid(&mut state, 0, 1).unwrap();
    assert_eq!(state.version, v0 + 1);
    let _ = place_bid(&mut state, 0, 1);
    assert_eq!(state.version, v0 + 1);
}
