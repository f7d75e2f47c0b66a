use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::place_bid;
use crate::domain::game_transition::{
    advance, advance_round, advance_trick, deal_round, start_game, Advance,
};
use crate::domain::rules::LAST_ROUND_INDEX;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{cards, playing_state};
use crate::domain::tricks::{legal_moves, play_card, PlayOutcome};
use crate::errors::domain::{DomainError, ValidationKind};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn lobby(n: u8) -> GameState {
    GameState::new(n, Default::default()).unwrap()
}

#[test]
fn start_deals_round_zero_into_bidding() {
    let mut state = lobby(4);
    start_game(&mut state, &mut rng()).unwrap();
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.round_index, 0);
    assert!(state.hands.iter().all(|h| h.len() == 7));
    assert_eq!(state.leader, 0);
    assert_eq!(state.turn, 0);
}

#[test]
fn start_twice_is_a_phase_mismatch() {
    let mut state = lobby(2);
    start_game(&mut state, &mut rng()).unwrap();
    let err = start_game(&mut state, &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn next_trick_is_led_by_previous_winner() {
    let mut state = playing_state(vec![cards(&["2♥", "3♣"]), cards(&["A♥", "5♣"])], 0);
    play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();
    play_card(&mut state, 1, "A♥".parse().unwrap()).unwrap();
    assert_eq!(state.phase, Phase::BetweenTricks);

    advance_trick(&mut state).unwrap();
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.leader, 1);
    assert_eq!(state.turn, 1);
    assert!(state.table.iter().all(Option::is_none));
    assert_eq!(state.lead_suit, None);
    assert_eq!(state.winner, None);
}

#[test]
fn advance_outside_pause_phases_is_rejected() {
    let mut state = lobby(3);
    for phase in [Phase::Lobby, Phase::Bidding, Phase::Playing, Phase::GameFinished] {
        state.phase = phase;
        let err = advance(&mut state, &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::PhaseMismatch, _)
        ));
    }
}

#[test]
fn next_round_resets_per_round_fields_and_keeps_totals() {
    let mut state = playing_state(vec![cards(&["A♥"]), cards(&["K♥"])], 1);
    state.round_index = 6;
    play_card(&mut state, 1, "K♥".parse().unwrap()).unwrap();
    let out = play_card(&mut state, 0, "A♥".parse().unwrap()).unwrap();
    assert_eq!(out, PlayOutcome::RoundComplete { winner: 0 });
    let totals = state.points_total.clone();

    let adv = advance_round(&mut state, &mut rng()).unwrap();
    assert_eq!(adv, Advance::NextRound { round_index: 7 });
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.bids, vec![None, None]);
    assert_eq!(state.tricks_round, vec![0, 0]);
    assert!(state.table.iter().all(Option::is_none));
    assert_eq!(state.winner, None);
    assert_eq!(state.leader, 0);
    assert_eq!(state.turn, 0);
    assert!(state.hands.iter().all(|h| h.len() == 1));
    assert_eq!(state.points_total, totals);
    assert_eq!(state.tricks_total, vec![1, 0]);
    assert_eq!(state.round_advanced_for, Some(6));
}

#[test]
fn round_advance_runs_once_per_round() {
    let mut state = lobby(2);
    state.phase = Phase::RoundFinished;
    state.round_index = 3;
    state.round_advanced_for = Some(3);
    let before = state.clone();

    assert!(advance_round(&mut state, &mut rng()).is_err());
    assert_eq!(state, before);
}

#[test]
fn terminal_round_finishes_the_game() {
    let mut state = lobby(2);
    state.phase = Phase::RoundFinished;
    state.round_index = LAST_ROUND_INDEX;

    let adv = advance(&mut state, &mut rng()).unwrap();
    assert_eq!(adv, Advance::GameFinished);
    assert_eq!(state.phase, Phase::GameFinished);
    assert!(advance(&mut state, &mut rng()).is_err());
}

#[test]
fn deal_round_rejects_rounds_past_the_schedule() {
    let mut state = lobby(2);
    assert!(deal_round(&mut state, 14, &mut rng()).is_err());
    assert_eq!(state.phase, Phase::Lobby);
}

/// Play a whole 2-seat game with the first legal card and check the
/// card-conservation and trick-count invariants at each round end.
#[test]
fn full_game_keeps_invariants() {
    let mut r = rng();
    let mut state = lobby(2);
    start_game(&mut state, &mut r).unwrap();

    loop {
        match state.phase {
            Phase::Bidding => {
                for seat in 0..2 {
                    place_bid(&mut state, seat, 0).unwrap();
                }
            }
            Phase::Playing => {
                let dealt = state.cards_dealt() as usize * 2;
                assert_eq!(state.cards_accounted(), dealt);
                let seat = state.turn;
                let card = legal_moves(&state, seat)[0];
                play_card(&mut state, seat, card).unwrap();
            }
            Phase::BetweenTricks => {
                advance(&mut state, &mut r).unwrap();
            }
            Phase::RoundFinished => {
                let sum: u8 = state.tricks_round.iter().sum();
                assert_eq!(sum, state.cards_dealt());
                advance(&mut state, &mut r).unwrap();
            }
            Phase::GameFinished => break,
            Phase::Lobby => unreachable!(),
        }
    }

    assert_eq!(state.history.len(), 14);
    let from_history: Vec<i32> = (0..2)
        .map(|s| state.history.iter().map(|h| h.points[s]).sum())
        .collect();
    assert_eq!(state.points_total, from_history);
}
