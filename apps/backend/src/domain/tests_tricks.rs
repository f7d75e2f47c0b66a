use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{cards, playing_state};
use crate::domain::tricks::{legal_moves, play_card, trick_winner, PlayOutcome};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

#[test]
fn must_follow_lead_suit_when_able() {
    let mut state = playing_state(
        vec![cards(&["2♥", "3♣"]), cards(&["A♠", "5♥"])],
        0,
    );
    play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();

    assert_eq!(legal_moves(&state, 1), cards(&["5♥"]));
    let before = state.clone();
    let err = play_card(&mut state, 1, "A♠".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MustFollowSuit, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn void_in_lead_suit_may_play_anything() {
    let mut state = playing_state(
        vec![cards(&["2♥", "3♣"]), cards(&["A♠", "5♦"])],
        0,
    );
    play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();
    assert_eq!(legal_moves(&state, 1), cards(&["A♠", "5♦"]));
    assert!(play_card(&mut state, 1, "5♦".parse().unwrap()).is_ok());
}

#[test]
fn first_card_sets_lead_suit_and_any_card_leads() {
    let mut state = playing_state(vec![cards(&["2♥", "K♣"]), cards(&["A♠", "5♦"])], 0);
    assert_eq!(legal_moves(&state, 0), cards(&["2♥", "K♣"]));
    play_card(&mut state, 0, "K♣".parse().unwrap()).unwrap();
    assert_eq!(state.lead_suit, Some(Suit::Clubs));
}

#[test]
fn out_of_turn_is_rejected() {
    let mut state = playing_state(vec![cards(&["2♥"]), cards(&["A♠"])], 0);
    let err = play_card(&mut state, 1, "A♠".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::OutOfTurn, _)
    ));
}

#[test]
fn card_not_in_hand_is_rejected() {
    let mut state = playing_state(vec![cards(&["2♥"]), cards(&["A♠"])], 0);
    let err = play_card(&mut state, 0, "A♠".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardNotInHand, _)
    ));
}

#[test]
fn play_outside_playing_phase_is_rejected() {
    let mut state = playing_state(vec![cards(&["2♥"]), cards(&["A♠"])], 0);
    state.phase = Phase::BetweenTricks;
    let err = play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn turn_wraps_from_leader_and_skips_nobody() {
    let mut state = playing_state(
        vec![
            cards(&["2♥", "3♥"]),
            cards(&["4♥", "5♥"]),
            cards(&["6♥", "7♥"]),
        ],
        2,
    );
    let out = play_card(&mut state, 2, "6♥".parse().unwrap()).unwrap();
    assert_eq!(out, PlayOutcome::NextTurn { next: 0 });
    let out = play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();
    assert_eq!(out, PlayOutcome::NextTurn { next: 1 });
    let out = play_card(&mut state, 1, "4♥".parse().unwrap()).unwrap();
    assert_eq!(out, PlayOutcome::TrickComplete { winner: 2 });
}

#[test]
fn completed_trick_is_resolved_and_kept_on_table() {
    let mut state = playing_state(
        vec![cards(&["2♥", "9♣"]), cards(&["2♠", "3♦"])],
        0,
    );
    play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();
    let out = play_card(&mut state, 1, "2♠".parse().unwrap()).unwrap();

    assert_eq!(out, PlayOutcome::TrickComplete { winner: 1 });
    assert_eq!(state.phase, Phase::BetweenTricks);
    assert_eq!(state.winner, Some(1));
    assert_eq!(state.tricks_round, vec![0, 1]);
    assert_eq!(state.tricks_total, vec![0, 1]);
    assert!(state.table.iter().all(Option::is_some));
    // Turn is not advanced past a complete trick.
    assert_eq!(state.turn, 1);
}

#[test]
fn last_trick_scores_the_round() {
    let mut state = playing_state(vec![cards(&["A♥"]), cards(&["K♥"])], 0);
    state.round_index = 6;
    state.bids = vec![Some(1), Some(1)];

    play_card(&mut state, 0, "A♥".parse().unwrap()).unwrap();
    let out = play_card(&mut state, 1, "K♥".parse().unwrap()).unwrap();

    assert_eq!(out, PlayOutcome::RoundComplete { winner: 0 });
    assert_eq!(state.phase, Phase::RoundFinished);
    assert_eq!(state.points_total, vec![11, -1]);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].round, 7);
    assert_eq!(state.history[0].cards_dealt, 1);
}

#[test]
fn trump_two_beats_off_suit_ace() {
    let table = vec![
        Some(Card::new(Rank::Ace, Suit::Hearts)),
        Some(Card::new(Rank::Two, Suit::Spades)),
        Some(Card::new(Rank::King, Suit::Hearts)),
    ];
    assert_eq!(trick_winner(&table, 0, Some(Suit::Hearts)), Some(1));
}

#[test]
fn off_suit_cards_never_beat_the_lead() {
    let table = vec![
        Some(Card::new(Rank::Ace, Suit::Clubs)),
        Some(Card::new(Rank::Three, Suit::Diamonds)),
        Some(Card::new(Rank::King, Suit::Hearts)),
    ];
    assert_eq!(trick_winner(&table, 1, Some(Suit::Diamonds)), Some(1));
}

#[test]
fn incomplete_table_has_no_winner() {
    let table = vec![Some(Card::new(Rank::Ace, Suit::Clubs)), None];
    assert_eq!(trick_winner(&table, 0, Some(Suit::Clubs)), None);
}

#[test]
fn cards_are_conserved_through_a_trick() {
    let mut state = playing_state(
        vec![cards(&["2♥", "3♥"]), cards(&["4♥", "5♣"])],
        0,
    );
    let total = state.cards_accounted();
    play_card(&mut state, 0, "2♥".parse().unwrap()).unwrap();
    assert_eq!(state.cards_accounted(), total);
    play_card(&mut state, 1, "4♥".parse().unwrap()).unwrap();
    assert_eq!(state.cards_accounted(), total);
}
