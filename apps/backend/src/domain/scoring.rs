use crate::domain::state::{GameState, RoundSummary};

/// Points for one seat's round: `10 + bid` on an exact bid, otherwise minus
/// the distance between bid and tricks taken.
pub fn round_points(bid: u8, taken: u8) -> i32 {
    if bid == taken {
        10 + bid as i32
    } else {
        -(taken as i32 - bid as i32).abs()
    }
}

/// Score the finished round for every seat, accumulate totals and append the
/// round to history. Called once, when all hands are empty.
pub fn apply_round_scoring(state: &mut GameState) -> &RoundSummary {
    let bids: Vec<u8> = state.bids.iter().map(|b| b.unwrap_or(0)).collect();
    let taken = state.tricks_round.clone();
    let points: Vec<i32> = bids
        .iter()
        .zip(&taken)
        .map(|(&bid, &t)| round_points(bid, t))
        .collect();

    for (total, p) in state.points_total.iter_mut().zip(&points) {
        *total += p;
    }

    state.history.push(RoundSummary {
        round: state.round_index + 1,
        cards_dealt: state.cards_dealt(),
        bids,
        tricks_taken: taken,
        points,
    });
    &state.history[state.history.len() - 1]
}
