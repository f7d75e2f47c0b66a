use std::ops::RangeInclusive;

pub const MIN_SEATS: u8 = 2;
pub const MAX_SEATS: u8 = 8;
pub const ROUND_COUNT: u8 = 14;
pub const LAST_ROUND_INDEX: u8 = ROUND_COUNT - 1;
pub const DECK_SIZE: u8 = 52;

// Cards dealt per seat: 7 down to 1, twice at 1, back up to 7.
const ROUND_CARDS: [u8; ROUND_COUNT as usize] = [7, 6, 5, 4, 3, 2, 1, 1, 2, 3, 4, 5, 6, 7];

/// Cards dealt to each seat in the given 0-based round.
pub fn cards_for_round(round_index: u8) -> Option<u8> {
    ROUND_CARDS.get(round_index as usize).copied()
}

/// Cards each of `seat_count` seats receives in a round. Capped so the deal
/// fits in one deck: eight seats get six cards in the seven-card rounds.
pub fn cards_per_seat(round_index: u8, seat_count: u8) -> Option<u8> {
    let scheduled = cards_for_round(round_index)?;
    let fits = DECK_SIZE / seat_count.max(1);
    Some(scheduled.min(fits))
}

pub fn valid_bid_range(cards_dealt: u8) -> RangeInclusive<u8> {
    0..=cards_dealt
}

pub fn valid_seat_count(seats: u8) -> bool {
    (MIN_SEATS..=MAX_SEATS).contains(&seats)
}
