pub mod game_state;
pub mod messages;

pub use game_state::{public_view, seat_view, PublicState, SeatView};
pub use messages::{ClientMsg, ServerMsg};
