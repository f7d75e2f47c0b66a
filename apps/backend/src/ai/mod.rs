//! Bot players: automated decisions for seats not bound to a human.

mod heuristic;
mod trait_def;

pub use heuristic::LowballBot;
pub use trait_def::{AiError, BotPlayer, BotView};
