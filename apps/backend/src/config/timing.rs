use std::time::Duration;

pub const DEFAULT_BOT_THINK_MS: u64 = 600;
pub const DEFAULT_AUTO_NEXT_TRICK_MS: u64 = 1200;
pub const DEFAULT_AUTO_NEXT_ROUND_MS: u64 = 2000;

/// Delays for scheduled game tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTiming {
    /// Pause before a bot plays its card.
    pub bot_think: Duration,
    /// Pause on a resolved trick before the next one starts (rooms with bots).
    pub auto_next_trick: Duration,
    /// Pause on a scored round before the next deal.
    pub auto_next_round: Duration,
}

impl Default for EngineTiming {
    fn default() -> Self {
        Self {
            bot_think: Duration::from_millis(DEFAULT_BOT_THINK_MS),
            auto_next_trick: Duration::from_millis(DEFAULT_AUTO_NEXT_TRICK_MS),
            auto_next_round: Duration::from_millis(DEFAULT_AUTO_NEXT_ROUND_MS),
        }
    }
}

impl EngineTiming {
    /// All delays zero; handy when tests fire tasks by hand.
    pub fn immediate() -> Self {
        Self {
            bot_think: Duration::ZERO,
            auto_next_trick: Duration::ZERO,
            auto_next_round: Duration::ZERO,
        }
    }
}
