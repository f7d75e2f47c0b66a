//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::config::timing::{
    EngineTiming, DEFAULT_AUTO_NEXT_ROUND_MS, DEFAULT_AUTO_NEXT_TRICK_MS, DEFAULT_BOT_THINK_MS,
};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub timing: EngineTiming,
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("WHIST_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "WHIST_PORT", 3001u16)?;

        let timing = EngineTiming {
            bot_think: millis(&lookup, "WHIST_BOT_THINK_MS", DEFAULT_BOT_THINK_MS)?,
            auto_next_trick: millis(&lookup, "WHIST_AUTO_NEXT_TRICK_MS", DEFAULT_AUTO_NEXT_TRICK_MS)?,
            auto_next_round: millis(&lookup, "WHIST_AUTO_NEXT_ROUND_MS", DEFAULT_AUTO_NEXT_ROUND_MS)?,
        };

        Ok(Config { host, port, timing })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("{name} must be a valid number, got '{raw}'"))
        }),
    }
}

fn millis<F>(lookup: &F, name: &str, default: u64) -> Result<Duration, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, name, default).map(Duration::from_millis)
}
