#![allow(dead_code)]

pub mod websocket;

pub use flow::{harness, harness_with_seed, Harness};
