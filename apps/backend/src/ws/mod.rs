//! Websocket gateway: one actor per connection, fanned out through the hub.

pub mod hub;
pub mod session;

pub use hub::{HubEvent, WsRegistry};
pub use session::WsSession;
