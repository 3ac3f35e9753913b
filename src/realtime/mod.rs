//! Realtime messaging, presence, and collaborative sessions
//!
//! This module implements the WebSocket channel of the platform: 1:1 chat
//! relay, online-user presence tracking, typing indicators, and live
//! code/whiteboard session fan-out. Delivery is a flat relay over the
//! in-process [`Hub`]; there is no acknowledgement protocol, redelivery,
//! or cross-process pub/sub.

pub mod event;
pub mod hub;
pub mod socket;

pub use event::{ClientEvent, ServerEvent};
pub use hub::Hub;
pub use socket::ws_handler;
