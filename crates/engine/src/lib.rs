//! Session and state-synchronization engine for the oxo relay.
//!
//! This crate is the functional core of the relay: it owns the session
//! table, validates every inbound operation against authoritative state,
//! and describes the resulting fan-out as a list of addressed events. It
//! performs no I/O; the hosting crate provides the single-writer execution
//! discipline and moves events to sockets.
//!
//! ## Architecture
//!
//! - [`Engine`] — orchestrates create/join/move traffic against the store
//! - [`Store`] — in-memory session table keyed by generated ID
//! - [`Session`] — one game record and its validated mutations
//! - [`Board`], [`winner`], [`outcome`] — grid state and pure win/draw detection
//!
//! ## Protocol
//!
//! - [`ClientMessage`] / [`ServerMessage`] — tagged wire forms
//! - [`Protocol`] — decode inbound text, encode internal [`Event`]s
//! - [`EngineError`] — precondition failures with stable reason codes
mod board;
mod engine;
mod error;
mod event;
mod message;
mod protocol;
mod rules;
mod session;
mod store;
mod timer;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use message::*;
pub use protocol::*;
pub use rules::*;
pub use session::*;
pub use store::*;
pub use timer::*;
