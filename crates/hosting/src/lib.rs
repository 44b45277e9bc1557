//! WebSocket hosting shell for the oxo relay.
//!
//! The engine crate is a synchronous core with no I/O; this crate is the
//! imperative shell around it. A [`Lobby`] owns the registry of connected
//! participants and a single-writer task that owns the [`Engine`]. Every
//! inbound message is handled to completion on that task, so no two
//! operations on a session ever interleave. Bridge tasks only move text
//! between sockets and channels.
//!
//! [`Engine`]: oxo_engine::Engine
mod handle;
mod lobby;

pub use handle::*;
pub use lobby::*;
