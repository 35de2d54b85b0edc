//! Relay wire protocol.
//!
//! All frames are serialized as JSON over WebSocket.

mod events;

pub use events::{DEFAULT_PORT, Disposition, Envelope, EventName};
