//! Relay server module.
//!
//! Buzzer arbitration plus broadcast fan-out over WebSocket.

mod arbiter;
mod server;
mod state;

pub use arbiter::{BuzzerArbiter, PressOutcome};
pub use server::{run, serve};
pub use state::{Participant, RelayState};
