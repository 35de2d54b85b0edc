//! # quiz-relay
//!
//! A real-time event relay for a live quiz. Participants connect over
//! WebSocket; presenter-originated state changes (questions, timer,
//! scores, rounds) fan out to everyone, and a shared buzzer is
//! arbitrated so that only the first press wins until it is reset.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_relay::{DEFAULT_PORT, RelayError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), RelayError> {
//!     let addr = format!("0.0.0.0:{}", DEFAULT_PORT).parse().unwrap();
//!     quiz_relay::relay::run(addr).await
//! }
//! ```

pub mod protocol;
pub mod relay;

use std::io;

use thiserror::Error;

pub use protocol::{DEFAULT_PORT, Disposition, Envelope, EventName};
pub use relay::{BuzzerArbiter, PressOutcome, RelayState};

/// Error type for relay operations.
///
/// The relay itself has no fatal error class: rejected presses,
/// unrecognized events, and delivery failures are all defined outcomes.
/// Errors here only come from standing the server up.
#[derive(Debug, Error)]
pub enum RelayError {
    /// IO error while binding or accepting connections.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
