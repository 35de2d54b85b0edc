//! Event vocabulary and wire envelope.
//!
//! Every frame on the wire is a JSON object with an `event` name and an
//! optional `data` payload. Payloads are opaque: the relay forwards them
//! byte-for-byte and never looks inside.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default port the relay listens on.
pub const DEFAULT_PORT: u16 = 3001;

/// The full set of event names the relay understands.
///
/// Names appear on the wire in camelCase. A frame carrying any other
/// name fails to parse and is dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventName {
    ShowQuestion,
    HideQuestion,
    NavigateQuestion,
    TimerUpdate,
    ResetTimer,
    StopTimer,
    RevealAnswer,
    ScoreUpdate,
    RoundChange,
    BuzzerLocked,
    BuzzerPressed,
    ResetBuzzer,
    BuzzersUpdate,
}

/// How the relay routes an inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Re-emit to every participant verbatim; no state involved.
    PassThrough,
    /// Buzzer press, gated by the arbiter.
    Press,
    /// Buzzer reset: clears the arbiter and always broadcasts.
    Reset,
}

impl EventName {
    /// Routing table mapping each event to its relay behavior.
    ///
    /// `BuzzerLocked` is a presenter-driven announcement with no effect
    /// on the lock itself, so it passes through like any other event.
    pub fn disposition(self) -> Disposition {
        match self {
            Self::BuzzerPressed => Disposition::Press,
            Self::ResetBuzzer => Disposition::Reset,
            _ => Disposition::PassThrough,
        }
    }
}

/// A single relay frame: event name plus opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: EventName,
    /// Absent payloads stay absent: a frame with no `data` is re-emitted
    /// with no `data`. Consumers tolerate missing fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// An envelope carrying a payload.
    pub fn new(event: EventName, data: Value) -> Self {
        Self {
            event,
            data: Some(data),
        }
    }

    /// An envelope with no payload, like the internally emitted
    /// `stopTimer` and `resetBuzzer` frames.
    pub fn bare(event: EventName) -> Self {
        Self { event, data: None }
    }
}
