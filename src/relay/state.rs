//! Relay state management.
//!
//! Holds the registry of connected participants and the buzzer arbiter,
//! and routes every inbound event to its broadcast effect.

use std::collections::HashMap;
use std::net::SocketAddr;

use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::protocol::{Disposition, Envelope, EventName};

use super::arbiter::{BuzzerArbiter, PressOutcome};

/// A connected participant.
///
/// Identity is the connection: a fresh id per WebSocket, nothing else
/// tracked server-side. Names, roles and scores live in event payloads
/// and pass through opaquely.
pub struct Participant {
    /// Unique connection id, assigned at connect time.
    pub id: Uuid,
    /// Peer address, kept for logging only.
    pub addr: SocketAddr,
    /// Channel feeding this participant's WebSocket send task.
    pub sender: mpsc::UnboundedSender<Envelope>,
}

impl Participant {
    /// Register a new connection.
    pub fn new(addr: SocketAddr, sender: mpsc::UnboundedSender<Envelope>) -> Self {
        Self {
            id: Uuid::new_v4(),
            addr,
            sender,
        }
    }
}

/// Main relay state: the participant registry plus the buzzer arbiter.
pub struct RelayState {
    participants: HashMap<Uuid, Participant>,
    arbiter: BuzzerArbiter,
}

impl RelayState {
    /// Create an empty relay with an unlocked buzzer.
    pub fn new() -> Self {
        Self {
            participants: HashMap::new(),
            arbiter: BuzzerArbiter::new(),
        }
    }

    /// Add a participant, returning its connection id.
    ///
    /// Late joiners get no automatic sync: a participant connecting
    /// while the buzzer is locked learns about it only from an explicit
    /// `buzzerLocked` announcement or the next `resetBuzzer`.
    pub fn connect(&mut self, participant: Participant) -> Uuid {
        let id = participant.id;
        debug!(%id, addr = %participant.addr, "participant connected");
        self.participants.insert(id, participant);
        id
    }

    /// Remove a participant. Its queued broadcasts are dropped with it.
    pub fn disconnect(&mut self, id: Uuid) {
        if let Some(participant) = self.participants.remove(&id) {
            debug!(%id, addr = %participant.addr, "participant disconnected");
        }
    }

    /// Number of currently connected participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Whether the buzzer is currently held.
    pub fn buzzer_locked(&self) -> bool {
        self.arbiter.is_locked()
    }

    /// Route one inbound event to its broadcast effect.
    ///
    /// Pass-through events are re-emitted verbatim. The two buzzer
    /// events go through the arbiter first: a winning press broadcasts
    /// the press and then a timer stop, a rejected press emits nothing,
    /// and a reset always broadcasts a bare `resetBuzzer` (the inbound
    /// payload, if any, is discarded).
    ///
    /// The caller holds the state mutex for the whole call, so the
    /// arbiter's check-and-set and the resulting broadcasts form one
    /// critical section with no await point inside.
    pub fn handle_event(&mut self, envelope: Envelope) {
        match envelope.event.disposition() {
            Disposition::PassThrough => {
                self.broadcast_all(envelope);
            }
            Disposition::Press => match self.arbiter.press() {
                PressOutcome::Won => {
                    info!("buzzer pressed, locking");
                    self.broadcast_all(envelope);
                    self.broadcast_all(Envelope::bare(EventName::StopTimer));
                }
                PressOutcome::Rejected => {
                    // Race loser. No broadcast, no error.
                }
            },
            Disposition::Reset => {
                info!("buzzer reset");
                self.arbiter.reset();
                self.broadcast_all(Envelope::bare(EventName::ResetBuzzer));
            }
        }
    }

    /// Deliver an envelope to every connected participant, sender
    /// included. Send failures mean the receiver is mid-disconnect and
    /// are absorbed, never retried.
    pub fn broadcast_all(&self, envelope: Envelope) {
        for participant in self.participants.values() {
            let _ = participant.sender.send(envelope.clone());
        }
    }
}

impl Default for RelayState {
    fn default() -> Self {
        Self::new()
    }
}
