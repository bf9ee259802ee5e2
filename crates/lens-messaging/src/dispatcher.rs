//! Cross-context dispatch
//!
//! UI contexts hold an [`ActionMessageDispatcher`] and never a store: every
//! state mutation request leaves the UI as a [`Message`] on this transport
//! and is applied in the background context. Telemetry-only sends ride the
//! same channel but skip the store layer entirely.
//!
//! Delivery is asynchronous and unacknowledged. A send into a torn-down
//! background context is logged and dropped; callers that need a guarantee
//! must layer their own acknowledgment on top.

use std::sync::mpsc::Sender;

use crate::message::Message;
use crate::telemetry::TelemetryData;

/// What travels over the context boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Transport {
    Message(Message),
    Telemetry { event: String, data: TelemetryData },
}

/// Capability injected into action creators. Creators never construct their
/// dispatcher; the context entry point does.
pub trait ActionMessageDispatcher {
    /// Deliver a state-mutation request to the background context.
    fn dispatch_message(&self, message: Message);

    /// Fire-and-forget telemetry; never blocks, never fails the caller.
    fn send_telemetry(&self, event: &str, data: TelemetryData);
}

/// Channel-backed dispatcher for contexts living in the same process as the
/// background worker.
#[derive(Clone)]
pub struct ChannelMessageDispatcher {
    tx: Sender<Transport>,
}

impl ChannelMessageDispatcher {
    pub fn new(tx: Sender<Transport>) -> Self {
        Self { tx }
    }
}

impl ActionMessageDispatcher for ChannelMessageDispatcher {
    fn dispatch_message(&self, message: Message) {
        if let Err(e) = self.tx.send(Transport::Message(message)) {
            log::error!("dispatcher: background context unavailable, message dropped: {e}");
        }
    }

    fn send_telemetry(&self, event: &str, data: TelemetryData) {
        let envelope = Transport::Telemetry {
            event: event.to_string(),
            data,
        };
        if let Err(e) = self.tx.send(envelope) {
            log::error!("dispatcher: background context unavailable, telemetry dropped: {e}");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every dispatched envelope for assertions.
    #[derive(Default)]
    pub struct RecordingDispatcher {
        pub dispatched: Mutex<Vec<Transport>>,
    }

    impl ActionMessageDispatcher for RecordingDispatcher {
        fn dispatch_message(&self, message: Message) {
            self.dispatched
                .lock()
                .unwrap()
                .push(Transport::Message(message));
        }

        fn send_telemetry(&self, event: &str, data: TelemetryData) {
            self.dispatched.lock().unwrap().push(Transport::Telemetry {
                event: event.to_string(),
                data,
            });
        }
    }
}
