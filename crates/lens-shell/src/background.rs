//! Background worker thread that owns the stores
//!
//! The store substrate is single threaded: the action hub, both store hubs
//! and every listener live inside this thread, and the only way in is the
//! transport channel. UI contexts hold the sender side and never touch a
//! store directly.

use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread;

use lens_flux::stores::VisualizationDefaults;
use lens_flux::{
    ActionHub, GlobalStoreHub, ShellKind, StoreHub, TabContextStoreHub,
};
use lens_messaging::{
    CoreTelemetryEventHandler, MessageRouter, TelemetryClient, TelemetryEventHandler, Transport,
};

/// Spawn the background worker thread
///
/// - `transport_rx`: receives message/telemetry envelopes from UI contexts
/// - `telemetry_client`: backend the worker publishes telemetry into
/// - `shell`: decides which global stores exist in this process
///
/// The worker shuts down cleanly when every sender is dropped.
pub fn spawn_background_worker(
    transport_rx: Receiver<Transport>,
    telemetry_client: Arc<dyn TelemetryClient>,
    shell: ShellKind,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(transport_rx, telemetry_client, shell);
    })
}

fn background_loop(
    transport_rx: Receiver<Transport>,
    telemetry_client: Arc<dyn TelemetryClient>,
    shell: ShellKind,
) {
    log::info!("Background worker started");

    let actions = ActionHub::new();
    let tab_hub = TabContextStoreHub::new(&actions, VisualizationDefaults::default());
    let global_hub = GlobalStoreHub::new(&actions, shell);
    trace_store_changes(&tab_hub);
    trace_store_changes(&global_hub);

    let telemetry = CoreTelemetryEventHandler::new(telemetry_client);
    let router = MessageRouter::new(&actions, Rc::clone(&telemetry) as Rc<dyn TelemetryEventHandler>);

    while let Ok(envelope) = transport_rx.recv() {
        match envelope {
            Transport::Message(message) => router.route(message),
            Transport::Telemetry { event, data } => telemetry.publish_telemetry(&event, &data),
        }
    }

    log::info!("Transport disconnected, background worker stopped");
}

fn trace_store_changes(hub: &dyn StoreHub) {
    for store in hub.all_stores() {
        let id = store.id();
        store.add_changed_listener(Box::new(move || {
            log::trace!("store changed: {id}");
        }));
    }
}
