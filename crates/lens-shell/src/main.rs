use std::io::BufRead;
use std::sync::mpsc;
use std::sync::Arc;

use lens_flux::ShellKind;
use lens_messaging::{
    decode_message, ActionMessageDispatcher, ChannelMessageDispatcher, LoggingTelemetryClient,
    TelemetryClient,
};

mod background;
mod logger;

/// Reads wire messages as JSON lines on stdin and feeds them to the
/// background context, standing in for the browser/desktop UI surfaces.
fn main() -> anyhow::Result<()> {
    let log_file = logger::init();

    log::info!("Starting a11y-lens (log file: {})", log_file.display());

    let (tx, rx) = mpsc::channel();
    let worker = background::spawn_background_worker(
        rx,
        Arc::new(LoggingTelemetryClient) as Arc<dyn TelemetryClient>,
        ShellKind::Browser,
    );

    let dispatcher = ChannelMessageDispatcher::new(tx);
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match decode_message(&line) {
            Ok(message) => dispatcher.dispatch_message(message),
            Err(e) => log::warn!("unrecognized message dropped: {e}"),
        }
    }

    // Dropping the last sender shuts the worker down.
    drop(dispatcher);
    if worker.join().is_err() {
        anyhow::bail!("background worker panicked");
    }

    log::info!("Exiting a11y-lens");
    Ok(())
}
