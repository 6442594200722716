//! Debounced input loop driving lookups.
//!
//! Raw input-change events arrive on an mpsc channel (one event per change,
//! carrying the full current field value). Bursts within the quiet window
//! collapse into a single lookup on the last value; empty input resets the
//! surface without touching the network.

use crate::render::{self, DisplaySurface, LookupOutcome, Notifier};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Quiet window: input events closer together than this collapse into one
/// downstream lookup.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// One message from the controller to whoever owns the display surface.
#[derive(Debug)]
pub enum Update {
    /// Input emptied out; clear both regions, no lookup issued.
    Reset,
    /// A lookup finished.
    Outcome(LookupOutcome),
}

/// Wait for the next settled input value.
///
/// Blocks for the first event, then keeps replacing the pending value while
/// further events arrive within `quiet` of the previous one. Fires with the
/// last value once the burst settles (or the channel closes with a value
/// still pending). Returns `None` only when the channel closes with nothing
/// pending.
pub fn debounce(events: &Receiver<String>, quiet: Duration) -> Option<String> {
    let mut pending = events.recv().ok()?;
    loop {
        match events.recv_timeout(quiet) {
            Ok(next) => pending = next,
            Err(RecvTimeoutError::Timeout) => return Some(pending),
            Err(RecvTimeoutError::Disconnected) => return Some(pending),
        }
    }
}

/// Drive lookups from a stream of raw input events until it closes.
///
/// Each settled value is trimmed. Empty input becomes [`Update::Reset`]
/// without a network call. Non-empty input runs `lookup` on a worker thread
/// and forwards the outcome when it lands. In-flight lookups are never
/// cancelled and arrival order is not tracked, so a slow earlier response
/// can overwrite a faster later one.
pub fn run<F>(events: Receiver<String>, updates: Sender<Update>, quiet: Duration, lookup: F)
where
    F: Fn(&str) -> LookupOutcome + Clone + Send + 'static,
{
    while let Some(value) = debounce(&events, quiet) {
        let value = value.trim().to_string();
        if value.is_empty() {
            if updates.send(Update::Reset).is_err() {
                return;
            }
            continue;
        }
        let updates = updates.clone();
        let lookup = lookup.clone();
        thread::spawn(move || {
            let _ = updates.send(Update::Outcome(lookup(&value)));
        });
    }
}

/// Apply one controller update to the surface.
pub fn apply(update: Update, surface: &mut DisplaySurface, notifier: &mut dyn Notifier) {
    match update {
        Update::Reset => surface.reset(),
        Update::Outcome(outcome) => render::process(outcome, surface, notifier),
    }
}
