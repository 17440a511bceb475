//! End-to-end driver for one simulation run.
//!
//! [`run_simulation`] launches the child, relays every stdout line as a
//! `console_log` event plus an optional classified `thread_update`, and
//! emits exactly one `simulation_end` after the stream is exhausted.
//!
//! Failure behavior matches the demo harness deliberately: a missing
//! executable produces a single diagnostic console event and no
//! completion event; a read error abandons the run silently. There is
//! no retry and no way to cancel a run in progress.

use std::io;
use std::time::Duration;

use schedviz_types::ServerEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};
use tracing::{debug, error, info};

use crate::classifier;
use crate::config::RelayConfig;
use crate::launcher::{self, LaunchError};
use crate::sink::EventSink;

/// Completion message sent with the `simulation_end` event.
const END_MESSAGE: &str = "Simulation Complete";

/// Run one end-to-end simulation: launch, relay, complete.
///
/// Emits into the injected `sink`; per-run event order follows the
/// child's output line order. Concurrent calls are allowed and their
/// events interleave arbitrarily in the sink -- there is deliberately
/// no mutual exclusion between runs (known gap, kept explicit).
pub async fn run_simulation<S: EventSink>(config: &RelayConfig, sink: &S) {
    info!(executable = %config.executable.display(), "simulation run starting");

    let child = match launcher::spawn(&config.executable) {
        Ok(child) => child,
        Err(LaunchError::NotFound { path }) => {
            sink.emit(ServerEvent::console(format!(
                "Error: Could not find executable '{}'. Did you compile?",
                path.display()
            )));
            return;
        }
        Err(e) => {
            error!(error = %e, "failed to launch scheduler executable");
            return;
        }
    };

    // Keep the child handle alive while its stdout is consumed.
    let launcher::ScheduledChild { process, stdout } = child;

    let delay = Duration::from_millis(config.line_delay_ms);
    match relay_lines(stdout, sink, delay).await {
        Ok(lines) => {
            info!(lines, "child output stream ended");
            sink.emit(ServerEvent::SimulationEnd {
                msg: END_MESSAGE.to_owned(),
            });
        }
        Err(e) => {
            // No completion event: the run stalls from the client's
            // point of view, matching the unhandled-fault behavior.
            error!(error = %e, "error reading child output, run abandoned");
        }
    }

    drop(process);
}

/// Relay every line from `reader` into `sink`, pacing with `line_delay`.
///
/// For each line: trim, emit one `console_log`, then emit one
/// `thread_update` when the classifier matches. Returns the number of
/// lines relayed so the caller can log it.
///
/// # Errors
///
/// Propagates the underlying read error; the caller decides whether a
/// completion event is still owed (it is not).
pub async fn relay_lines<R, S>(
    reader: R,
    sink: &S,
    line_delay: Duration,
) -> io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    S: EventSink,
{
    let mut lines = reader.lines();
    let mut count: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        debug!(line = text, "child output");

        sink.emit(ServerEvent::console(text));

        if let Some(update) = classifier::classify(text) {
            sink.emit(ServerEvent::ThreadUpdate(update));
        }

        count = count.saturating_add(1);

        if !line_delay.is_zero() {
            tokio::time::sleep(line_delay).await;
        }
    }

    Ok(count)
}
