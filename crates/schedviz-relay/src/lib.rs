//! Relay pipeline for the schedviz harness.
//!
//! This crate owns everything between the external scheduler executable
//! and the broadcast channel:
//!
//! - [`launcher`] spawns the pre-compiled executable and exposes its
//!   stdout as a line-buffered reader
//! - [`classifier`] maps one output line to zero-or-one structured
//!   [`ThreadUpdate`](schedviz_types::ThreadUpdate)
//! - [`runner`] drives a full run: launch, relay each line, pace
//!   delivery, and emit the completion event
//! - [`sink`] defines the injected [`EventSink`] seam so the pipeline
//!   can be tested without a live `WebSocket` layer
//!
//! There is no scheduler here. The child process is the simulation; this
//! crate only relays its text output.

pub mod classifier;
pub mod config;
pub mod launcher;
pub mod runner;
pub mod sink;

// Re-export primary types for convenience.
pub use classifier::classify;
pub use config::RelayConfig;
pub use launcher::{LaunchError, ScheduledChild};
pub use runner::{relay_lines, run_simulation};
pub use sink::EventSink;
