//! Command execution: external process invocation, the scaffold step
//! sequence, and dispatch of maintenance commands
//!
//! Progress is reported through an explicit [`ProgressSink`] passed in by the
//! caller; the executor and dispatcher own no terminal state of their own.

pub mod dispatch;
pub mod runner;
pub mod scaffold;

pub use dispatch::{run_clean, run_script};
pub use runner::{CommandOutput, CommandRunner, CommandSpec, ProcessRunner};
pub use scaffold::{total_steps, ScaffoldExecutor};

/// Step-level progress reporting seam between executors and the terminal view
pub trait ProgressSink {
    /// Called before each step with the zero-based step index, the stable
    /// total step count, and a human-readable label
    fn report(&mut self, step_index: usize, total_steps: usize, label: &str);
}

/// Sink that drops all progress events
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&mut self, _step_index: usize, _total_steps: usize, _label: &str) {}
}
