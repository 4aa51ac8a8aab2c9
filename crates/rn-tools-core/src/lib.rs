//! RN Tools Core - Shared library for the React Native scaffolding CLI
//!
//! This library provides the core functionality for scaffolding React Native
//! projects from the bundled template and for dispatching maintenance commands
//! (clean, pod install, run on Android) to the project's npm scripts.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Validators, manifest merging, template
//!   file copying, external process invocation
//! - **Layer 2: Workflow Orchestration** - `ScaffoldExecutor` and the command
//!   dispatcher, reporting through a caller-supplied `ProgressSink`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts and the
//!   terminal progress/result reporter (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt and report modules
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rn_tools_core::{exec, ScaffoldParams};
//!
//! let executor = exec::ScaffoldExecutor::new(exec::ProcessRunner, template_dir);
//! let result = executor.run(&params, &mut sink).await;
//! ```

pub mod descriptor;
pub mod exec;
pub mod manifest;
pub mod template;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use descriptor::{
    CleanTarget, CommandDescriptor, ExecutionResult, PackageManager, ScaffoldParams,
};
pub use exec::{
    total_steps, CommandRunner, CommandSpec, ProcessRunner, ProgressSink, ScaffoldExecutor,
};
pub use template::{resolve_template_dir, DEFAULT_ARTIFACTS, TEMPLATE_ENTRIES};

#[cfg(feature = "tui")]
pub use tui::{run, RunArgs};

/// CLI version fallback - binaries should pass their own CARGO_PKG_VERSION
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";

/// React Native version the bundled template is pinned to
pub const RN_VERSION: &str = "0.84.0";
