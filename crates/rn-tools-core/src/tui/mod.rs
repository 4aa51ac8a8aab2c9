//! CLI prompts and terminal reporting using cliclack (Charm-style inline
//! prompts)
//!
//! This module is optional and only available when the `tui` feature is
//! enabled.

mod prompts;
mod report;

pub use prompts::{collect_descriptor, PromptError, Prompter};
pub use report::{render_bar, StepReporter};

use crate::descriptor::{CommandDescriptor, ExecutionResult};
use crate::exec::{dispatch, ProcessRunner, ScaffoldExecutor};
use crate::template::resolve_template_dir;
use anyhow::Result;
use std::path::PathBuf;

/// Arguments for a full interactive run
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Template directory override (falls back to env var, then cwd)
    pub template_dir: Option<PathBuf>,
}

/// Run the interactive CLI: collect a descriptor, execute it, render the
/// result. User cancellation ends the run gracefully (exit code 0); only
/// pre-prompt failures propagate as errors.
pub async fn run(args: RunArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("React Native CLI")?;

    let mut prompter = prompts::CliclackPrompter;
    let descriptor = match collect_descriptor(&mut prompter) {
        Ok(descriptor) => descriptor,
        Err(PromptError::Cancelled) => {
            cliclack::outro_cancel("Cancelled by user")?;
            return Ok(());
        }
        Err(PromptError::Io(e)) => return Err(e.into()),
    };

    let runner = ProcessRunner;
    let mut reporter = report::StepReporter::new();

    let result = match &descriptor {
        CommandDescriptor::Scaffold(params) => {
            let template_dir = resolve_template_dir(args.template_dir);
            ScaffoldExecutor::new(ProcessRunner, template_dir)
                .run(params, &mut reporter)
                .await
        }
        CommandDescriptor::Clean(target) => {
            dispatch::run_clean(&runner, *target, &mut reporter).await
        }
        CommandDescriptor::PodInstall => dispatch::run_script(&runner, "pod-install").await,
        CommandDescriptor::RunAndroid => dispatch::run_script(&runner, "android").await,
        CommandDescriptor::Version => ExecutionResult::success(version_text(cli_version)),
        CommandDescriptor::Help => ExecutionResult::success(help_text()),
    };

    report::print_result(&descriptor, &result)?;
    Ok(())
}

fn version_text(cli_version: &str) -> String {
    format!(
        "React Native CLI Wrapper\n\
         Version: {cli_version}\n\
         React Native: {}\n\n\
         Run 'rn-tools --help' for more information.",
        crate::RN_VERSION
    )
}

fn help_text() -> String {
    "Available Commands:\n\n\
     scaffold    - Create new React Native project from template\n\
     clean       - Clean caches and build folders\n\
       Android   - Clean Android build folder\n\
       iOS       - Clean iOS build folder\n\
       Node Mods - Remove node_modules\n\
       Watchman  - Clear Watchman cache\n\
       All       - Clean everything\n\
     pod-install - Install CocoaPods dependencies\n\
     run-android - Run app on Android device/emulator\n\n\
     Examples:\n\
       rn-tools           # Interactive mode\n\
       rn-tools --help"
        .to_string()
}
