//! Dispatch of maintenance commands to the project's npm scripts
//!
//! Each command maps to a single `npm run` invocation with inherited stdio,
//! except "clean all" which runs the four clean scripts strictly in sequence
//! and aborts on the first failure.

use super::runner::{CommandRunner, CommandSpec};
use super::ProgressSink;
use crate::descriptor::{CleanTarget, ExecutionResult};
use anyhow::Result;

/// Sub-operations of "clean all", in execution order
const CLEAN_ALL_SEQUENCE: [CleanTarget; 4] = [
    CleanTarget::Android,
    CleanTarget::Ios,
    CleanTarget::NodeModules,
    CleanTarget::Watchman,
];

/// Run a clean command. For [`CleanTarget::All`] the four sub-cleans run in
/// order with a progress report before each; a sub-clean failure aborts the
/// remainder and fails the whole command.
pub async fn run_clean<R: CommandRunner>(
    runner: &R,
    target: CleanTarget,
    sink: &mut dyn ProgressSink,
) -> ExecutionResult {
    match clean_inner(runner, target, sink).await {
        Ok(output) => ExecutionResult::success(output),
        Err(e) => ExecutionResult::failure(format!("Error: {e:#}")),
    }
}

async fn clean_inner<R: CommandRunner>(
    runner: &R,
    target: CleanTarget,
    sink: &mut dyn ProgressSink,
) -> Result<String> {
    if target == CleanTarget::All {
        let total = CLEAN_ALL_SEQUENCE.len();
        for (index, sub) in CLEAN_ALL_SEQUENCE.iter().enumerate() {
            sink.report(index, total, &format!("Cleaning {}...", sub.label()));
            run_npm_script(runner, sub.script()).await?;
        }
        sink.report(total, total, "All cleaned!");
        return Ok(format!("{} successfully!", CleanTarget::All.clean_message()));
    }

    run_npm_script(runner, target.script()).await?;
    Ok(target.clean_message().to_string())
}

/// Run a single npm script with inherited stdio (pod-install, android, and
/// the individual clean scripts)
pub async fn run_script<R: CommandRunner>(runner: &R, script: &str) -> ExecutionResult {
    match run_npm_script(runner, script).await {
        Ok(()) => ExecutionResult::success("Command completed successfully!"),
        Err(e) => ExecutionResult::failure(format!("Error: {e:#}")),
    }
}

async fn run_npm_script<R: CommandRunner>(runner: &R, script: &str) -> Result<()> {
    runner
        .run(&CommandSpec::new("npm", ["run", script]).inherit_io())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::{FakeRunner, RecordingSink};

    #[tokio::test]
    async fn test_single_clean_reports_clean_message() {
        let runner = FakeRunner::new();
        let mut sink = RecordingSink::default();

        let result = run_clean(&runner, CleanTarget::Android, &mut sink).await;

        assert!(result.succeeded);
        assert_eq!(result.output, "Android build folder cleaned");
        assert_eq!(runner.rendered_calls(), ["npm run clean-android"]);
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn test_clean_all_runs_four_scripts_in_order() {
        let runner = FakeRunner::new();
        let mut sink = RecordingSink::default();

        let result = run_clean(&runner, CleanTarget::All, &mut sink).await;

        assert!(result.succeeded);
        assert_eq!(
            runner.rendered_calls(),
            [
                "npm run clean-android",
                "npm run clean-ios",
                "npm run clean-node",
                "npm run clean-watch",
            ]
        );
        assert_eq!(sink.events.len(), 5);
        assert_eq!(sink.events[0], (0, 4, "Cleaning Android...".to_string()));
        assert_eq!(sink.events[4], (4, 4, "All cleaned!".to_string()));
    }

    #[tokio::test]
    async fn test_clean_all_aborts_on_sub_failure() {
        let runner = FakeRunner::failing_on("clean-ios");
        let mut sink = RecordingSink::default();

        let result = run_clean(&runner, CleanTarget::All, &mut sink).await;

        assert!(!result.succeeded);
        assert!(result.output.starts_with("Error: "));
        // android and ios were attempted; node and watchman never ran
        assert_eq!(
            runner.rendered_calls(),
            ["npm run clean-android", "npm run clean-ios"]
        );
        assert_eq!(sink.events.len(), 2);
    }

    #[tokio::test]
    async fn test_script_failure_is_marked() {
        let runner = FakeRunner::failing_on("pod-install");
        let result = run_script(&runner, "pod-install").await;
        assert!(!result.succeeded);
        assert!(result.output.starts_with("Error: "));
    }
}
