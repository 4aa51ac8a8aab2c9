//! The scaffold step sequence
//!
//! Generates a base project with the community CLI, replaces the generator's
//! defaults with the template's files, merges the manifests, makes an initial
//! commit and optionally installs dependencies. Steps run strictly in order;
//! a failing step aborts the remainder. Nothing is rolled back on failure -
//! files created before the failing step stay on disk.

use super::runner::{CommandRunner, CommandSpec};
use super::ProgressSink;
use crate::descriptor::{ExecutionResult, ScaffoldParams};
use crate::manifest::{self, AppManifest, PackageManifest};
use crate::template::{self, DEFAULT_ARTIFACTS, TEMPLATE_ENTRIES};
use anyhow::Result;
use std::path::PathBuf;

/// Base steps: generate, clean defaults, copy template, merge manifests,
/// configure git
const BASE_STEPS: usize = 5;

/// Total step count for a scaffold run; computed once so the progress bar
/// denominator is stable
pub fn total_steps(params: &ScaffoldParams, host_is_macos: bool) -> usize {
    BASE_STEPS
        + usize::from(params.install_deps)
        + usize::from(params.install_deps && params.pod_install && host_is_macos)
}

/// Runs the ordered scaffold steps against a [`CommandRunner`]
pub struct ScaffoldExecutor<R> {
    runner: R,
    template_dir: PathBuf,
    host_is_macos: bool,
}

impl<R: CommandRunner> ScaffoldExecutor<R> {
    pub fn new(runner: R, template_dir: PathBuf) -> Self {
        Self {
            runner,
            template_dir,
            host_is_macos: cfg!(target_os = "macos"),
        }
    }

    /// Execute the full sequence, reporting before each step. All failures
    /// are converted into an [`ExecutionResult`]; nothing propagates.
    pub async fn run(
        &self,
        params: &ScaffoldParams,
        sink: &mut dyn ProgressSink,
    ) -> ExecutionResult {
        match self.run_inner(params, sink).await {
            Ok(output) => ExecutionResult::success(output),
            Err(e) => ExecutionResult::failure(format!("{e:#}")),
        }
    }

    async fn run_inner(
        &self,
        params: &ScaffoldParams,
        sink: &mut dyn ProgressSink,
    ) -> Result<String> {
        let total = total_steps(params, self.host_is_macos);
        let project_dir = &params.directory;
        let mut step = 0;

        sink.report(step, total, "Initializing React Native project...");
        step += 1;
        let dir_arg = project_dir.display().to_string();
        self.runner
            .run(
                &CommandSpec::new(
                    "npx",
                    [
                        "@react-native-community/cli",
                        "init",
                        params.project_name.as_str(),
                        "--directory",
                        dir_arg.as_str(),
                        "--package-name",
                        params.bundle_id.as_str(),
                        "--skip-install",
                    ],
                )
                .inherit_io(),
            )
            .await?;

        sink.report(step, total, "Cleaning up default files...");
        step += 1;
        template::remove_entries(project_dir, DEFAULT_ARTIFACTS).await?;

        sink.report(step, total, "Copying template files...");
        step += 1;
        template::copy_entries(&self.template_dir, project_dir, TEMPLATE_ENTRIES).await?;

        sink.report(step, total, "Merging package.json...");
        step += 1;
        self.merge_manifests(params).await?;

        sink.report(step, total, "Configuring git...");
        step += 1;
        // Non-fatal: offline or no-git environments must not block scaffolding
        let git_warning = match self.configure_git(project_dir).await {
            Ok(()) => None,
            Err(e) => Some(format!("Warning: git setup skipped ({e:#})")),
        };

        if params.install_deps {
            let pm = params.package_manager;
            sink.report(
                step,
                total,
                &format!("Installing dependencies ({})...", pm.name()),
            );
            step += 1;
            let (program, args) = pm.install_invocation();
            self.runner
                .run(
                    &CommandSpec::new(program, args.iter().copied())
                        .current_dir(project_dir)
                        .inherit_io(),
                )
                .await?;

            if params.pod_install && self.host_is_macos {
                sink.report(step, total, "Running pod install...");
                self.runner
                    .run(
                        &CommandSpec::new("npm", ["run", "pod-install"])
                            .current_dir(project_dir)
                            .inherit_io(),
                    )
                    .await?;
            }
        }

        Ok(summary(params, git_warning))
    }

    async fn merge_manifests(&self, params: &ScaffoldParams) -> Result<()> {
        let template_manifest: PackageManifest =
            manifest::read_manifest(&self.template_dir.join("package.json")).await?;

        let package_path = params.directory.join("package.json");
        let generated: PackageManifest = manifest::read_manifest(&package_path).await?;
        let merged =
            manifest::merge_package_manifests(&template_manifest, generated, &params.project_name);
        manifest::write_manifest(&package_path, &merged).await?;

        let app_path = params.directory.join("app.json");
        let mut app: AppManifest = manifest::read_manifest(&app_path).await?;
        manifest::patch_app_manifest(&mut app, &params.project_name);
        manifest::write_manifest(&app_path, &app).await
    }

    async fn configure_git(&self, project_dir: &PathBuf) -> Result<()> {
        self.runner
            .run(&CommandSpec::new("git", ["add", "."]).current_dir(project_dir))
            .await?;
        self.runner
            .run(
                &CommandSpec::new("git", ["commit", "-m", "chore: apply template"])
                    .current_dir(project_dir),
            )
            .await?;
        Ok(())
    }
}

fn summary(params: &ScaffoldParams, git_warning: Option<String>) -> String {
    let pm = params.package_manager;
    let mut lines = vec![
        "Setup complete!".to_string(),
        String::new(),
        format!("Project location: {}", params.directory.display()),
        format!("Project name: {}", params.project_name),
        format!("Package manager: {}", pm.name()),
        String::new(),
        "Next steps:".to_string(),
        format!("  cd {}", params.directory.display()),
        format!("  {}   # Start Metro bundler", pm.run_script("start")),
        format!("  {}     # Run on iOS", pm.run_script("ios")),
        format!("  {} # Run on Android", pm.run_script("android")),
    ];
    if let Some(warning) = git_warning {
        lines.push(String::new());
        lines.push(warning);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PackageManager;
    use crate::exec::testing::{FakeRunner, RecordingSink};
    use serde_json::json;
    use std::path::Path;

    fn params(dir: &Path, install_deps: bool, pod_install: bool) -> ScaffoldParams {
        ScaffoldParams {
            project_name: "MyApp".to_string(),
            bundle_id: "com.company.myapp".to_string(),
            directory: dir.to_path_buf(),
            package_manager: PackageManager::Bun,
            install_deps,
            pod_install,
        }
    }

    /// Seed a directory the way the project generator would have left it
    fn seed_generated_project(dir: &Path) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(
            dir.join("package.json"),
            json!({"name": "myapp", "version": "0.0.1", "dependencies": {}, "scripts": {}})
                .to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.join("app.json"),
            json!({"name": "myapp", "displayName": "myapp"}).to_string(),
        )
        .unwrap();
    }

    fn seed_template(dir: &Path) {
        std::fs::write(
            dir.join("package.json"),
            json!({
                "name": "template",
                "version": "1.0.0",
                "dependencies": {"a": "1"},
                "devDependencies": {"b": "2"},
                "scripts": {"start": "x"}
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(dir.join("index.js"), "app").unwrap();
    }

    #[test]
    fn test_total_steps_formula() {
        let tmp = tempfile::tempdir().unwrap();
        let base = params(tmp.path(), false, false);
        assert_eq!(total_steps(&base, true), 5);

        let with_install = params(tmp.path(), true, false);
        assert_eq!(total_steps(&with_install, true), 6);

        let with_pods = params(tmp.path(), true, true);
        assert_eq!(total_steps(&with_pods, true), 7);
        assert_eq!(total_steps(&with_pods, false), 6);

        // pod install without the dependency install never adds a step
        let pods_only = params(tmp.path(), false, true);
        assert_eq!(total_steps(&pods_only, true), 5);
    }

    #[tokio::test]
    async fn test_successful_scaffold_invokes_steps_in_order() {
        let template = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("MyApp");
        seed_template(template.path());
        seed_generated_project(&project);

        let mut executor =
            ScaffoldExecutor::new(FakeRunner::new(), template.path().to_path_buf());
        executor.host_is_macos = true;
        let mut sink = RecordingSink::default();

        let result = executor.run(&params(&project, true, true), &mut sink).await;

        assert!(result.succeeded, "{}", result.output);
        assert!(result.output.contains("Setup complete!"));
        assert!(result.output.contains("bun run start"));
        assert!(!result.output.contains("Warning"));

        let calls = executor.runner.rendered_calls();
        assert!(calls[0].starts_with("npx @react-native-community/cli init MyApp"));
        assert!(calls[0].ends_with("--skip-install"));
        assert_eq!(calls[1], "git add .");
        assert_eq!(calls[2], "git commit -m chore: apply template");
        assert_eq!(calls[3], "bun install");
        assert_eq!(calls[4], "npm run pod-install");

        let labels: Vec<&str> = sink.events.iter().map(|(_, _, l)| l.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Initializing React Native project...",
                "Cleaning up default files...",
                "Copying template files...",
                "Merging package.json...",
                "Configuring git...",
                "Installing dependencies (bun)...",
                "Running pod install...",
            ]
        );
        assert!(sink.events.iter().all(|(_, total, _)| *total == 7));
        assert_eq!(sink.events.last().unwrap().0, 6);

        // template files landed and the manifests were merged
        assert!(project.join("index.js").exists());
        let merged: PackageManifest =
            serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(merged.name, "myapp");
        assert_eq!(merged.version, "1.0.0");
        let app: AppManifest =
            serde_json::from_str(&std::fs::read_to_string(project.join("app.json")).unwrap())
                .unwrap();
        assert_eq!(app.display_name, "MyApp");
    }

    #[tokio::test]
    async fn test_copy_failure_halts_remaining_steps() {
        let template = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        seed_template(template.path());
        // target exists as a file, so creating the project directory fails
        let project = tmp.path().join("MyApp");
        std::fs::write(&project, "in the way").unwrap();

        let mut executor =
            ScaffoldExecutor::new(FakeRunner::new(), template.path().to_path_buf());
        executor.host_is_macos = true;
        let mut sink = RecordingSink::default();

        let result = executor.run(&params(&project, true, true), &mut sink).await;

        assert!(!result.succeeded);
        // only the generator ran; git, install and pod install never did
        let calls = executor.runner.rendered_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("npx"));
        assert_eq!(
            sink.events.last().unwrap().2,
            "Copying template files..."
        );
    }

    #[tokio::test]
    async fn test_git_failure_is_swallowed_with_warning() {
        let template = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("MyApp");
        seed_template(template.path());
        seed_generated_project(&project);

        let mut executor =
            ScaffoldExecutor::new(FakeRunner::failing_on("git"), template.path().to_path_buf());
        executor.host_is_macos = false;
        let mut sink = RecordingSink::default();

        let result = executor.run(&params(&project, false, false), &mut sink).await;

        assert!(result.succeeded, "{}", result.output);
        assert!(result.output.contains("Warning: git setup skipped"));
        assert_eq!(sink.events.len(), 5);
        assert!(sink.events.iter().all(|(_, total, _)| *total == 5));
    }

    #[tokio::test]
    async fn test_install_failure_fails_the_run() {
        let template = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("MyApp");
        seed_template(template.path());
        seed_generated_project(&project);

        let mut executor = ScaffoldExecutor::new(
            FakeRunner::failing_on("bun install"),
            template.path().to_path_buf(),
        );
        executor.host_is_macos = true;
        let mut sink = RecordingSink::default();

        let result = executor.run(&params(&project, true, true), &mut sink).await;

        assert!(!result.succeeded);
        assert!(result.output.contains("bun install"));
        // pod install never ran
        assert!(!executor
            .runner
            .rendered_calls()
            .iter()
            .any(|c| c.contains("pod-install")));
    }
}
