//! External process invocation
//!
//! Every external collaborator (project generator, package manager, git, npm
//! scripts) is reached through the [`CommandRunner`] trait so orchestration
//! can be exercised in tests without spawning processes.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Stream the child's stdio straight to the terminal instead of capturing
    pub inherit_io: bool,
}

impl CommandSpec {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            inherit_io: false,
        }
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn inherit_io(mut self) -> Self {
        self.inherit_io = true;
        self
    }

    /// Rendered form for error messages and logs
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Captured output of a completed command (empty when stdio was inherited)
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
}

/// Seam for invoking external processes
pub trait CommandRunner {
    /// Run the command to completion; an unsuccessful exit status is an error
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> impl std::future::Future<Output = Result<CommandOutput>> + Send;
}

/// Production runner backed by `tokio::process`
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        if spec.inherit_io {
            let status = cmd
                .status()
                .await
                .with_context(|| format!("Failed to start `{}`", spec.display()))?;
            if !status.success() {
                anyhow::bail!("`{}` exited with {}", spec.display(), status);
            }
            Ok(CommandOutput::default())
        } else {
            let output = cmd
                .output()
                .await
                .with_context(|| format!("Failed to start `{}`", spec.display()))?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                anyhow::bail!(
                    "`{}` exited with {}: {}",
                    spec.display(),
                    output.status,
                    stderr.trim()
                );
            }
            Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            })
        }
    }
}
