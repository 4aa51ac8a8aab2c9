//! Interactive prompt collector
//!
//! Drives a fixed sequence of single-question prompts and produces a
//! [`CommandDescriptor`]. The collector is generic over [`Prompter`] so the
//! flow (notably the restart-on-declined-destructive-clean rule) can be
//! exercised with a scripted prompter in tests; the production prompter
//! wraps cliclack.

use crate::descriptor::{CleanTarget, CommandDescriptor, PackageManager, ScaffoldParams};
use crate::validate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Prompt-level failure; cancellation is graceful, not an error condition
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Field validator applied by the prompter; the same field is re-asked until
/// it passes
pub type Validator = fn(&str) -> Result<(), String>;

/// One choice in a select menu
pub struct SelectItem<'a> {
    pub label: &'a str,
    pub hint: &'a str,
}

/// Primitive prompt operations the collector is written against
pub trait Prompter {
    /// Select one of `items`; returns the chosen index
    fn select(
        &mut self,
        message: &str,
        items: &[SelectItem<'_>],
        initial: usize,
    ) -> Result<usize, PromptError>;

    /// Free-text input with a default and a validator
    fn input(
        &mut self,
        message: &str,
        default: &str,
        validate: Validator,
    ) -> Result<String, PromptError>;

    /// Yes/no confirmation
    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool, PromptError>;
}

/// Collect a fully-resolved command descriptor.
///
/// Declining the confirmation for a destructive clean target restarts the
/// sequence from the top-level command menu; the loop keeps stack depth
/// bounded under repeated declines.
pub fn collect_descriptor<P: Prompter>(prompter: &mut P) -> Result<CommandDescriptor, PromptError> {
    loop {
        let command = prompter.select(
            "Select a command:",
            &[
                SelectItem {
                    label: "New project",
                    hint: "Create new project from template",
                },
                SelectItem {
                    label: "Clean",
                    hint: "Clean caches and build folders",
                },
                SelectItem {
                    label: "Pod Install",
                    hint: "Install CocoaPods dependencies",
                },
                SelectItem {
                    label: "Run Android",
                    hint: "Run app on Android device/emulator",
                },
                SelectItem {
                    label: "Version",
                    hint: "Show CLI version and info",
                },
                SelectItem {
                    label: "Help",
                    hint: "Show available commands",
                },
            ],
            0,
        )?;

        match command {
            0 => return Ok(CommandDescriptor::Scaffold(collect_scaffold(prompter)?)),
            1 => match collect_clean(prompter)? {
                Some(target) => return Ok(CommandDescriptor::Clean(target)),
                None => continue, // destructive clean declined, start over
            },
            2 => return Ok(CommandDescriptor::PodInstall),
            3 => return Ok(CommandDescriptor::RunAndroid),
            4 => return Ok(CommandDescriptor::Version),
            _ => return Ok(CommandDescriptor::Help),
        }
    }
}

fn collect_scaffold<P: Prompter>(prompter: &mut P) -> Result<ScaffoldParams, PromptError> {
    let project_name = prompter.input(
        "What is the name of your project?",
        "MyApp",
        validate::validate_project_name,
    )?;

    let default_bundle = format!("com.company.{}", project_name.to_lowercase());
    let bundle_id = prompter.input(
        "What is the bundle identifier?",
        &default_bundle,
        validate::validate_bundle_id,
    )?;

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let default_dir = current_dir.join(&project_name);
    let directory = prompter.input(
        "Where should the project be created?",
        &default_dir.display().to_string(),
        validate::validate_target_directory,
    )?;

    let pm_items: Vec<SelectItem<'_>> = PackageManager::ALL
        .iter()
        .map(|pm| SelectItem {
            label: pm.display_name(),
            hint: "",
        })
        .collect();
    let pm_index = prompter.select(
        "Which package manager do you want to use?",
        &pm_items,
        PackageManager::ALL.len() - 1,
    )?;
    let package_manager = PackageManager::ALL[pm_index];

    let install_deps = prompter.confirm("Do you want to install dependencies after setup?", true)?;
    let pod_install =
        prompter.confirm("Do you want to run pod install for iOS? (macOS only)", true)?;

    Ok(ScaffoldParams {
        project_name,
        bundle_id,
        directory: PathBuf::from(directory),
        package_manager,
        install_deps,
        pod_install,
    })
}

/// Returns `None` when a destructive target was declined, signalling a
/// restart of the top-level menu
fn collect_clean<P: Prompter>(prompter: &mut P) -> Result<Option<CleanTarget>, PromptError> {
    let items: Vec<SelectItem<'_>> = CleanTarget::ALL_TARGETS
        .iter()
        .map(|target| SelectItem {
            label: target.label(),
            hint: if target.is_destructive() {
                "destructive"
            } else {
                ""
            },
        })
        .collect();

    let index = prompter.select("What do you want to clean?", &items, 0)?;
    let target = CleanTarget::ALL_TARGETS[index];

    if target.is_destructive() {
        let what = if target == CleanTarget::All {
            "all caches".to_string()
        } else {
            target.label().to_string()
        };
        let confirmed = prompter.confirm(&format!("This will delete {what}. Are you sure?"), false)?;
        if !confirmed {
            return Ok(None);
        }
    }

    Ok(Some(target))
}

/// Production prompter backed by cliclack
pub struct CliclackPrompter;

/// cliclack reports Esc/Ctrl-C inside a prompt as an Interrupted I/O error
fn map_prompt_err(e: io::Error) -> PromptError {
    if e.kind() == io::ErrorKind::Interrupted {
        PromptError::Cancelled
    } else {
        PromptError::Io(e)
    }
}

impl Prompter for CliclackPrompter {
    fn select(
        &mut self,
        message: &str,
        items: &[SelectItem<'_>],
        initial: usize,
    ) -> Result<usize, PromptError> {
        let mut select = cliclack::select(message);
        for (idx, item) in items.iter().enumerate() {
            select = select.item(idx, item.label, item.hint);
        }
        select.initial_value(initial).interact().map_err(map_prompt_err)
    }

    fn input(
        &mut self,
        message: &str,
        default: &str,
        validate: Validator,
    ) -> Result<String, PromptError> {
        cliclack::input(message)
            .placeholder(default)
            .default_input(default)
            .validate(move |value: &String| validate(value))
            .interact()
            .map_err(map_prompt_err)
    }

    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool, PromptError> {
        cliclack::confirm(message)
            .initial_value(initial)
            .interact()
            .map_err(map_prompt_err)
    }
}
