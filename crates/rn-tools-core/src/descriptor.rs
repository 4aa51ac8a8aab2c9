//! Resolved command descriptors produced by the prompt collector
//!
//! The descriptor is the fully-resolved set of parameters collected from the
//! user before any external action is taken. Encoding it as an enum makes the
//! "params present iff the matching command was chosen" rule structural.

use std::path::PathBuf;

/// A fully-resolved command, ready for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandDescriptor {
    Scaffold(ScaffoldParams),
    Clean(CleanTarget),
    PodInstall,
    RunAndroid,
    Version,
    Help,
}

impl CommandDescriptor {
    /// Human-readable label shown in the final report
    pub fn label(&self) -> String {
        match self {
            CommandDescriptor::Scaffold(params) => format!("Scaffold: {}", params.project_name),
            CommandDescriptor::Clean(target) => format!("Clean {}", target.label()),
            CommandDescriptor::PodInstall => "Pod Install".to_string(),
            CommandDescriptor::RunAndroid => "Run Android".to_string(),
            CommandDescriptor::Version => "Version Info".to_string(),
            CommandDescriptor::Help => "Help".to_string(),
        }
    }
}

/// Parameters for scaffolding a new project from the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldParams {
    /// Identifier-safe project name (letters and digits, leading letter)
    pub project_name: String,

    /// Reverse-domain bundle identifier (e.g. com.company.myapp)
    pub bundle_id: String,

    /// Target directory; must not pre-exist with contents
    pub directory: PathBuf,

    /// Package manager used for the optional install step
    pub package_manager: PackageManager,

    /// Run the package manager install after setup
    pub install_deps: bool,

    /// Run pod install after the dependency install (macOS hosts only)
    pub pod_install: bool,
}

/// Cache/artifact categories the clean command can remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanTarget {
    Android,
    Ios,
    NodeModules,
    Watchman,
    All,
}

impl CleanTarget {
    /// All targets, in menu order
    pub const ALL_TARGETS: [CleanTarget; 5] = [
        CleanTarget::Android,
        CleanTarget::Ios,
        CleanTarget::NodeModules,
        CleanTarget::Watchman,
        CleanTarget::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CleanTarget::Android => "Android",
            CleanTarget::Ios => "iOS",
            CleanTarget::NodeModules => "Node Modules",
            CleanTarget::Watchman => "Watchman",
            CleanTarget::All => "All",
        }
    }

    /// npm script in the project's package.json that performs the clean
    pub fn script(&self) -> &'static str {
        match self {
            CleanTarget::Android => "clean-android",
            CleanTarget::Ios => "clean-ios",
            CleanTarget::NodeModules => "clean-node",
            CleanTarget::Watchman => "clean-watch",
            CleanTarget::All => "clean-all",
        }
    }

    /// Removal cannot be undone; requires an explicit confirmation
    pub fn is_destructive(&self) -> bool {
        matches!(self, CleanTarget::NodeModules | CleanTarget::All)
    }

    /// Message shown when the clean finishes successfully
    pub fn clean_message(&self) -> &'static str {
        match self {
            CleanTarget::Android => "Android build folder cleaned",
            CleanTarget::Ios => "iOS build folder cleaned",
            CleanTarget::NodeModules => "Node modules removed",
            CleanTarget::Watchman => "Watchman cache cleared",
            CleanTarget::All => "All caches cleaned",
        }
    }
}

/// Supported package managers for the dependency install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// All managers, in menu order (Bun last, the default selection)
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Display name shown in the select menu
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "Yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "Bun",
        }
    }

    /// Program and arguments for the install invocation
    pub fn install_invocation(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm => ("npm", &["install"]),
            PackageManager::Yarn => ("yarn", &["install"]),
            PackageManager::Pnpm => ("pnpm", &["install"]),
            PackageManager::Bun => ("bun", &["install"]),
        }
    }

    /// How a package.json script is invoked with this manager
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {script}"),
            PackageManager::Yarn => format!("yarn {script}"),
            PackageManager::Pnpm => format!("pnpm {script}"),
            PackageManager::Bun => format!("bun run {script}"),
        }
    }
}

/// Terminal outcome of any command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub succeeded: bool,
    pub output: String,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            output: output.into(),
        }
    }
}
