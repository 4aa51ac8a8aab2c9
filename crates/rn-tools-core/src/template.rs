//! Template file operations: locating the template, removing the generator's
//! default artifacts, and copying the template's file manifest

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "RN_TOOLS_TEMPLATE_DIR";

/// Files and directories copied from the template into a new project
pub const TEMPLATE_ENTRIES: &[&str] = &[
    ".opencode",
    "src",
    "AGENTS.md",
    "opencode.json",
    "tsconfig.json",
    "babel.config.js",
    ".prettierrc.js",
    ".eslintrc.js",
    ".watchmanconfig",
    ".gitignore",
    "Gemfile",
    "jest.config.js",
    "metro.config.js",
    "index.js",
    "App.tsx",
    "__tests__",
    "vendor",
    ".bundle",
];

/// Default artifacts the project generator leaves behind that the template
/// replaces
pub const DEFAULT_ARTIFACTS: &[&str] = &["App.tsx", "src", "__tests__"];

/// Resolve the template directory: explicit flag, then env var, then the
/// current working directory (the CLI normally runs from inside the template
/// checkout)
pub fn resolve_template_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        return PathBuf::from(dir);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Remove the listed entries from the target directory, skipping any that
/// do not exist
pub async fn remove_entries(target_dir: &Path, entries: &[&str]) -> Result<()> {
    for entry in entries {
        let path = target_dir.join(entry);
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => {
                fs::remove_dir_all(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
            Ok(_) => {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
            Err(_) => {} // Not present, nothing to do
        }
    }
    Ok(())
}

/// Copy the listed entries from the template directory into the target,
/// recursively for directories. Entries missing from the template are
/// skipped. Returns the entries actually copied.
pub async fn copy_entries(
    template_dir: &Path,
    target_dir: &Path,
    entries: &[&str],
) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut copied = Vec::new();

    for entry in entries {
        let src = template_dir.join(entry);
        let dest = target_dir.join(entry);

        match fs::metadata(&src).await {
            Ok(meta) if meta.is_dir() => {
                copy_dir_recursive(&src, &dest).await?;
                copied.push(entry.to_string());
            }
            Ok(_) => {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::copy(&src, &dest)
                    .await
                    .with_context(|| format!("Failed to copy {}", src.display()))?;
                copied.push(entry.to_string());
            }
            Err(_) => {} // Not in the template, skip
        }
    }

    Ok(copied)
}

async fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .await
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}
