//! package.json / app.json manifest types and merging
//!
//! The merge keeps the generated project's identity fields and any fields we
//! do not model, while version, dependency lists and scripts come from the
//! template. Unknown fields survive round-trips via `#[serde(flatten)]`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// The subset of package.json the merge cares about; everything else is
/// carried through untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub dependencies: Map<String, Value>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,

    #[serde(default)]
    pub scripts: Map<String, Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// app.json display identity; unknown fields carried through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppManifest {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "displayName")]
    pub display_name: String,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Merge the template manifest over the generated project's manifest.
///
/// The name stays derived from the project (lowercased, `-` folded to `_`);
/// version, dependencies, devDependencies and scripts are the template's.
pub fn merge_package_manifests(
    template: &PackageManifest,
    generated: PackageManifest,
    project_name: &str,
) -> PackageManifest {
    PackageManifest {
        name: project_name.to_lowercase().replace('-', "_"),
        version: template.version.clone(),
        dependencies: template.dependencies.clone(),
        dev_dependencies: template.dev_dependencies.clone(),
        scripts: template.scripts.clone(),
        rest: generated.rest,
    }
}

/// Set the app manifest's display identity to the project name
pub fn patch_app_manifest(app: &mut AppManifest, project_name: &str) {
    app.name = project_name.to_string();
    app.display_name = project_name.to_string();
}

/// Read and parse a JSON manifest
pub async fn read_manifest<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a manifest as pretty-printed JSON with a trailing newline
pub async fn write_manifest<T: Serialize>(path: &Path, manifest: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(manifest)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    content.push('\n');
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
