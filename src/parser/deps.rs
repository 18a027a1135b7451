//! `deps.json` sidecar parsing.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Sidecar file name inside a skill directory.
pub const DEPS_FILE: &str = "deps.json";

#[derive(Debug, Deserialize)]
struct DepsFile {
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

/// Dependency names declared in `deps.json`, in declaration order.
pub fn parse(content: &str) -> serde_json::Result<Vec<String>> {
    let file: DepsFile = serde_json::from_str(content)?;
    Ok(file.dependencies.into_iter().map(|d| d.name).collect())
}

/// Read the sidecar of a skill directory.
///
/// A missing, unreadable, or malformed file yields an empty list.
pub fn read(skill_dir: &Path) -> Vec<String> {
    let path = skill_dir.join(DEPS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("ignoring unreadable {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    parse(&content).unwrap_or_else(|e| {
        warn!("ignoring malformed {}: {}", path.display(), e);
        Vec::new()
    })
}
