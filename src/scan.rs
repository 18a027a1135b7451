//! Directory scanning with deterministic ordering.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::model::ExtraKind;

/// Skill definition file name.
pub const SKILL_FILE: &str = "SKILL.md";

/// Names never reported as skill extras.
const IGNORED_EXTRAS: &[&str] = &[SKILL_FILE, ".DS_Store"];

/// Sorted names of the regular files in `dir` accepted by `keep`.
pub fn list_files(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if keep(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Sorted names of the immediate subdirectories of `dir`.
pub fn list_dirs(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// An entry found by [`ExtrasWalk`], relative to the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// `/`-separated relative path; directories carry a trailing `/`
    pub path: String,
    pub kind: ExtraKind,
}

/// Depth-limited walk over a skill directory.
///
/// Yields entries in sorted order, parents before children. Directories at
/// `max_depth` are reported but not descended into. Unreadable directories
/// are skipped with a warning.
pub struct ExtrasWalk {
    max_depth: usize,
    // (absolute dir, relative prefix, depth of its entries)
    pending: Vec<(PathBuf, String, usize)>,
    buffered: std::vec::IntoIter<WalkEntry>,
}

impl ExtrasWalk {
    pub fn new(root: &Path, max_depth: usize) -> Self {
        let pending = if max_depth == 0 {
            Vec::new()
        } else {
            vec![(root.to_path_buf(), String::new(), 1)]
        };
        Self {
            max_depth,
            pending,
            buffered: Vec::new().into_iter(),
        }
    }

    fn read_level(&mut self, dir: &Path, prefix: &str, depth: usize) -> Vec<WalkEntry> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("skipping unreadable directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut children: Vec<(String, bool)> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if IGNORED_EXTRAS.contains(&name.as_str()) {
                    return None;
                }
                Some((name, entry.path().is_dir()))
            })
            .collect();
        children.sort();

        let mut level = Vec::with_capacity(children.len());
        let mut subdirs = Vec::new();
        for (name, is_dir) in children {
            let rel = format!("{}{}", prefix, name);
            if is_dir {
                level.push(WalkEntry {
                    path: format!("{}/", rel),
                    kind: ExtraKind::Dir,
                });
                if depth < self.max_depth {
                    subdirs.push((dir.join(&name), format!("{}/", rel), depth + 1));
                }
            } else {
                level.push(WalkEntry {
                    path: rel,
                    kind: ExtraKind::File,
                });
            }
        }
        // Reverse so the first subdirectory is popped first
        self.pending.extend(subdirs.into_iter().rev());
        level
    }
}

impl Iterator for ExtrasWalk {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            if let Some(entry) = self.buffered.next() {
                return Some(entry);
            }
            let (dir, prefix, depth) = self.pending.pop()?;
            self.buffered = self.read_level(&dir, &prefix, depth).into_iter();
        }
    }
}

/// Reduce walk output to one entry per top-level name.
///
/// Anything below a top-level directory is folded into a single `name/`
/// directory entry at the position of its first occurrence.
pub fn collapse_top_level(entries: impl IntoIterator<Item = WalkEntry>) -> Vec<WalkEntry> {
    let mut seen_dirs = HashSet::new();
    let mut top_level = Vec::new();
    for entry in entries {
        match entry.path.split_once('/') {
            Some((top, _)) => {
                if seen_dirs.insert(top.to_string()) {
                    top_level.push(WalkEntry {
                        path: format!("{}/", top),
                        kind: ExtraKind::Dir,
                    });
                }
            }
            None => top_level.push(entry),
        }
    }
    top_level
}
