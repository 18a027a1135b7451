//! The two generation pipelines.
//!
//! Each pipeline is split into a pure build step that reads the inputs and
//! renders every artifact in memory, and a write step. Nothing touches the
//! output tree until the build step has succeeded.

pub mod records;
pub mod skills;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read an input document as text.
///
/// Invalid UTF-8 is replaced with U+FFFD and reported; only I/O errors fail.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Write a generated artifact, creating its parent directory if needed.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(())
}
