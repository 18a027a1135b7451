//! Title and status extraction for numbered record documents.

use regex::Regex;
use std::sync::LazyLock;

/// Status assumed when a record carries no marker.
pub const DEFAULT_STATUS: &str = "Done";

static RE_RECORD_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-.+\.md$").unwrap());

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# Record \d+:\s*(.+)").unwrap());

// Newer layout: "## Status" heading, blank line(s), then the status word
static RE_STATUS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## Status\s*\n+\s*(\S+)").unwrap());

// Older layout: "**Status:** Accepted"
static RE_STATUS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Status:\*\*\s*(\S+)").unwrap());

static RE_NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-").unwrap());

/// Whether a file name follows the `NNN-name.md` record convention.
pub fn is_record_file(file_name: &str) -> bool {
    RE_RECORD_FILE.is_match(file_name)
}

/// Sequence number of a record file: its first three characters.
pub fn record_number(file_name: &str) -> String {
    file_name.chars().take(3).collect()
}

/// Title from the first `# Record N: ...` heading.
pub fn parse_title(content: &str) -> Option<String> {
    RE_TITLE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Title derived from the file name when the document has no heading.
///
/// `002-bar.md` → `Bar`
pub fn fallback_title(file_name: &str) -> String {
    let stem = RE_NUMERIC_PREFIX.replace(file_name, "");
    let stem = stem.strip_suffix(".md").unwrap_or(&stem);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Raw status token, block marker first, then the inline marker.
pub fn parse_status(content: &str) -> Option<String> {
    RE_STATUS_BLOCK
        .captures(content)
        .or_else(|| RE_STATUS_INLINE.captures(content))
        .map(|caps| caps[1].to_string())
}

/// Map legacy status tokens onto their current name.
pub fn normalize_status(status: String) -> String {
    if status == "Accepted" {
        DEFAULT_STATUS.to_string()
    } else {
        status
    }
}
