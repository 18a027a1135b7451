//! Data model for generated catalogs.
//!
//! Serialized field names are the keys the site's display components read,
//! so renaming a field here is a breaking change for the website.

use serde::Serialize;

/// One numbered decision record, as listed in `records.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Three-digit sequence prefix of the file name
    #[serde(rename = "num")]
    pub number: String,
    pub title: String,
    pub status: String,
    /// File name the record was read from
    #[serde(rename = "file")]
    pub source_file: String,
}

/// How a skill is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    /// Auto-loaded based on the project
    #[default]
    Context,
    /// Invoked manually
    Command,
}

impl SkillKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "context" => Some(SkillKind::Context),
            "command" => Some(SkillKind::Command),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillKind::Context => "context",
            SkillKind::Command => "command",
        }
    }
}

/// Whether an extras entry is a plain file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraKind {
    File,
    Dir,
}

/// Auxiliary entry shipped alongside a skill's SKILL.md.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extra {
    /// File name, or directory name with a trailing `/`
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ExtraKind,
    pub description: String,
}

/// One skill, as listed in `skills.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    pub applies_to: Vec<String>,
    pub file_extensions: Vec<String>,
    pub extras: Vec<Extra>,
    /// Directory the skill was discovered in
    #[serde(rename = "dir")]
    pub directory_name: String,
}
