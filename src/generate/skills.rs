//! Skill catalog and pages: `skills/*/SKILL.md` → `skills.json`, one MDX
//! page per context skill, and the `_meta.js` navigation index.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::generate::{read_text, write_artifact};
use crate::model::{Extra, Skill, SkillKind};
use crate::parser::{deps, frontmatter};
use crate::render;
use crate::scan::{self, ExtrasWalk, SKILL_FILE};
use crate::tables::SiteTables;

/// Catalog file name inside the data directory.
pub const SKILLS_JSON: &str = "skills.json";
/// Navigation index file name inside the pages directory.
pub const NAV_FILE: &str = "_meta.js";
/// Extras are reported one level deep.
pub const EXTRAS_DEPTH: usize = 1;

/// A generated page: file name within the pages directory and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub file_name: String,
    pub content: String,
}

/// Everything the skill pipeline writes, rendered in memory.
#[derive(Debug)]
pub struct SkillsOutput {
    pub skills: Vec<Skill>,
    pub pages: Vec<Page>,
    catalog_json: String,
    nav: String,
}

/// Top-level extras of a skill directory with their descriptions.
pub fn scan_extras(skill_dir: &Path, deps: &[String], tables: &SiteTables) -> Vec<Extra> {
    scan::collapse_top_level(ExtrasWalk::new(skill_dir, EXTRAS_DEPTH))
        .into_iter()
        .map(|entry| Extra {
            description: tables.describe_extra(&entry.path, deps),
            path: entry.path,
            kind: entry.kind,
        })
        .collect()
}

/// Load one skill directory. `Ok(None)` when it has no SKILL.md.
pub fn load_skill(
    skills_dir: &Path,
    dir: &str,
    tables: &SiteTables,
) -> Result<Option<(Skill, Option<Page>)>> {
    let skill_dir = skills_dir.join(dir);
    let skill_file = skill_dir.join(SKILL_FILE);
    if !skill_file.is_file() {
        debug!("skipping {}: no {}", dir, SKILL_FILE);
        return Ok(None);
    }

    let content = read_text(&skill_file)?;
    let parsed = frontmatter::parse(&content);
    let deps = deps::read(&skill_dir);
    let extras = scan_extras(&skill_dir, &deps, tables);
    let meta = parsed.meta;

    let declared_extensions = meta.file_extensions.is_some();
    let skill = Skill {
        name: meta
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| dir.to_string()),
        description: meta.description.unwrap_or_default(),
        kind: meta.kind.unwrap_or_default(),
        applies_to: meta.applies_to.unwrap_or_default(),
        file_extensions: meta.file_extensions.unwrap_or_default(),
        extras,
        directory_name: dir.to_string(),
    };

    let page = match skill.kind {
        SkillKind::Context => Some(Page {
            file_name: format!("{}.mdx", dir),
            content: render::mdx::render_page(&skill, declared_extensions, parsed.body, tables),
        }),
        SkillKind::Command => None,
    };

    debug!(
        kind = skill.kind.as_str(),
        extras = skill.extras.len(),
        deps = deps.len(),
        "skill {}",
        skill.name
    );
    Ok(Some((skill, page)))
}

/// Read every skill directory and render all artifacts.
pub fn build(skills_dir: &Path, tables: &SiteTables) -> Result<SkillsOutput> {
    if !skills_dir.is_dir() {
        bail!("skills directory not found: {}", skills_dir.display());
    }

    let mut skills = Vec::new();
    let mut pages = Vec::new();
    for dir in scan::list_dirs(skills_dir)? {
        if let Some((skill, page)) = load_skill(skills_dir, &dir, tables)? {
            skills.push(skill);
            pages.extend(page);
        }
    }

    let catalog_json = render::json::render(&skills)?;
    let nav = render::nav::render(&skills, tables);
    Ok(SkillsOutput {
        skills,
        pages,
        catalog_json,
        nav,
    })
}

impl SkillsOutput {
    /// Write the pages and `_meta.js` into `pages_dir` and the catalog into
    /// `data_dir`. Existing files are overwritten.
    pub fn write(&self, data_dir: &Path, pages_dir: &Path) -> Result<PathBuf> {
        for page in &self.pages {
            write_artifact(&pages_dir.join(&page.file_name), &page.content)?;
        }

        let catalog = data_dir.join(SKILLS_JSON);
        write_artifact(&catalog, &self.catalog_json)?;
        write_artifact(&pages_dir.join(NAV_FILE), &self.nav)?;

        info!(
            "generated {} skill pages + {} + {} ({} total)",
            self.pages.len(),
            NAV_FILE,
            SKILLS_JSON,
            self.skills.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExtraKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_skill(root: &Path, dir: &str, skill_md: &str) -> PathBuf {
        let skill_dir = root.join(dir);
        fs::create_dir_all(&skill_dir).unwrap();
        fs::write(skill_dir.join(SKILL_FILE), skill_md).unwrap();
        skill_dir
    }

    #[test]
    fn directory_without_skill_file_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("empty")).unwrap();
        write_skill(root.path(), "real", "---\nname: Real\n---\nBody\n");

        let out = build(root.path(), &SiteTables::default()).unwrap();
        assert_eq!(out.skills.len(), 1);
        assert_eq!(out.skills[0].directory_name, "real");
        assert_eq!(out.pages.len(), 1);
        assert_eq!(out.pages[0].file_name, "real.mdx");
    }

    #[test]
    fn command_skill_cataloged_without_page() {
        let root = TempDir::new().unwrap();
        write_skill(root.path(), "tool", "---\nname: Tool\ntype: command\n---\nBody\n");

        let out = build(root.path(), &SiteTables::default()).unwrap();
        assert_eq!(out.skills[0].kind, SkillKind::Command);
        assert!(out.pages.is_empty());
        assert!(out.catalog_json.contains("\"type\": \"command\""));
    }

    #[test]
    fn defaults_without_frontmatter() {
        let root = TempDir::new().unwrap();
        write_skill(root.path(), "plain", "# Plain\n\nNo metadata.\n");

        let out = build(root.path(), &SiteTables::default()).unwrap();
        let skill = &out.skills[0];
        assert_eq!(skill.name, "plain");
        assert_eq!(skill.description, "");
        assert_eq!(skill.kind, SkillKind::Context);
        assert!(skill.applies_to.is_empty());
        assert!(out.pages[0].content.ends_with("# Plain\n\nNo metadata.\n"));
    }

    #[test]
    fn missing_type_defaults_to_context_with_page() {
        let root = TempDir::new().unwrap();
        write_skill(root.path(), "untyped", "---\nname: Untyped\n---\nBody\n");

        let out = build(root.path(), &SiteTables::default()).unwrap();
        assert_eq!(out.skills[0].kind, SkillKind::Context);
        assert_eq!(out.pages.len(), 1);
        assert_eq!(out.pages[0].file_name, "untyped.mdx");
        assert!(out.pages[0].content.contains("| Type | context |"));
    }

    #[test]
    fn invalid_utf8_skill_file_is_read_lossily() {
        let root = TempDir::new().unwrap();
        let skill_dir = root.path().join("cafe");
        fs::create_dir(&skill_dir).unwrap();
        fs::write(
            skill_dir.join(SKILL_FILE),
            b"---\nname: Caf\xe9\n---\nMenu for the caf\xe9.\n",
        )
        .unwrap();

        let out = build(root.path(), &SiteTables::default()).unwrap();
        assert_eq!(out.skills[0].name, "Caf\u{FFFD}");
        assert!(out.pages[0].content.ends_with("Menu for the caf\u{FFFD}.\n"));
    }

    #[test]
    fn references_collapse_to_one_extra() {
        let root = TempDir::new().unwrap();
        let skill_dir = write_skill(root.path(), "py", "---\nname: Py\n---\n");
        fs::create_dir(skill_dir.join("references")).unwrap();
        fs::write(skill_dir.join("references/a.md"), "a").unwrap();
        fs::write(skill_dir.join("references/b.md"), "b").unwrap();

        let extras = scan_extras(&skill_dir, &[], &SiteTables::default());
        assert_eq!(
            extras,
            vec![Extra {
                path: "references/".into(),
                kind: ExtraKind::Dir,
                description: "Reference documentation for Claude".into(),
            }]
        );
    }

    #[test]
    fn deps_description_uses_sidecar() {
        let root = TempDir::new().unwrap();
        let skill_dir = write_skill(root.path(), "yt", "---\nname: yt\ntype: command\n---\n");
        fs::write(
            skill_dir.join("deps.json"),
            r#"{"dependencies": [{"name": "yt-dlp"}, {"name": "ffmpeg"}]}"#,
        )
        .unwrap();

        let out = build(root.path(), &SiteTables::default()).unwrap();
        let extra = &out.skills[0].extras[0];
        assert_eq!(extra.path, "deps.json");
        assert_eq!(extra.kind, ExtraKind::File);
        assert_eq!(extra.description, "System dependencies (yt-dlp, ffmpeg)");
    }

    #[test]
    fn malformed_sidecar_does_not_abort() {
        let root = TempDir::new().unwrap();
        let skill_dir = write_skill(root.path(), "x", "---\nname: x\n---\n");
        fs::write(skill_dir.join("deps.json"), "[oops").unwrap();

        let out = build(root.path(), &SiteTables::default()).unwrap();
        assert_eq!(out.skills[0].extras[0].description, "System dependencies ()");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let root = TempDir::new().unwrap();
        let err = build(&root.path().join("skills"), &SiteTables::default()).unwrap_err();
        assert!(err.to_string().contains("skills directory not found"));
    }

    #[test]
    fn write_emits_all_artifacts() {
        let root = TempDir::new().unwrap();
        let skills_dir = root.path().join("skills");
        write_skill(&skills_dir, "standards-shell", "---\nname: shell\n---\nBody\n");
        write_skill(&skills_dir, "tool", "---\nname: Tool\ntype: command\n---\n");

        let data = root.path().join("data");
        let pages = root.path().join("pages");
        build(&skills_dir, &SiteTables::default())
            .unwrap()
            .write(&data, &pages)
            .unwrap();

        assert!(data.join(SKILLS_JSON).is_file());
        assert!(pages.join("standards-shell.mdx").is_file());
        assert!(!pages.join("tool.mdx").exists());
        let nav = fs::read_to_string(pages.join(NAV_FILE)).unwrap();
        assert!(nav.contains("'standards-shell': 'Shell/Bash'"));
        assert!(nav.contains("'tool': 'Tool'"));
    }
}
