//! MDX skill pages.

use crate::model::Skill;
use crate::tables::SiteTables;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());

// Generic-looking tags such as <T>, <E> or <Key, Value>
static RE_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z, ]*?)>").unwrap());

const FENCE: &str = "```";
const MASK: char = '\u{0}';

/// Escape generic-looking `<T>` tags so MDX doesn't parse them as JSX.
///
/// Fenced code blocks and inline code spans are left untouched.
pub fn escape_body(md: &str) -> String {
    let mut in_fence = false;
    md.split('\n')
        .map(|line| {
            if line.starts_with(FENCE) {
                in_fence = !in_fence;
            }
            if in_fence {
                return line.to_string();
            }
            let masked = RE_INLINE_CODE.replace_all(line, |caps: &Captures| {
                caps[0].replace('<', &MASK.to_string())
            });
            RE_GENERIC
                .replace_all(&masked, "&lt;$1&gt;")
                .replace(MASK, "<")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the generated page of a context skill.
pub fn render_page(
    skill: &Skill,
    declared_extensions: bool,
    body: &str,
    tables: &SiteTables,
) -> String {
    let dir = &skill.directory_name;
    let has_extras = !skill.extras.is_empty();
    let mut out = String::new();

    out.push_str(&format!(
        "{{/* auto-generated from skills/{}/SKILL.md — do not edit */}}\n",
        dir
    ));
    if has_extras {
        out.push_str(&format!(
            "import {{ SkillExtras }} from '{}'\n",
            tables.extras_component
        ));
    }

    out.push_str("\n## Metadata\n\n");
    out.push_str("| Field | Value |\n");
    out.push_str("|-------|-------|\n");
    out.push_str(&format!("| Type | {} |\n", skill.kind.as_str()));
    out.push_str(&format!("| Applies to | {} |\n", skill.applies_to.join(", ")));
    if declared_extensions {
        out.push_str(&format!(
            "| File extensions | {} |\n",
            skill.file_extensions.join(", ")
        ));
    }

    if has_extras {
        out.push_str(&format!(
            "\n## Included Files\n\n<SkillExtras name=\"{}\" />\n",
            skill.name
        ));
    }

    out.push('\n');
    out.push_str(escape_body(body).trim());
    out.push('\n');
    out
}
