//! Nextra `_meta.js` navigation index for the skill pages.

use crate::model::Skill;
use crate::tables::SiteTables;

/// Render `_meta.js`: an `index` entry followed by one entry per skill.
pub fn render(skills: &[Skill], tables: &SiteTables) -> String {
    let mut entries = vec!["  index: 'Overview'".to_string()];
    for skill in skills {
        let label = tables.display_name(&skill.directory_name, &skill.name);
        entries.push(format!(
            "  '{}': '{}'",
            js_escape(&skill.directory_name),
            js_escape(label)
        ));
    }
    format!(
        "// auto-generated — do not edit\nexport default {{\n{}\n}}\n",
        entries.join(",\n")
    )
}

/// Escape text for a single-quoted JS string literal.
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
