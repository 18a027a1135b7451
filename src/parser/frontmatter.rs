//! SKILL.md frontmatter parser.
//!
//! Handles the flat `key: value` subset of YAML that skill files use, with
//! `[a, "b", 'c']` inline lists. Anything else in the block is ignored and a
//! file without a well-formed block is treated as all body.

use crate::model::SkillKind;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---\n([\s\S]*?)\n---\n([\s\S]*)$").unwrap());

static RE_KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.+)$").unwrap());

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// Empty list elements are dropped, so `[]` is an empty list and `[a, , b]` is `[a, b]`.
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            Some(inner) => Value::List(
                inner
                    .split(',')
                    .map(|item| strip_quotes(item.trim()).to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
            ),
            None => Value::Scalar(raw.to_string()),
        }
    }
}

/// Recognized frontmatter fields of a skill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFrontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<SkillKind>,
    pub applies_to: Option<Vec<String>>,
    pub file_extensions: Option<Vec<String>>,
}

impl SkillFrontmatter {
    fn set(&mut self, key: &str, value: Value) {
        match (key, value) {
            ("name", Value::Scalar(v)) => self.name = Some(v),
            ("description", Value::Scalar(v)) => self.description = Some(v),
            ("type", Value::Scalar(v)) => {
                self.kind = SkillKind::parse(&v);
                if self.kind.is_none() {
                    warn!("unknown skill type {:?}, assuming context", v);
                }
            }
            ("applies_to", Value::List(v)) => self.applies_to = Some(v),
            ("file_extensions", Value::List(v)) => self.file_extensions = Some(v),
            (key, value) => trace!("ignoring frontmatter key {}: {:?}", key, value),
        }
    }
}

/// Frontmatter plus the remaining document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a> {
    pub meta: SkillFrontmatter,
    pub body: &'a str,
}

/// Split a SKILL.md into frontmatter and body. Never fails.
pub fn parse(content: &str) -> Parsed<'_> {
    let Some(caps) = RE_BLOCK.captures(content) else {
        return Parsed {
            meta: SkillFrontmatter::default(),
            body: content,
        };
    };

    let mut meta = SkillFrontmatter::default();
    for line in caps.get(1).map_or("", |m| m.as_str()).split('\n') {
        if let Some(kv) = RE_KEY_VALUE.captures(line) {
            meta.set(&kv[1], Value::parse(&kv[2]));
        }
    }

    Parsed {
        meta,
        body: caps.get(2).map_or("", |m| m.as_str()),
    }
}

/// Strip one leading and one trailing quote character.
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frontmatter() {
        let content = "---\nname: Python\ndescription: Coding standards. Use them.\ntype: context\napplies_to: [python, \"django\", 'fastapi']\nfile_extensions: [\".py\"]\n---\n# Body\n\nText\n";
        let parsed = parse(content);
        assert_eq!(parsed.meta.name.as_deref(), Some("Python"));
        assert_eq!(
            parsed.meta.description.as_deref(),
            Some("Coding standards. Use them.")
        );
        assert_eq!(parsed.meta.kind, Some(SkillKind::Context));
        assert_eq!(
            parsed.meta.applies_to,
            Some(vec!["python".into(), "django".into(), "fastapi".into()])
        );
        assert_eq!(parsed.meta.file_extensions, Some(vec![".py".into()]));
        assert_eq!(parsed.body, "# Body\n\nText\n");
    }

    #[test]
    fn no_frontmatter_keeps_whole_content() {
        let content = "# Just a body\n\nname: not meta\n";
        let parsed = parse(content);
        assert_eq!(parsed.meta, SkillFrontmatter::default());
        assert_eq!(parsed.body, content);
    }

    #[test]
    fn unterminated_block_is_body() {
        let content = "---\nname: x\nno closing marker\n";
        let parsed = parse(content);
        assert_eq!(parsed.meta, SkillFrontmatter::default());
        assert_eq!(parsed.body, content);
    }

    #[test]
    fn unknown_keys_and_junk_lines_ignored() {
        let content = "---\nname: x\nauthor: someone\n  indented: nope\njust text\n---\nbody";
        let parsed = parse(content);
        assert_eq!(parsed.meta.name.as_deref(), Some("x"));
        assert_eq!(parsed.meta.description, None);
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn scalar_for_list_field_is_absent() {
        let parsed = parse("---\napplies_to: python\n---\n");
        assert_eq!(parsed.meta.applies_to, None);
    }

    #[test]
    fn empty_list() {
        let parsed = parse("---\nfile_extensions: []\n---\n");
        assert_eq!(parsed.meta.file_extensions, Some(vec![]));
    }

    #[test]
    fn blank_list_elements_dropped() {
        let parsed = parse("---\napplies_to: [a, , b, \"\"]\n---\n");
        assert_eq!(parsed.meta.applies_to, Some(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn unknown_type_is_absent() {
        let parsed = parse("---\ntype: plugin\n---\n");
        assert_eq!(parsed.meta.kind, None);
    }

    #[test]
    fn command_type() {
        let parsed = parse("---\ntype: command\n---\n");
        assert_eq!(parsed.meta.kind, Some(SkillKind::Command));
    }

    #[test]
    fn strip_single_quote_layer() {
        assert_eq!(strip_quotes("\"a\""), "a");
        assert_eq!(strip_quotes("'a'"), "a");
        assert_eq!(strip_quotes("\"\"a\"\""), "\"a\"");
        assert_eq!(strip_quotes("a"), "a");
    }
}
