//! Static lookup tables used while generating the skill pages.

use std::collections::HashMap;

use crate::parser::deps::DEPS_FILE;

/// How a conventional extras path is described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraDescription {
    Fixed(String),
    /// "System dependencies (a, b)" built from the skill's `deps.json`
    DependencyList,
}

impl ExtraDescription {
    pub fn render(&self, deps: &[String]) -> String {
        match self {
            ExtraDescription::Fixed(text) => text.clone(),
            ExtraDescription::DependencyList => {
                format!("System dependencies ({})", deps.join(", "))
            }
        }
    }
}

/// Override tables passed into the skill generator.
#[derive(Debug, Clone)]
pub struct SiteTables {
    /// Navigation labels keyed by skill directory name
    pub display_names: HashMap<String, String>,
    /// Descriptions keyed by extras path (`name` or `name/`)
    pub extra_descriptions: HashMap<String, ExtraDescription>,
    /// Import path of the extras table component, relative to a skill page
    pub extras_component: String,
}

impl SiteTables {
    pub fn display_name<'a>(&'a self, dir: &str, fallback: &'a str) -> &'a str {
        self.display_names
            .get(dir)
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    pub fn describe_extra(&self, path: &str, deps: &[String]) -> String {
        self.extra_descriptions
            .get(path)
            .map(|d| d.render(deps))
            .unwrap_or_default()
    }
}

impl Default for SiteTables {
    fn default() -> Self {
        let display_names = [
            ("standards-python", "Python"),
            ("standards-typescript", "TypeScript"),
            ("standards-javascript", "JavaScript"),
            ("standards-shell", "Shell/Bash"),
            ("standards-java", "Java"),
            ("standards-kotlin", "Kotlin"),
            ("standards-gradle", "Gradle"),
            ("youtube-transcript", "YouTube Transcript"),
            ("create-slidev-presentation", "Slidev Presentations"),
            ("skill-creator", "Skill Creator"),
        ]
        .into_iter()
        .map(|(dir, label)| (dir.to_string(), label.to_string()))
        .collect();

        let fixed = |text: &str| ExtraDescription::Fixed(text.to_string());
        let extra_descriptions = HashMap::from([
            (DEPS_FILE.to_string(), ExtraDescription::DependencyList),
            ("assets/".to_string(), fixed("Templates and reusable content")),
            (
                "references/".to_string(),
                fixed("Reference documentation for Claude"),
            ),
            ("test-project/".to_string(), fixed("Example project for testing")),
        ]);

        Self {
            display_names,
            extra_descriptions,
            extras_component: "../../../components/SkillExtras".to_string(),
        }
    }
}
