//! JSON data files read by the site's components.

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("failed to serialize catalog")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn records_array_layout() {
        let records = vec![Record {
            number: "001".into(),
            title: "Foo".into(),
            status: "Done".into(),
            source_file: "001-foo.md".into(),
        }];
        assert_eq!(
            render(&records).unwrap(),
            "[\n  {\n    \"num\": \"001\",\n    \"title\": \"Foo\",\n    \"status\": \"Done\",\n    \"file\": \"001-foo.md\"\n  }\n]\n"
        );
    }

    #[test]
    fn empty_array() {
        assert_eq!(render::<[Record]>(&[]).unwrap(), "[]\n");
    }
}
