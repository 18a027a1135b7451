//! Record catalog: `docs/records/NNN-*.md` → `records.json`.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::generate::{read_text, write_artifact};
use crate::model::Record;
use crate::parser::record;
use crate::render;
use crate::scan;

/// Catalog file name inside the data directory.
pub const RECORDS_JSON: &str = "records.json";

/// Build a record from its file name and content.
pub fn extract(file_name: &str, content: &str) -> Record {
    let title = record::parse_title(content).unwrap_or_else(|| record::fallback_title(file_name));
    let status = record::parse_status(content)
        .map(record::normalize_status)
        .unwrap_or_else(|| record::DEFAULT_STATUS.to_string());

    Record {
        number: record::record_number(file_name),
        title,
        status,
        source_file: file_name.to_string(),
    }
}

/// Read every record file of `records_dir` in filename order.
pub fn collect(records_dir: &Path) -> Result<Vec<Record>> {
    if !records_dir.is_dir() {
        bail!("records directory not found: {}", records_dir.display());
    }

    let files = scan::list_files(records_dir, record::is_record_file)?;
    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let path = records_dir.join(file);
        let content = read_text(&path)?;
        let rec = extract(file, &content);
        debug!(num = %rec.number, status = %rec.status, "record {}", rec.title);
        records.push(rec);
    }
    Ok(records)
}

/// Rendered record catalog, ready to be written.
#[derive(Debug)]
pub struct RecordsOutput {
    pub records: Vec<Record>,
    json: String,
}

/// Read and render the catalog without writing anything.
pub fn build(records_dir: &Path) -> Result<RecordsOutput> {
    let records = collect(records_dir)?;
    let json = render::json::render(&records)?;
    Ok(RecordsOutput { records, json })
}

impl RecordsOutput {
    /// Write `records.json` into `data_dir`.
    pub fn write(&self, data_dir: &Path) -> Result<PathBuf> {
        let out = data_dir.join(RECORDS_JSON);
        write_artifact(&out, &self.json)?;
        info!(
            "generated {} records -> {}",
            self.records.len(),
            out.display()
        );
        Ok(out)
    }
}
