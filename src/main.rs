//! sitegen — generate the documentation site's data files and skill pages.
//!
//! Two independent batch pipelines:
//!
//! - **records**: `docs/records/NNN-*.md` → `website/data/records.json`
//! - **skills**: `skills/*/SKILL.md` → `website/data/skills.json`, one MDX page
//!   per context skill and `_meta.js` under `website/pages/features/skills`
//!
//! `sitegen` with no subcommand runs both. Inputs are fully read and rendered
//! before any output is written, so a fatal error leaves the outputs as they
//! were.

mod generate;
mod logging;
mod model;
mod parser;
mod render;
mod scan;
mod tables;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::tables::SiteTables;

#[derive(Parser)]
#[command(
    name = "sitegen",
    about = "Generate documentation site data from records and skill definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Repository root that the default paths are resolved against
    #[arg(short = 'r', long, default_value = ".", global = true)]
    root: PathBuf,

    /// Directory of NNN-*.md record documents [default: <root>/docs/records]
    #[arg(long, global = true)]
    records_dir: Option<PathBuf>,

    /// Directory of skill directories [default: <root>/skills]
    #[arg(long, global = true)]
    skills_dir: Option<PathBuf>,

    /// Output directory for JSON data files [default: <root>/website/data]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output directory for skill pages [default: <root>/website/pages/features/skills]
    #[arg(long, global = true)]
    pages_dir: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Generate records.json
    Records,
    /// Generate skills.json, skill pages and _meta.js
    Skills,
    /// Run both pipelines (default)
    All,
}

/// Resolved input and output locations.
struct Paths {
    records_dir: PathBuf,
    skills_dir: PathBuf,
    data_dir: PathBuf,
    pages_dir: PathBuf,
}

impl Paths {
    fn resolve(cli: &Cli) -> Self {
        let under_root = |arg: &Option<PathBuf>, default: &str| -> PathBuf {
            arg.clone().unwrap_or_else(|| cli.root.join(default))
        };
        Self {
            records_dir: under_root(&cli.records_dir, "docs/records"),
            skills_dir: under_root(&cli.skills_dir, "skills"),
            data_dir: under_root(&cli.data_dir, "website/data"),
            pages_dir: under_root(&cli.pages_dir, "website/pages/features/skills"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let paths = Paths::resolve(&cli);
    let command = cli.command.unwrap_or(Command::All);
    run(command, &paths, &SiteTables::default())
}

fn run(command: Command, paths: &Paths, tables: &SiteTables) -> Result<()> {
    let want_records = matches!(command, Command::Records | Command::All);
    let want_skills = matches!(command, Command::Skills | Command::All);

    // Build everything first so a fatal error writes nothing
    let records = if want_records {
        Some(generate::records::build(&paths.records_dir)?)
    } else {
        None
    };
    let skills = if want_skills {
        Some(generate::skills::build(&paths.skills_dir, tables)?)
    } else {
        None
    };

    if let Some(records) = records {
        records.write(&paths.data_dir)?;
    }
    if let Some(skills) = skills {
        skills.write(&paths.data_dir, &paths.pages_dir)?;
    }
    Ok(())
}
