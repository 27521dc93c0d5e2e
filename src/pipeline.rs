//! End-to-end conversion: config → scan → merge → resolve → render → write.
//!
//! The driver owns the state of one run, most importantly the [`PagePaths`]
//! registry, and reports progress through a callback so the binary decides
//! how to display it.

use crate::config::{self, ConfigError, SiteConfig};
use crate::generate::{self, GenerateError};
use crate::merge::{self, MergeError};
use crate::page_path::PagePaths;
use crate::scan::{self, ScanError};
use crate::types::Category;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Progress notifications, in the order they occur.
#[derive(Debug)]
pub enum Stage<'a> {
    ReadingConfig(&'a Path),
    ReadingArticles(&'a Path),
    WritingPages(&'a Path),
    /// All pages written; categories carry their final page paths.
    Written(&'a [Category]),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub articles: usize,
    pub output_dir: PathBuf,
    pub elapsed: Duration,
}

/// Load the configuration at `config_path` and convert the site it describes.
pub fn run(
    config_path: &Path,
    mut on_stage: impl FnMut(Stage<'_>),
) -> Result<Summary, PipelineError> {
    let started = Instant::now();
    on_stage(Stage::ReadingConfig(config_path));
    let config = config::load_config(config_path)?;
    let summary = convert(&config, on_stage)?;
    Ok(Summary {
        elapsed: started.elapsed(),
        ..summary
    })
}

/// Convert the site described by an already-loaded configuration.
pub fn convert(
    config: &SiteConfig,
    mut on_stage: impl FnMut(Stage<'_>),
) -> Result<Summary, PipelineError> {
    let started = Instant::now();

    on_stage(Stage::ReadingArticles(&config.input_dir));
    let scanned = scan::scan(&config.input_dir)?;

    on_stage(Stage::WritingPages(&config.output_dir));
    let mut categories = merge::merge(scanned, &config.categories)?;

    let mut paths = PagePaths::new();
    generate::resolve_page_paths(&mut categories, &mut paths);
    let pages = generate::render_site(&categories, &config.title, &config.author);
    generate::write_site(&config.output_dir, &pages)?;

    on_stage(Stage::Written(&categories));

    Ok(Summary {
        articles: paths.len(),
        output_dir: config.output_dir.clone(),
        elapsed: started.elapsed(),
    })
}
