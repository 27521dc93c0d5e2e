//! Filesystem scanning.
//!
//! First stage of the pipeline. Reads the input directory into [`Category`]
//! values, one per subdirectory, each holding the parsed [`Article`]s found
//! directly inside it.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # inputDir
//! ├── Guides/                      # Category "Guides"
//! │   ├── 2023-01-01-Intro.md      # Article "Intro"
//! │   ├── 2023-02-01-Setup.md      # Article "Setup"
//! │   ├── diagram.png              # Not Markdown: ignored
//! │   └── drafts/                  # Nested directory: ignored
//! ├── FAQ/
//! │   └── 2023-03-01-Billing.md
//! └── README.md                    # Loose file: ignored
//! ```
//!
//! Entries are read in file-name order, so the scan result is identical for
//! identical trees. Every Markdown file inside a category directory must
//! follow the `YYYY-MM-DD-title.md` grammar; the first one that does not
//! aborts the scan.
//!
//! Categories are returned in directory order. Their site order is assigned
//! later by [`merge`](crate::merge).

use crate::naming::NamingError;
use crate::types::{Article, Category};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("In category '{category}': {source}")]
    InvalidFilename {
        category: String,
        source: NamingError,
    },
}

/// Scan `input_dir` into categories, in directory-name order.
pub fn scan(input_dir: &Path) -> Result<Vec<Category>, ScanError> {
    let mut categories = Vec::new();
    for entry in list_entries(input_dir)? {
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            let articles = scan_articles(entry.path(), &name)?;
            categories.push(Category::new(name, articles));
        }
    }
    Ok(categories)
}

/// Parse every Markdown file directly inside a category directory.
fn scan_articles(dir: &Path, category: &str) -> Result<Vec<Article>, ScanError> {
    let mut articles = Vec::new();
    for entry in list_entries(dir)? {
        if !is_markdown(&entry) {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let content = fs::read_to_string(entry.path()).map_err(|source| ScanError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let article =
            Article::parse(&file_name, &content).map_err(|source| ScanError::InvalidFilename {
                category: category.to_string(),
                source,
            })?;
        articles.push(article);
    }
    Ok(articles)
}

/// Immediate children of `dir`, sorted by name.
fn list_entries(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        entries.push(entry?);
    }
    Ok(entries)
}

/// Regular file with a lowercase `.md` extension.
fn is_markdown(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "md")
}
