//! Shared test utilities for the flatdoc test suite.
//!
//! Provides fixture setup, builders for in-memory categories, and extractors
//! that keep assertions on scan and merge results short.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let categories = scan(tmp.path()).unwrap();
//!
//! let guides = find_category(&categories, "Guides");
//! assert_eq!(article_titles(guides), vec!["Intro", "Setup"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{CategoryConfig, SiteConfig};
use crate::types::{Article, Category};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `root/<category>/<file_name>`, creating the directory.
pub fn write_article(root: &Path, category: &str, file_name: &str, content: &str) {
    let dir = root.join(category);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file_name), content).unwrap();
}

/// Site config reading from `input` and writing to `output`.
///
/// `categories` are `(name, articleOrder)` pairs in site order.
pub fn site_config(input: &Path, output: &Path, categories: &[(&str, &str)]) -> SiteConfig {
    SiteConfig {
        title: "Help Center".to_string(),
        author: "Docs Team".to_string(),
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        categories: categories
            .iter()
            .map(|(name, order)| CategoryConfig::new(*name, *order))
            .collect(),
    }
}

// =========================================================================
// In-memory builders
// =========================================================================

/// Parse an article with empty content. Panics on an invalid filename.
pub fn article(file_name: &str) -> Article {
    Article::parse(file_name, "")
        .unwrap_or_else(|e| panic!("bad test filename '{file_name}': {e}"))
}

/// Category holding the given files in the given (unsorted) order.
pub fn category(name: &str, file_names: &[&str]) -> Category {
    Category::new(name, file_names.iter().map(|f| article(f)).collect())
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find a category by name. Panics if not found.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> &'a Category {
    categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            let names = category_names(categories);
            panic!("category '{name}' not found. Available: {names:?}")
        })
}

/// All category names in order.
pub fn category_names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

/// All article titles in category order.
pub fn article_titles(category: &Category) -> Vec<&str> {
    category.articles.iter().map(|a| a.title.as_str()).collect()
}

/// All article filenames in category order.
pub fn article_file_names(category: &Category) -> Vec<&str> {
    category
        .articles
        .iter()
        .map(|a| a.file_name.as_str())
        .collect()
}

/// All article positions in category order.
pub fn article_orders(category: &Category) -> Vec<usize> {
    category.articles.iter().map(|a| a.order).collect()
}
