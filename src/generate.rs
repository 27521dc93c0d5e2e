//! Site generation.
//!
//! Final stage of the pipeline. Takes merged, sorted categories and produces
//! the Markdown site the host generator consumes.
//!
//! ## Output Structure
//!
//! ```text
//! docs/                      # outputDir
//! ├── index.md               # Outline of every category and article
//! └── all/
//!     ├── 1a2b3c4d.md        # One file per article, flat
//!     ├── 5e6f7a8b.md
//!     └── 5e6f7a8b_1.md      # Identifier collision, suffixed
//! ```
//!
//! Category nesting is not reflected in paths: the sidebar grouping comes
//! from the `group` front matter instead.
//!
//! ## Steps
//!
//! 1. [`resolve_page_paths`] makes every article path unique.
//! 2. [`render_site`] renders all pages in memory (pure, no I/O).
//! 3. [`write_site`] writes them, articles first and the index last.

use crate::page_path::PagePaths;
use crate::render::{self, IndexOutline, Page, INDEX_PAGE_PATH};
use crate::types::Category;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Subdirectory of the output directory that holds article pages.
pub const ARTICLES_DIR: &str = "all";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A rendered page and its location relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Output path of an article page, relative to the output directory.
pub fn article_relative_path(page_path: &str) -> PathBuf {
    Path::new(ARTICLES_DIR).join(format!("{}.md", page_path))
}

/// Give every article a unique page path, visiting categories in order and
/// articles in their sorted order.
pub fn resolve_page_paths(categories: &mut [Category], paths: &mut PagePaths) {
    for category in categories.iter_mut() {
        for article in category.articles.iter_mut() {
            article.resolve_page_path(paths);
        }
    }
}

/// Render every article page followed by the index page.
///
/// Expects page paths to be resolved already; index links use them as-is.
pub fn render_site(categories: &[Category], title: &str, author: &str) -> Vec<RenderedPage> {
    let stride = render::order_stride(categories);
    let mut outline = IndexOutline::new();
    let mut pages = Vec::new();

    for category in categories {
        outline.push_category(category);
        for article in &category.articles {
            outline.push_article(article);
            let page = Page::Article {
                article,
                category,
                author,
                stride,
            };
            pages.push(RenderedPage {
                relative_path: article_relative_path(page.page_path()),
                content: page.render(),
            });
        }
    }

    let index = outline.into_page(title);
    pages.push(RenderedPage {
        relative_path: PathBuf::from(format!("{}.md", INDEX_PAGE_PATH)),
        content: index.render(),
    });
    pages
}

/// Write rendered pages under `output_dir`, creating `output_dir/all` first.
pub fn write_site(output_dir: &Path, pages: &[RenderedPage]) -> Result<(), GenerateError> {
    let articles_dir = output_dir.join(ARTICLES_DIR);
    fs::create_dir_all(&articles_dir).map_err(|source| GenerateError::Io {
        path: articles_dir.clone(),
        source,
    })?;

    for page in pages {
        let path = output_dir.join(&page.relative_path);
        fs::write(&path, &page.content).map_err(|source| GenerateError::Io { path, source })?;
    }
    Ok(())
}
