//! Article and category models shared by every pipeline stage.
//!
//! Articles are created once by the scanner and then passed by value: the
//! merge stage sorts them inside their [`Category`] and hands each one its
//! final position through [`Article::with_order`]; the generate stage assigns
//! the collision-free page path. Rendering only reads them.

use crate::naming::{self, NamingError};
use crate::page_path::{self, PagePaths};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Image references under `/public/img` are served from `/img` by the host site.
const PUBLIC_IMAGE_PREFIX: &str = "![](/public/img";
const SITE_IMAGE_PREFIX: &str = "![](/img";

/// Rewrite every `![](/public/img…` image reference to `![](/img…`.
pub fn rewrite_image_paths(content: &str) -> String {
    content.replace(PUBLIC_IMAGE_PREFIX, SITE_IMAGE_PREFIX)
}

/// One converted source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Title sliced from the filename (date, separator and extension removed)
    pub title: String,
    /// Date from the `YYYY-MM-DD` filename prefix
    pub date: NaiveDate,
    /// Source filename, the sort key within a category
    pub file_name: String,
    /// Markdown body with image paths rewritten
    pub content: String,
    /// Output filename stem. Starts as the derived identifier and becomes
    /// unique once [`Article::resolve_page_path`] has run.
    pub page_path: String,
    /// Zero-based position within the owning category after sorting
    pub order: usize,
}

impl Article {
    /// Build an article from its source filename and raw Markdown.
    pub fn parse(file_name: &str, content: &str) -> Result<Self, NamingError> {
        let parsed = naming::parse_article_name(file_name)?;
        let page_path = page_path::derive_id(&parsed.title);
        Ok(Self {
            title: parsed.title,
            date: parsed.date,
            file_name: file_name.to_string(),
            content: rewrite_image_paths(content),
            page_path,
            order: 0,
        })
    }

    pub fn with_order(self, order: usize) -> Self {
        Self { order, ..self }
    }

    /// Replace the derived identifier with the first free path in `paths`.
    pub fn resolve_page_path(&mut self, paths: &mut PagePaths) {
        self.page_path = paths.claim(&self.page_path);
    }
}

/// Sort direction for the articles of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleOrder {
    #[default]
    Asc,
    Desc,
}

impl ArticleOrder {
    /// Interpret a configured value. Only `desc` (any case, surrounding
    /// whitespace ignored) selects descending; everything else is ascending.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            ArticleOrder::Desc
        } else {
            ArticleOrder::Asc
        }
    }

    fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            ArticleOrder::Asc => a.file_name.cmp(&b.file_name),
            ArticleOrder::Desc => b.file_name.cmp(&a.file_name),
        }
    }
}

/// A named group of articles, one per input subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Directory name; matched against the configured category names
    pub name: String,
    pub articles: Vec<Article>,
    pub article_order: ArticleOrder,
    /// Index in the configured category list, assigned by merge
    pub order: usize,
}

impl Category {
    pub fn new(name: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            name: name.into(),
            articles,
            article_order: ArticleOrder::default(),
            order: 0,
        }
    }

    /// Sort articles by filename in the configured direction and number them.
    ///
    /// The sort is stable: articles with equal filenames keep scan order.
    pub fn sort_articles(&mut self) {
        let order = self.article_order;
        let mut articles = std::mem::take(&mut self.articles);
        articles.sort_by(|a, b| order.compare(a, b));
        self.articles = articles
            .into_iter()
            .enumerate()
            .map(|(i, article)| article.with_order(i))
            .collect();
    }
}
