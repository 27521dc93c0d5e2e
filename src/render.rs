//! Markdown rendering with front matter for the host site generator.
//!
//! ## Article Pages
//!
//! ```text
//! ---
//! title: Setup
//! order: 1
//! toc: content
//! group:
//!   title: Guides
//!   order: 1
//! ---
//!
//! # Setup
//! 2023-02-01     Docs Team
//!
//! <article body>
//! ```
//!
//! ## Index Page
//!
//! ```text
//! ---
//! toc: content
//! ---
//!
//! # Help Center
//!
//! ### 1 Guides
//!
//! * [Intro](/all/1a2b3c4d)
//! * [Setup](/all/5e6f7a8b)
//!
//! ### 2 FAQ
//!
//! * [Billing](/all/9c0d1e2f)
//! ```
//!
//! ## Ordering
//!
//! The host generator sorts pages and sidebar groups by a single integer.
//! Category and article positions share that space as
//! `category.order * stride + article.order`. The stride is 100 unless a
//! category holds more than 100 articles, in which case it grows to the next
//! power of ten so categories never overlap.

use crate::types::{Article, Category};
use std::borrow::Cow;

/// Output stem of the aggregate index page.
pub const INDEX_PAGE_PATH: &str = "index";

/// Category stride used when every category has at most 100 articles.
pub const DEFAULT_ORDER_STRIDE: usize = 100;

/// Smallest power-of-ten stride (at least 100) that fits the largest category.
pub fn order_stride(categories: &[Category]) -> usize {
    let largest = categories
        .iter()
        .map(|c| c.articles.len())
        .max()
        .unwrap_or(0);
    let mut stride = DEFAULT_ORDER_STRIDE;
    while stride < largest {
        stride *= 10;
    }
    stride
}

/// Front-matter `order` of an article within the whole site.
pub fn page_order(category: &Category, article: &Article, stride: usize) -> usize {
    category.order * stride + article.order
}

/// A renderable output page.
#[derive(Debug)]
pub enum Page<'a> {
    Article {
        article: &'a Article,
        category: &'a Category,
        author: &'a str,
        stride: usize,
    },
    Index {
        title: &'a str,
        outline: String,
    },
}

impl Page<'_> {
    /// Output filename stem.
    pub fn page_path(&self) -> &str {
        match self {
            Page::Article { article, .. } => &article.page_path,
            Page::Index { .. } => INDEX_PAGE_PATH,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Page::Article {
                article,
                category,
                author,
                stride,
            } => {
                let order = page_order(category, article, *stride);
                format!(
                    "---\n\
                     title: {front_title}\n\
                     order: {order}\n\
                     toc: content\n\
                     group:\n  \
                     title: {group}\n  \
                     order: {order}\n\
                     ---\n\
                     \n\
                     # {title}\n\
                     {date}     {author}\n\
                     \n\
                     {content}",
                    front_title = yaml_scalar(&article.title),
                    group = yaml_scalar(&category.name),
                    title = article.title,
                    date = article.date.format("%Y-%m-%d"),
                    content = article.content,
                )
            }
            Page::Index { title, outline } => {
                format!("---\ntoc: content\n---\n\n# {title}\n{outline}")
            }
        }
    }
}

/// Accumulates the index outline while categories and articles are visited.
#[derive(Debug, Default)]
pub struct IndexOutline {
    lines: Vec<String>,
}

impl IndexOutline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_category(&mut self, category: &Category) {
        self.lines
            .push(format!("\n### {} {}\n", category.order + 1, category.name));
    }

    /// Record a link to `article`. Call after its page path is final.
    pub fn push_article(&mut self, article: &Article) {
        self.lines.push(format!(
            "* [{}](/all/{})",
            article.title, article.page_path
        ));
    }

    pub fn into_page(self, title: &str) -> Page<'_> {
        Page::Index {
            title,
            outline: self.lines.join("\n"),
        }
    }
}

/// Render a front-matter value, quoting it when YAML would misread it.
fn yaml_scalar(value: &str) -> Cow<'_, str> {
    if is_plain_yaml(value) {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn is_plain_yaml(value: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];
    const RESERVED: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "~"];

    let Some(first) = value.chars().next() else {
        return false;
    };
    !INDICATORS.contains(&first)
        && value.trim() == value
        && !value.contains(": ")
        && !value.contains(" #")
        && !value.ends_with(':')
        && !value.chars().any(char::is_control)
        && !RESERVED.contains(&value.to_ascii_lowercase().as_str())
        && value.parse::<f64>().is_err()
}
