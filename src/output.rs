//! CLI output formatting for pipeline progress.
//!
//! # Output Format
//!
//! ```text
//! ==> Reading config site.json
//! ==> Reading articles from content
//! ==> Writing pages to docs
//! 001 Guides
//!     001 Intro → all/1a2b3c4d.md
//!     002 Setup → all/5e6f7a8b.md
//! 002 FAQ
//!     001 Billing → all/9c0d1e2f.md
//! Index → index.md
//! ==> Converted 3 Markdown files in 12ms
//! ```
//!
//! Entities lead with their 1-based position and title; the output path
//! follows the arrow. Each `format_*` function is pure and returns lines;
//! the `print_*` wrappers write them to stdout.

use crate::generate::article_relative_path;
use crate::pipeline::{Stage, Summary};
use crate::types::Category;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn stage_line(text: impl std::fmt::Display) -> String {
    format!("==> {}", text)
}

/// Format one progress notification.
pub fn format_stage(stage: &Stage<'_>) -> Vec<String> {
    match stage {
        Stage::ReadingConfig(path) => vec![stage_line(format!("Reading config {}", path.display()))],
        Stage::ReadingArticles(path) => vec![stage_line(format!(
            "Reading articles from {}",
            path.display()
        ))],
        Stage::WritingPages(path) => {
            vec![stage_line(format!("Writing pages to {}", path.display()))]
        }
        Stage::Written(categories) => format_written_pages(categories),
    }
}

/// List every written page, grouped by category.
pub fn format_written_pages(categories: &[Category]) -> Vec<String> {
    let mut lines = Vec::new();
    for category in categories {
        lines.push(format!(
            "{} {}",
            format_index(category.order + 1),
            category.name
        ));
        for article in &category.articles {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(article.order + 1),
                article.title,
                article_relative_path(&article.page_path).display()
            ));
        }
    }
    lines.push("Index \u{2192} index.md".to_string());
    lines
}

/// Format the closing summary line.
pub fn format_summary(summary: &Summary) -> String {
    let noun = if summary.articles == 1 { "file" } else { "files" };
    stage_line(format!(
        "Converted {} Markdown {} in {}ms",
        summary.articles,
        noun,
        summary.elapsed.as_millis()
    ))
}

/// Print a progress notification to stdout.
pub fn print_stage(stage: &Stage<'_>) {
    for line in format_stage(stage) {
        println!("{}", line);
    }
}

/// Print the closing summary to stdout.
pub fn print_summary(summary: &Summary) {
    println!("{}", format_summary(summary));
}
