//! Reconciles scanned categories with the configured category list.
//!
//! The configuration decides which categories are published and in what
//! order; the filesystem decides what they contain. Merging walks the
//! configured list, pulls the matching scanned category, applies its sort
//! direction, numbers it, and sorts its articles:
//!
//! ```text
//! scanned:     Drafts  FAQ  Guides           (directory order)
//! configured:  Guides(asc)  FAQ(desc)
//! merged:      0 Guides  1 FAQ               (Drafts dropped)
//! ```
//!
//! A configured name with no directory is an error. A directory with no
//! configured name is dropped without comment.

use crate::config::CategoryConfig;
use crate::types::Category;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MergeError {
    #[error("Category '{0}' is configured but has no directory")]
    MissingCategory(String),
    #[error("Category name mismatch: configured '{configured}', scanned '{scanned}'")]
    CategoryNameMismatch { configured: String, scanned: String },
}

impl Category {
    /// Apply a configuration entry to this category.
    ///
    /// Only the sort direction is taken from the entry; the name must match.
    pub fn combine_config(&mut self, config: &CategoryConfig) -> Result<(), MergeError> {
        if config.name != self.name {
            return Err(MergeError::CategoryNameMismatch {
                configured: config.name.clone(),
                scanned: self.name.clone(),
            });
        }
        self.article_order = config.article_order();
        Ok(())
    }
}

/// Order `scanned` by `configured`, dropping unconfigured categories.
///
/// Each returned category has `order` equal to its configuration index and
/// its articles sorted and numbered.
pub fn merge(
    scanned: Vec<Category>,
    configured: &[CategoryConfig],
) -> Result<Vec<Category>, MergeError> {
    let mut by_name: HashMap<String, Category> = scanned
        .into_iter()
        .map(|c| (c.name.clone(), c))
        .collect();

    let mut merged = Vec::with_capacity(configured.len());
    for (index, config) in configured.iter().enumerate() {
        let mut category = by_name
            .remove(&config.name)
            .ok_or_else(|| MergeError::MissingCategory(config.name.clone()))?;
        category.combine_config(config)?;
        category.order = index;
        category.sort_articles();
        merged.push(category);
    }
    Ok(merged)
}
