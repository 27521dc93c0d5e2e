//! Site configuration module.
//!
//! Loads and validates the configuration file passed on the command line.
//! The configuration names the site, its author, where to read and write,
//! and which categories to publish in which order.
//!
//! ## Format
//!
//! JSON is the primary format:
//!
//! ```json
//! {
//!   "title": "Help Center",
//!   "author": "Docs Team",
//!   "inputDir": "content",
//!   "outputDir": "docs",
//!   "category": [
//!     { "name": "Guides", "articleOrder": "asc" },
//!     { "name": "Release Notes", "articleOrder": "desc" }
//!   ]
//! }
//! ```
//!
//! A file ending in `.toml` is read as TOML with the same keys:
//!
//! ```toml
//! title = "Help Center"
//! author = "Docs Team"
//! inputDir = "content"
//! outputDir = "docs"
//!
//! [[category]]
//! name = "Guides"
//!
//! [[category]]
//! name = "Release Notes"
//! articleOrder = "desc"
//! ```
//!
//! ## Categories
//!
//! The `category` list is the complete set of published categories. Its order
//! is the order of the site. Directories under `inputDir` that are not listed
//! are skipped; listed names without a directory are an error at merge time.
//! `articleOrder` is optional and defaults to ascending.
//!
//! Relative `inputDir` and `outputDir` are resolved against the working
//! directory, not the configuration file's location.
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::ArticleOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from the file given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Heading of the generated index page.
    pub title: String,
    /// Shown next to the date on every article page.
    pub author: String,
    /// Directory holding one subdirectory per category.
    pub input_dir: PathBuf,
    /// Directory receiving `index.md` and `all/`.
    pub output_dir: PathBuf,
    /// Published categories, in site order.
    #[serde(rename = "category")]
    pub categories: Vec<CategoryConfig>,
}

/// One entry of the configured category list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryConfig {
    pub name: String,
    /// `asc` or `desc`, case-insensitive. Anything else sorts ascending.
    #[serde(default = "default_article_order")]
    pub article_order: String,
}

fn default_article_order() -> String {
    "asc".to_string()
}

impl CategoryConfig {
    pub fn new(name: impl Into<String>, article_order: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            article_order: article_order.into(),
        }
    }

    pub fn article_order(&self) -> ArticleOrder {
        ArticleOrder::from_config(&self.article_order)
    }
}

impl SiteConfig {
    /// Validate the category list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "category names must not be empty".into(),
                ));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "category '{}' is listed more than once",
                    category.name
                )));
            }
        }
        Ok(())
    }

    /// Directory receiving one file per article.
    pub fn articles_dir(&self) -> PathBuf {
        self.output_dir.join("all")
    }
}

/// Parse configuration text. `toml` selects the TOML parser, JSON otherwise.
pub fn parse_config(content: &str, toml: bool) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = if toml {
        toml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    config.validate()?;
    Ok(config)
}

/// Load and validate the configuration file at `path`.
///
/// Files with a `.toml` extension are parsed as TOML; everything else as JSON.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);
    parse_config(&content, is_toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JSON: &str = r#"{
        "title": "Help Center",
        "author": "Docs Team",
        "inputDir": "content",
        "outputDir": "docs",
        "category": [
            { "name": "Guides", "articleOrder": "asc" },
            { "name": "FAQ", "articleOrder": " DESC " }
        ]
    }"#;

    #[test]
    fn parse_json_config() {
        let config = parse_config(JSON, false).unwrap();
        assert_eq!(config.title, "Help Center");
        assert_eq!(config.author, "Docs Team");
        assert_eq!(config.input_dir, PathBuf::from("content"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(
            config.categories,
            vec![
                CategoryConfig::new("Guides", "asc"),
                CategoryConfig::new("FAQ", " DESC "),
            ]
        );
        assert_eq!(config.categories[1].article_order(), ArticleOrder::Desc);
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
title = "Help Center"
author = "Docs Team"
inputDir = "content"
outputDir = "docs"

[[category]]
name = "Guides"

[[category]]
name = "FAQ"
articleOrder = "desc"
"#;
        let config = parse_config(toml, true).unwrap();
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].article_order, "asc");
        assert_eq!(config.categories[1].article_order(), ArticleOrder::Desc);
    }

    #[test]
    fn article_order_defaults_to_asc() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o",
            "category":[{"name":"Guides"}]}"#;
        let config = parse_config(json, false).unwrap();
        assert_eq!(config.categories[0].article_order(), ArticleOrder::Asc);
    }

    #[test]
    fn articles_dir_is_under_output() {
        let config = parse_config(JSON, false).unwrap();
        assert_eq!(config.articles_dir(), PathBuf::from("docs").join("all"));
    }

    // =========================================================================
    // Rejections
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o",
            "category":[{"name":"Guides"}],"colour":"red"}"#;
        assert!(matches!(
            parse_config(json, false),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn unknown_category_key_rejected() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o",
            "category":[{"name":"Guides","order":"desc"}]}"#;
        assert!(parse_config(json, false).is_err());
    }

    #[test]
    fn missing_field_rejected() {
        let json = r#"{"title":"T","inputDir":"i","outputDir":"o","category":[]}"#;
        assert!(matches!(
            parse_config(json, false),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(matches!(
            parse_config("this is not valid toml [[[", true),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn empty_category_list_accepted() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o","category":[]}"#;
        let config = parse_config(json, false).unwrap();
        assert!(config.categories.is_empty());
    }

    #[test]
    fn blank_category_name_rejected() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o",
            "category":[{"name":"  "}]}"#;
        assert!(matches!(
            parse_config(json, false),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn duplicate_category_rejected() {
        let json = r#"{"title":"T","author":"A","inputDir":"i","outputDir":"o",
            "category":[{"name":"Guides"},{"name":"Guides","articleOrder":"desc"}]}"#;
        let err = parse_config(json, false).unwrap_err();
        assert!(err.to_string().contains("Guides"));
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        fs::write(&path, JSON).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.title, "Help Center");
    }

    #[test]
    fn load_toml_file_by_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.TOML");
        fs::write(
            &path,
            "title = \"T\"\nauthor = \"A\"\ninputDir = \"i\"\noutputDir = \"o\"\n\n[[category]]\nname = \"Guides\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.categories[0].name, "Guides");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
