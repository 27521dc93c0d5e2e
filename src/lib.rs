//! # flatdoc
//!
//! Converts a tree of dated Markdown articles, grouped into category
//! directories, into a flat, ordered documentation site for a front-matter
//! driven site generator.
//!
//! # Pipeline
//!
//! ```text
//! 1. Config    site.json  →  SiteConfig      (title, author, dirs, category order)
//! 2. Scan      content/   →  Vec<Category>   (filesystem → parsed articles)
//! 3. Merge     config     →  Vec<Category>   (configured order, sorted articles)
//! 4. Resolve   articles   →  unique paths    (hash identifiers, collision suffixes)
//! 5. Render    categories →  Markdown pages  (front matter + body, index outline)
//! 6. Write     pages      →  docs/           (index.md + all/<id>.md)
//! ```
//!
//! Data flows one way. Nothing reads back what a later stage wrote, and every
//! run starts from a fresh scan.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Loads and validates the JSON (or TOML) site configuration |
//! | [`naming`] | `YYYY-MM-DD-title.md` filename grammar |
//! | [`page_path`] | Title-hash identifiers and the collision registry |
//! | [`types`] | `Article`, `Category`, and sort direction |
//! | [`scan`] | Reads category directories into articles |
//! | [`merge`] | Applies the configured category order and sort direction |
//! | [`render`] | Front matter and page bodies for articles and the index |
//! | [`generate`] | Resolves paths, renders the site, writes files |
//! | [`pipeline`] | Runs all stages and reports progress |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Stable Links From Titles
//!
//! An article's URL is the first 8 hex characters of its title's MD5 digest.
//! Renaming the date prefix, moving the file to another category, or
//! reordering the site never changes a link. Only retitling does.
//!
//! ## Deterministic Collisions
//!
//! Truncated hashes collide. The registry appends `_1`, `_2`, … to later
//! claimants, and claims are always made in site order (category order, then
//! article order), so a given tree always produces the same paths.
//!
//! ## Filenames Sort, Not Dates
//!
//! Articles sort by filename. The fixed-width date prefix makes that a date
//! sort, and articles from the same day fall back to their titles.
//!
//! ## One Order Space
//!
//! The host generator orders pages and sidebar groups with a single integer,
//! so category and article positions are packed into one number. See
//! [`render::order_stride`].

pub mod config;
pub mod generate;
pub mod merge;
pub mod naming;
pub mod output;
pub mod page_path;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
