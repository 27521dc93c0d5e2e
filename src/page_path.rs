//! Stable page identifiers and collision-safe path assignment.
//!
//! Every article is published at `all/<page_path>.md`, where the page path is
//! derived from the article title alone. Identical titles always map to the
//! same identifier, so links survive re-runs, renames of the source file, and
//! moves between categories.
//!
//! # Identifiers
//!
//! [`derive_id`] keeps the first 8 hex characters of the title's MD5 digest.
//! Only 32 bits survive the truncation, so two different titles can and
//! occasionally will produce the same identifier.
//!
//! # Collisions
//!
//! [`PagePaths`] is the registry of paths already handed out during one run.
//! When a base identifier is taken, numeric suffixes are probed in order:
//!
//! ```text
//! 1a2b3c4d       first article with this identifier
//! 1a2b3c4d_1     second
//! 1a2b3c4d_2     third
//! ```
//!
//! Assignment is deterministic as long as articles are resolved in the same
//! order, which the pipeline guarantees (category order, then article order).

use md5::{Digest, Md5};
use std::collections::HashSet;

/// Number of hex characters kept from the digest.
pub const ID_LEN: usize = 8;

/// Derive the 8-character lowercase hex identifier for a title.
pub fn derive_id(title: &str) -> String {
    let digest = Md5::digest(title.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(ID_LEN);
    hex
}

/// Page paths already assigned in the current run.
#[derive(Debug, Default)]
pub struct PagePaths {
    seen: HashSet<String>,
}

impl PagePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base` or, if taken, the first free `base_N` (N = 1, 2, …).
    ///
    /// The returned path is recorded, so the next call with the same base
    /// probes further.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 1u64;
        while self.seen.contains(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.seen.insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
