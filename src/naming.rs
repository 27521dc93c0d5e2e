//! Filename parsing for the `YYYY-MM-DD-title.md` article convention.
//!
//! Every article source file carries its publication date and title in its
//! name. This module provides the single parsing function that splits a
//! filename into both parts and rejects names that do not follow the grammar.
//!
//! ## Slicing
//!
//! The title is taken positionally, not by searching for separators:
//!
//! ```text
//! 2023-10-23-Getting-Started.md
//! └────┬───┘│└──────┬──────┘└┬┘
//!    date   sep    title    ext (3 chars)
//! ```
//!
//! Positions are counted in characters, so titles in any script slice
//! correctly. A filename without the separator character still parses, but
//! loses the first character of its title (`2023-10-23Intro.md` → `ntro`).

use chrono::NaiveDate;
use thiserror::Error;

/// Shortest accepted filename: 10-char date, separator, 1-char title, `.md`.
pub const MIN_FILENAME_LEN: usize = 15;

const DATE_LEN: usize = 10;
const TITLE_START: usize = DATE_LEN + 1;
const EXTENSION_LEN: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Invalid filename '{0}': expected the form 2023-10-23-title.md")]
    InvalidFilename(String),
}

/// Result of parsing an article filename like `2023-10-23-Getting-Started.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Calendar date from the first ten characters.
    pub date: NaiveDate,
    /// Everything between the separator and the extension, unmodified.
    pub title: String,
}

/// Parse an article filename following the `YYYY-MM-DD-title.md` convention.
///
/// - `"2023-10-23-Getting-Started.md"` → date=2023-10-23, title="Getting-Started"
/// - `"2023-10-23-x.md"` → date=2023-10-23, title="x"
/// - `"2023-10-23.md"` → error (shorter than 15 characters)
/// - `"2023-02-30-Nope.md"` → error (not a calendar day)
pub fn parse_article_name(file_name: &str) -> Result<ParsedName, NamingError> {
    let chars: Vec<char> = file_name.chars().collect();
    if chars.len() < MIN_FILENAME_LEN {
        return Err(NamingError::InvalidFilename(file_name.to_string()));
    }

    let date_str: String = chars[..DATE_LEN].iter().collect();
    let date = parse_date(&date_str)
        .ok_or_else(|| NamingError::InvalidFilename(file_name.to_string()))?;

    let title = chars[TITLE_START..chars.len() - EXTENSION_LEN].iter().collect();

    Ok(ParsedName { date, title })
}

/// Parse a strict `DDDD-DD-DD` date. chrono alone would accept single-digit
/// months and days, so the shape is checked first.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let well_formed = s.len() == DATE_LEN
        && s.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
