//! # List Transform
//!
//! Turns the raw listing into display order:
//!
//! ```text
//! raw (retrieval order) ──► reverse ──► drop excluded id ──► UserList
//! ```
//!
//! Reversal is unconditional. The exclusion identifier arrives as
//! user-entered text and is parsed here; text that is not an integer is
//! reported instead of silently disabling the filter.

use crate::api::{FetchError, UserList};

/// Parses a user-entered exclusion identifier.
///
/// Blank input means "exclude nothing".
pub fn parse_exclusion(input: &str) -> Result<Option<i64>, FetchError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FetchError::InvalidExclusion(input.to_string()))
}

/// Reverses `raw` and removes every user whose id equals `excluding`.
///
/// Users without an id are never removed.
pub fn transform(raw: UserList, excluding: Option<&str>) -> Result<UserList, FetchError> {
    let excluded_id = match excluding {
        Some(input) => parse_exclusion(input)?,
        None => None,
    };

    let reversed = raw.into_iter().rev();
    let users = match excluded_id {
        Some(id) => reversed.filter(|user| user.id != Some(id)).collect(),
        None => reversed.collect(),
    };
    Ok(users)
}
