use std::fmt;

use async_trait::async_trait;
use log::info;

use super::types::UserList;
use crate::core::transform;

/// Why a fetch attempt did not produce a usable list.
/// Every variant is scoped to one request; none is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Host unreachable, DNS failure, or connection refused.
    NoConnectivity,
    /// Any other transport failure, a non-success HTTP status, or a body
    /// that could not be decoded.
    Transport(String),
    /// The request succeeded but left nothing to show.
    NoData,
    /// The exclusion identifier is not an integer.
    InvalidExclusion(String),
}

impl FetchError {
    /// Human-readable detail carried by the variant, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchError::Transport(msg) => Some(msg),
            FetchError::InvalidExclusion(input) => Some(input),
            FetchError::NoConnectivity | FetchError::NoData => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoConnectivity => write!(f, "no internet connection"),
            FetchError::Transport(msg) => write!(f, "request failed: {msg}"),
            FetchError::NoData => write!(f, "no data available"),
            FetchError::InvalidExclusion(input) => {
                write!(f, "invalid user id to exclude: {input:?}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait UserSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Retrieves the full listing in raw retrieval order.
    async fn fetch_users(&self) -> Result<UserList, FetchError>;
}

/// Fetches the listing and applies the display transform: reversed, with
/// every user whose id matches `excluding` removed.
pub async fn fetch_users(
    source: &dyn UserSource,
    excluding: Option<&str>,
) -> Result<UserList, FetchError> {
    let raw = source.fetch_users().await?;
    let users = transform::transform(raw, excluding)?;
    info!(
        "{}: {} users after transform (excluding={:?})",
        source.name(),
        users.len(),
        excluding
    );
    Ok(users)
}
