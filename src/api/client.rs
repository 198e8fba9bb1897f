//! reqwest-backed [`UserSource`] for the public `/users` listing.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{FetchError, UserSource};
use super::types::{UserList, decode_user_list};

/// Fetches users with a single GET to `<base_url>/users`.
pub struct HttpUserSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Full URL of the listing endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

/// Maps a reqwest failure onto the fetch taxonomy.
/// Connection-level failures (DNS, refused, unreachable) mean no connectivity.
fn classify(err: reqwest::Error) -> FetchError {
    if err.is_connect() {
        FetchError::NoConnectivity
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_users(&self) -> Result<UserList, FetchError> {
        let url = self.users_url();
        info!("Fetching users from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("User listing request failed: {}", e);
            classify(e)
        })?;

        debug!("User listing response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("User listing error: {} - {}", status, body);
            return Err(FetchError::Transport(format!("HTTP {status}: {body}")));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read user listing body: {}", e);
            classify(e)
        })?;

        let users = decode_user_list(&body).map_err(|e| {
            warn!("Failed to decode user listing: {}", e);
            FetchError::Transport(e.to_string())
        })?;

        info!("Fetched {} users", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_url_trims_trailing_slash() {
        let source = HttpUserSource::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(
            source.users_url(),
            "https://jsonplaceholder.typicode.com/users"
        );
    }

    #[test]
    fn test_users_url_plain_base() {
        let source = HttpUserSource::new("http://localhost:8080");
        assert_eq!(source.users_url(), "http://localhost:8080/users");
    }
}
