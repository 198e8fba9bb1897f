//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{FetchError, UserList, UserRecord, UserSource};
use crate::core::state::App;

/// A source that returns a canned result without touching the network.
pub struct StubSource {
    result: Result<UserList, FetchError>,
}

impl StubSource {
    pub fn ok(users: UserList) -> Self {
        Self { result: Ok(users) }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl UserSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_users(&self) -> Result<UserList, FetchError> {
        self.result.clone()
    }
}

/// Minimal users with the given ids, in the given order.
pub fn sample_users(ids: &[i64]) -> UserList {
    ids.iter()
        .map(|&id| UserRecord {
            id: Some(id),
            name: Some(format!("User {id}")),
            username: Some(format!("user{id}")),
            ..Default::default()
        })
        .collect()
}

/// Creates a test App pointed at an unroutable host.
pub fn test_app() -> App {
    App::new("http://test.invalid".to_string())
}
