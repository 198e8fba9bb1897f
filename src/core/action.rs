//! # Actions
//!
//! Everything that can happen to the user list becomes an `Action`.
//! User asks for the list? That's `Action::Fetch`.
//! The background fetch resolves? That's `Action::FetchCompleted`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` telling the adapter what I/O to start. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Each fetch gets a generation number. A completion carrying an older
//! generation than the app's current one was superseded and is dropped, so
//! the latest request always decides the final state.

use log::{debug, info, warn};

use crate::api::{FetchError, UserList};
use crate::core::state::{App, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start a new fetch, optionally excluding one user id (raw user text).
    Fetch { excluding: Option<String> },
    /// A fetch resolved. `result` is already transformed into display order.
    FetchCompleted {
        generation: u64,
        result: Result<UserList, FetchError>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The adapter must run the fetch in the background and report back
    /// with `Action::FetchCompleted` carrying the same generation.
    SpawnFetch {
        generation: u64,
        excluding: Option<String>,
    },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Fetch { excluding } => {
            app.generation += 1;
            app.view = ViewState::Loading;
            app.exclusion = excluding.clone();
            app.status_message = match excluding.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => format!("Loading users (excluding {id})..."),
                _ => String::from("Loading users..."),
            };
            info!(
                "Fetch requested: generation={}, excluding={:?}",
                app.generation, excluding
            );
            Effect::SpawnFetch {
                generation: app.generation,
                excluding,
            }
        }
        Action::FetchCompleted { generation, result } => {
            if generation != app.generation {
                debug!(
                    "Dropping superseded fetch result: generation={} (current={})",
                    generation, app.generation
                );
                return Effect::None;
            }
            app.view = match result {
                Ok(users) if users.is_empty() => {
                    warn!("Fetch returned no users to show");
                    ViewState::Failed(FetchError::NoData)
                }
                Ok(users) => ViewState::Loaded(users),
                Err(e) => {
                    warn!("Fetch failed: {}", e);
                    ViewState::Failed(e)
                }
            };
            app.status_message = match &app.view {
                ViewState::Loaded(users) => format!("{} users", users.len()),
                ViewState::Failed(e) => format!("Error: {e}"),
                ViewState::Loading => String::new(),
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_users, test_app};

    fn start_fetch(app: &mut App, excluding: Option<&str>) -> u64 {
        let effect = update(
            app,
            Action::Fetch {
                excluding: excluding.map(str::to_string),
            },
        );
        match effect {
            Effect::SpawnFetch { generation, .. } => generation,
            other => panic!("expected SpawnFetch, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_enters_loading_and_spawns() {
        let mut app = test_app();
        app.view = ViewState::Loaded(sample_users(&[1]));

        let effect = update(
            &mut app,
            Action::Fetch {
                excluding: Some("2".to_string()),
            },
        );

        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(app.exclusion.as_deref(), Some("2"));
        assert_eq!(app.status_message, "Loading users (excluding 2)...");
        assert_eq!(
            effect,
            Effect::SpawnFetch {
                generation: 1,
                excluding: Some("2".to_string()),
            }
        );
    }

    #[test]
    fn test_non_empty_result_is_loaded() {
        let mut app = test_app();
        let generation = start_fetch(&mut app, None);
        let users = sample_users(&[3, 2, 1]);

        let effect = update(
            &mut app,
            Action::FetchCompleted {
                generation,
                result: Ok(users.clone()),
            },
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, ViewState::Loaded(users));
        assert_eq!(app.status_message, "3 users");
    }

    #[test]
    fn test_empty_result_is_no_data_failure() {
        let mut app = test_app();
        let generation = start_fetch(&mut app, Some("1"));

        update(
            &mut app,
            Action::FetchCompleted {
                generation,
                result: Ok(Vec::new()),
            },
        );

        assert_eq!(app.view, ViewState::Failed(FetchError::NoData));
        assert_eq!(app.status_message, "Error: no data available");
    }

    #[test]
    fn test_no_connectivity_is_failure() {
        let mut app = test_app();
        let generation = start_fetch(&mut app, None);

        update(
            &mut app,
            Action::FetchCompleted {
                generation,
                result: Err(FetchError::NoConnectivity),
            },
        );

        assert_eq!(app.view, ViewState::Failed(FetchError::NoConnectivity));
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let mut app = test_app();
        let first = start_fetch(&mut app, None);
        let second = start_fetch(&mut app, Some("1"));
        assert!(second > first);

        // Stale completion arrives while the second request is in flight.
        update(
            &mut app,
            Action::FetchCompleted {
                generation: first,
                result: Ok(sample_users(&[1, 2])),
            },
        );
        assert_eq!(app.view, ViewState::Loading);

        update(
            &mut app,
            Action::FetchCompleted {
                generation: second,
                result: Ok(sample_users(&[2])),
            },
        );
        assert_eq!(app.view, ViewState::Loaded(sample_users(&[2])));

        // Late completion of the first request must not overwrite it.
        update(
            &mut app,
            Action::FetchCompleted {
                generation: first,
                result: Err(FetchError::NoConnectivity),
            },
        );
        assert_eq!(app.view, ViewState::Loaded(sample_users(&[2])));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
