//! # Application State
//!
//! Core business state for the user list. Domain data only; rendering
//! lives in the `cli` module.
//!
//! ```text
//! App
//! ├── view: ViewState               // what the view should show right now
//! ├── generation: u64               // id of the latest fetch request
//! ├── exclusion: Option<String>     // exclusion text of the latest request
//! ├── status_message: String        // status line text
//! └── base_url: String              // listing host, for display
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::{FetchError, UserList};
use crate::core::config::ResolvedConfig;

/// The single snapshot the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A fetch is in flight.
    Loading,
    /// Non-empty list in display order.
    Loaded(UserList),
    /// The fetch produced nothing to show.
    Failed(FetchError),
}

impl ViewState {
    /// True once a request has resolved either way.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

pub struct App {
    pub view: ViewState,
    pub generation: u64,
    pub exclusion: Option<String>,
    pub status_message: String,
    pub base_url: String,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            view: ViewState::Loading,
            generation: 0,
            exclusion: None,
            status_message: String::from("Loading users..."),
            base_url,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}
