//! # Core Application Logic
//!
//! The user list's business logic. It knows nothing about the terminal or
//! the HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (ViewState)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • transform()          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    CLI     │            │    API     │
//!            │  Adapter   │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `ViewState`
//! - [`action`]: the `Action` enum and `update()`
//! - [`transform`]: reverse + exclude-by-id
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod state;
pub mod transform;

pub use action::{Action, Effect, update};
pub use state::{App, ViewState};
