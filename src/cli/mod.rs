//! # CLI Adapter
//!
//! The terminal-facing layer. Owns the `App` on the calling thread, which is
//! the only thread that ever writes state, and prints each state the
//! reducer settles on.
//!
//! ## Threading
//!
//! ```text
//! main loop (owns App) ──Effect::SpawnFetch──► tokio task: GET /users
//!        ▲                                        │
//!        │                                        ▼
//!        └──── Action::FetchCompleted ◄── blocking pool: transform()
//! ```
//!
//! Each fetch hands exactly one `FetchCompleted` back over a
//! `std::sync::mpsc` channel. In interactive mode a stdin thread feeds
//! `Fetch`/`Quit` actions into the same channel.

pub mod input;
pub mod render;

use log::{debug, info, warn};
use std::io::{self, Write};
use std::sync::{Arc, mpsc};

use crate::api::{FetchError, HttpUserSource, UserSource};
use crate::core::config::ResolvedConfig;
use crate::core::transform::transform;
use crate::core::{Action, App, Effect, ViewState, update};

const PROMPT: &str = "Exclude user id (blank for all, q to quit): ";

/// Build the listing source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn UserSource> {
    Arc::new(HttpUserSource::new(config.base_url.clone()))
}

/// Fetches once (or repeatedly, in interactive mode) and prints the result
/// to stdout. Returns whether the final state was a loaded list.
///
/// Must be called from within a tokio runtime.
pub fn run(config: &ResolvedConfig, excluding: Option<String>) -> io::Result<bool> {
    let source = build_source(config);
    let mut app = App::from_config(config);
    let (tx, rx) = mpsc::channel();

    if config.interactive {
        input::spawn_stdin_reader(tx.clone());
    }

    let mut out = io::stdout().lock();
    drive(
        &mut app,
        source,
        Action::Fetch { excluding },
        (tx, rx),
        config.interactive,
        &mut out,
    )
}

/// The main loop: apply actions, start background work, print settled states.
///
/// Without `interactive` the loop ends at the first settled state. A quit
/// that arrives while a fetch is in flight takes effect once that fetch
/// has settled and been printed.
pub fn drive<W: Write>(
    app: &mut App,
    source: Arc<dyn UserSource>,
    first: Action,
    (tx, rx): (mpsc::Sender<Action>, mpsc::Receiver<Action>),
    interactive: bool,
    out: &mut W,
) -> io::Result<bool> {
    let mut next = Some(first);
    let mut rendered_generation = None;
    let mut quitting = false;

    loop {
        let action = match next.take() {
            Some(a) => a,
            None => match rx.recv() {
                Ok(a) => a,
                Err(_) => break,
            },
        };

        if quitting && !matches!(action, Action::FetchCompleted { .. }) {
            debug!("Ignoring {:?} while waiting to quit", action);
            continue;
        }

        match update(app, action) {
            Effect::SpawnFetch {
                generation,
                excluding,
            } => {
                write!(out, "{}", render::render_header(app))?;
                out.flush()?;
                spawn_fetch(source.clone(), generation, excluding, tx.clone());
            }
            Effect::Quit if fetch_in_flight(app) => {
                info!(
                    "Quit requested, waiting for fetch generation={}",
                    app.generation
                );
                quitting = true;
            }
            Effect::Quit => {
                info!("Quit requested");
                break;
            }
            Effect::None => {}
        }

        if app.view.is_terminal() && rendered_generation != Some(app.generation) {
            rendered_generation = Some(app.generation);
            write!(out, "{}", render::render(&app.view))?;
            if !interactive || quitting {
                break;
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }

    Ok(matches!(app.view, ViewState::Loaded(_)))
}

/// A fetch has been started and its generation has not settled yet.
fn fetch_in_flight(app: &App) -> bool {
    app.generation > 0 && !app.view.is_terminal()
}

/// Runs one fetch off the main loop: network I/O on a tokio task, the
/// transform on the blocking pool, then a single handoff back.
fn spawn_fetch(
    source: Arc<dyn UserSource>,
    generation: u64,
    excluding: Option<String>,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning fetch: source={}, generation={}",
        source.name(),
        generation
    );

    tokio::spawn(async move {
        let result = match source.fetch_users().await {
            Ok(raw) => {
                debug!("Transforming {} users (generation={})", raw.len(), generation);
                tokio::task::spawn_blocking(move || transform(raw, excluding.as_deref()))
                    .await
                    .unwrap_or_else(|e| {
                        Err(FetchError::Transport(format!("transform task failed: {e}")))
                    })
            }
            Err(e) => Err(e),
        };

        if tx
            .send(Action::FetchCompleted { generation, result })
            .is_err()
        {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
