use tokio::sync::Mutex;

pub mod agent;
pub mod ai;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod memory;
pub mod prompts;

use agent::Agent;

/// Shared state for the HTTP server. The memory store is single-writer by
/// design, so the whole agent sits behind one async lock and turns are
/// processed strictly one at a time.
pub struct AppState {
    pub agent: Mutex<Agent>,
}
