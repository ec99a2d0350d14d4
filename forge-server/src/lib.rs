//! # Design Forge Server Library
//!
//! Shared types and functionality for the forge server.
//! This library is used by both the binary and integration tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    routing::{get, post},
    Router,
};
use forge_core::Document;
use forge_plugin::DesignPlugin;

pub mod config;
pub mod health;
pub mod routes;

pub use config::{CliArgs, Command, ServerConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Plugin bound to the in-memory document.
    pub plugin: Arc<DesignPlugin<Document>>,
    /// Outcomes reported by the plugin since startup.
    generations: Arc<AtomicUsize>,
}

impl AppState {
    /// Create state around a loaded plugin.
    ///
    /// Registers an outcome hook that logs every `generation-complete`
    /// message and counts it for the readiness probe.
    #[must_use]
    pub fn new(mut plugin: DesignPlugin<Document>) -> Self {
        let generations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&generations);
        plugin.set_on_outcome(move |outcome| {
            counter.fetch_add(1, Ordering::Relaxed);
            let result = outcome.result();
            if result.success {
                tracing::info!(count = ?result.count, "Generation complete");
            } else {
                tracing::warn!(error = ?result.error, "Generation failed");
            }
        });

        Self {
            plugin: Arc::new(plugin),
            generations,
        }
    }

    /// Number of generation outcomes reported so far.
    #[must_use]
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (Kubernetes probes)
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
        .route("/api/messages", post(routes::post_message))
        .route(
            "/api/document",
            get(routes::get_document).delete(routes::reset_document),
        )
        .route("/api/panel", get(routes::get_panel))
        .with_state(state)
}
