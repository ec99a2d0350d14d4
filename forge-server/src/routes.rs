//! API route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forge_core::{DocumentSnapshot, InboundMessage};
use forge_plugin::PanelConfig;

use crate::AppState;

/// Deliver a UI message to the plugin.
///
/// Responds with the `generation-complete` message, or `204 No Content` for
/// message types the plugin does not handle.
#[tracing::instrument(name = "post_message", skip(state, message), fields(kind = %message.kind))]
pub async fn post_message(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> Response {
    match state.plugin.handle_message(message).await {
        Some(outcome) => Json(outcome).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Get the current document.
pub async fn get_document(State(state): State<AppState>) -> Json<DocumentSnapshot> {
    let host = state.plugin.host();
    let document = host.read().await;
    Json(DocumentSnapshot::from(&*document))
}

/// Discard every shape in the document, keeping its viewport.
#[tracing::instrument(name = "reset_document", skip(state))]
pub async fn reset_document(State(state): State<AppState>) -> StatusCode {
    let host = state.plugin.host();
    let mut document = host.write().await;
    let removed = document.shape_count();
    document.clear();
    tracing::info!(removed, "Document reset");
    StatusCode::NO_CONTENT
}

/// Get the plugin panel configuration.
pub async fn get_panel(State(state): State<AppState>) -> Json<PanelConfig> {
    Json(state.plugin.panel().clone())
}
