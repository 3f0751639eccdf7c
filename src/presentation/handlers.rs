// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::shell_view::render_document;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page from the current panel state
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    tracing::debug!("Rendering dashboard page: {:?}", state.shell.panel().state());
    Html(render_document(&state.shell))
}
