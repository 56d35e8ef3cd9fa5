//! Page Routes
//!
//! Server-rendered form and card.
//!
//! - GET / - Empty form
//! - POST / - Submit the form and show the card or the error

use axum::{extract::State, response::Html, Form};
use std::sync::Arc;

use crate::api::dto::ReflectionForm;
use crate::api::state::AppState;
use crate::shell::{render_page, ShellState};

/// GET /
pub async fn index() -> Html<String> {
    Html(render_page(&ShellState::default()))
}

/// POST /
///
/// Always answers with the page; failures land in its error region.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReflectionForm>,
) -> Html<String> {
    let mut shell = ShellState::with_input(form.reflection);
    shell.run(state.analyzer.as_ref(), None).await;
    Html(render_page(&shell))
}
