use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use crate::error::AppResult;
use crate::state::AppState;
use crate::templates::HomeTemplate;

/// GET / -- render the home page from the shared catalog.
///
/// Stateless and idempotent: the catalog never changes after startup, so
/// consecutive responses are byte-identical.
async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = HomeTemplate {
        projects: &state.catalog.projects,
        skills: &state.catalog.skills,
        services: &state.catalog.services,
    };

    Ok(Html(page.render()?))
}

/// Mount the home page route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
