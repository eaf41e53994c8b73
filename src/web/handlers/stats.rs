//! Statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::MappingView;

/// Template for the statistics page.
///
/// Renders `templates/stats.html`: one table row per mapping in registry
/// order, with an empty-state message when nothing has been shortened.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub mappings: Vec<MappingView>,
}

/// Renders the read-only statistics table.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Result<StatsTemplate, AppError> {
    let mappings = state.shortener.list_mappings().await?;

    Ok(StatsTemplate {
        mappings: mappings
            .iter()
            .map(|m| MappingView::new(m, &state.base_url))
            .collect(),
    })
}
