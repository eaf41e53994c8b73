//! Resolve-and-redirect page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the transient "Redirecting..." page.
///
/// Carries a 1-second meta refresh to the target URL; the delay only makes
/// the transient state visible before the browser navigates.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub url: String,
}

/// Resolves a shortcode and serves the redirect page.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 when the shortcode is unknown and 410 when the mapping has
/// expired; both render the error page and leave the registry untouched.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<RedirectTemplate, AppError> {
    let mapping = state.shortener.resolve(&code).await?;

    Ok(RedirectTemplate { url: mapping.url })
}
