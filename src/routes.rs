//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Shortener page: batch form plus result cards
//! - `POST /`        - Batch submit (urlencoded form)
//! - `GET  /stats`   - Read-only statistics table
//! - `GET  /{code}`  - Resolve-and-redirect page
//! - anything else   - 307 redirect to `/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web::handlers::{redirect_handler, shorten_page, shorten_submit, stats_handler};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// `/stats` is registered alongside the `/{code}` capture; the static route
/// wins, so `stats` is unreachable as a shortcode even though nothing stops
/// it being registered.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(shorten_page).post(shorten_submit))
        .route("/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Sends every unmatched path back to the shortener page.
pub async fn fallback_handler() -> Redirect {
    Redirect::temporary("/")
}

/// Creates the tracing middleware for HTTP requests.
///
/// Spans are opened at `INFO` level with method, path, and HTTP version;
/// responses log status and latency in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
