//! Shortener page: batch form, validation errors, result cards.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use serde::Deserialize;

use crate::application::services::BatchOutcome;
use crate::domain::validation::{CandidateRow, MAX_ROWS};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::MappingView;

/// Template for the shortener page.
///
/// Renders `templates/shorten.html` with the five-row form, the error list
/// of a rejected submit, and result cards.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenTemplate {
    pub errors: Vec<String>,
    pub rows: Vec<CandidateRow>,
    pub results: Vec<MappingView>,
}

/// Submitted form fields, one triple per row.
///
/// Browsers send every field, but each one defaults independently so a
/// hand-crafted partial submit still deserializes.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url1: String,
    #[serde(default)]
    pub validity1: String,
    #[serde(default)]
    pub shortcode1: String,
    #[serde(default)]
    pub url2: String,
    #[serde(default)]
    pub validity2: String,
    #[serde(default)]
    pub shortcode2: String,
    #[serde(default)]
    pub url3: String,
    #[serde(default)]
    pub validity3: String,
    #[serde(default)]
    pub shortcode3: String,
    #[serde(default)]
    pub url4: String,
    #[serde(default)]
    pub validity4: String,
    #[serde(default)]
    pub shortcode4: String,
    #[serde(default)]
    pub url5: String,
    #[serde(default)]
    pub validity5: String,
    #[serde(default)]
    pub shortcode5: String,
}

impl ShortenForm {
    /// Folds the numbered fields into five candidate rows in form order.
    fn into_rows(self) -> Vec<CandidateRow> {
        let row = |url, validity, shortcode| CandidateRow {
            url,
            validity,
            shortcode,
        };
        vec![
            row(self.url1, self.validity1, self.shortcode1),
            row(self.url2, self.validity2, self.shortcode2),
            row(self.url3, self.validity3, self.shortcode3),
            row(self.url4, self.validity4, self.shortcode4),
            row(self.url5, self.validity5, self.shortcode5),
        ]
    }
}

fn blank_rows() -> Vec<CandidateRow> {
    vec![CandidateRow::default(); MAX_ROWS]
}

/// Renders the shortener page with the current registry as result cards.
///
/// # Endpoint
///
/// `GET /`
pub async fn shorten_page(State(state): State<AppState>) -> Result<ShortenTemplate, AppError> {
    let mappings = state.shortener.list_mappings().await?;

    Ok(ShortenTemplate {
        errors: Vec::new(),
        rows: blank_rows(),
        results: mappings
            .iter()
            .map(|m| MappingView::new(m, &state.base_url))
            .collect(),
    })
}

/// Handles a batch submit.
///
/// # Endpoint
///
/// `POST /`
///
/// On validation failure the page re-renders with the full error list and
/// the submitted values preserved; on success it shows only the newly
/// created mappings as result cards.
pub async fn shorten_submit(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<ShortenTemplate, AppError> {
    let rows = form.into_rows();

    match state.shortener.shorten_batch(&rows).await? {
        BatchOutcome::Created(created) => Ok(ShortenTemplate {
            errors: Vec::new(),
            rows: blank_rows(),
            results: created
                .iter()
                .map(|m| MappingView::new(m, &state.base_url))
                .collect(),
        }),
        BatchOutcome::Rejected(errors) => Ok(ShortenTemplate {
            errors: errors.iter().map(|e| e.to_string()).collect(),
            rows,
            results: Vec::new(),
        }),
    }
}
