use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use chrono::Datelike;
use serde::Deserialize;
use tracing::debug;

use crate::data::{load_portfolio, CategoryFilter};
use crate::errors::AppError;
use crate::render::{render_page, PageOptions};
use crate::state::AppState;

const SITE_JS: &str = include_str!("../../assets/site.js");
const SITE_CSS: &str = include_str!("../../assets/site.css");

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /
///
/// Reads all four documents fresh and renders the page. A missing or corrupt
/// document fails the whole render.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let portfolio = load_portfolio(state.store.as_ref()).await?;

    let category = CategoryFilter::from(query.category.unwrap_or_default());
    debug!("Rendering page (category: {})", category.label());

    let options = PageOptions {
        category,
        site_url: state.config.site_url.clone(),
        trigger_offset: state.config.trigger_offset,
        year: chrono::Utc::now().year(),
    };

    Ok(Html(render_page(&portfolio, &options)))
}

/// GET /assets/site.js
pub async fn handle_site_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SITE_JS,
    )
}

/// GET /assets/site.css
pub async fn handle_site_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}
