pub mod api;
pub mod contact;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything not routed below is looked up in the public directory.
    let public = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::handle_index))
        .route("/health", get(health::health_handler))
        .route("/contact", post(contact::handle_contact))
        .route("/assets/site.js", get(pages::handle_site_js))
        .route("/assets/site.css", get(pages::handle_site_css))
        // Read-only JSON API
        .route("/api/v1/personal", get(api::handle_personal))
        .route("/api/v1/projects", get(api::handle_projects))
        .route(
            "/api/v1/projects/featured",
            get(api::handle_featured_projects),
        )
        .route("/api/v1/projects/:id", get(api::handle_project))
        .route("/api/v1/skills", get(api::handle_skills))
        .route("/api/v1/experience", get(api::handle_experience))
        .route("/api/v1/sections", get(api::handle_sections))
        .route("/api/v1/sections/:id", get(api::handle_section))
        .fallback_service(public)
        .with_state(state)
}
