//! Read-only JSON views over the same documents the page is rendered from.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::data::CategoryFilter;
use crate::errors::AppError;
use crate::models::{Experience, PersonalInfo, Project, Skills};
use crate::sections::{describe_sections, Section, SectionDescriptor};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// GET /api/v1/personal
pub async fn handle_personal(State(state): State<AppState>) -> Result<Json<PersonalInfo>, AppError> {
    Ok(Json(state.store.personal_info().await?))
}

/// GET /api/v1/projects?category=&featured=
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.store.projects().await?;
    let filter = CategoryFilter::from(query.category.unwrap_or_default());

    let projects = projects
        .into_iter()
        .filter(|p| filter.matches(p))
        .filter(|p| query.featured.map_or(true, |f| p.featured == f))
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/projects/featured
pub async fn handle_featured_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.store.featured_projects().await?))
}

/// GET /api/v1/projects/:id
pub async fn handle_project(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Project>, AppError> {
    state
        .store
        .projects()
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Result<Json<Skills>, AppError> {
    Ok(Json(state.store.skills().await?))
}

/// GET /api/v1/experience
pub async fn handle_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, AppError> {
    Ok(Json(state.store.experience().await?))
}

/// GET /api/v1/sections
pub async fn handle_sections() -> Json<Vec<SectionDescriptor>> {
    Json(describe_sections())
}

/// GET /api/v1/sections/:id
pub async fn handle_section(Path(id): Path<String>) -> Result<Json<SectionDescriptor>, AppError> {
    Section::from_id(&id)
        .map(|s| Json(SectionDescriptor::from(s)))
        .ok_or_else(|| AppError::NotFound(format!("Section '{id}' not found")))
}
