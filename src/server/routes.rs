use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::server::{page, AppState};
use crate::record::{EntityKind, Record};
use crate::storage::DbStats;
use std::sync::Arc;

#[derive(Deserialize, Default)]
pub struct DashboardParams {
    pub tab: Option<String>,
    pub added: Option<u8>,
}

#[derive(Deserialize)]
pub struct InvestmentForm {
    #[serde(default)]
    pub name: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct IdeaForm {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type PageError = (StatusCode, String);

fn api_error(status: StatusCode, e: impl std::fmt::Display) -> ApiError {
    (status, Json(ErrorResponse { error: e.to_string() }))
}

fn page_error(e: crate::Error) -> PageError {
    tracing::error!("Dashboard request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn back_to(kind: EntityKind) -> Redirect {
    Redirect::to(&format!("/?tab={}&added=1", kind.table_name()))
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> Result<Html<String>, PageError> {
    // Unknown tabs fall back to the first category, like an unset sidebar.
    let kind = params
        .tab
        .as_deref()
        .and_then(|t| t.parse::<EntityKind>().ok())
        .unwrap_or(EntityKind::Investment);

    let records = state.store.fetch_all(kind).map_err(page_error)?;
    let stats = state.store.stats().map_err(page_error)?;

    Ok(Html(page::dashboard(kind, &records, &stats, params.added.is_some())))
}

pub async fn add_investment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<InvestmentForm>,
) -> Result<Redirect, PageError> {
    state.store.add_investment(&form.name, form.amount).map_err(page_error)?;
    Ok(back_to(EntityKind::Investment))
}

pub async fn add_project(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProjectForm>,
) -> Result<Redirect, PageError> {
    state.store.add_project(&form.name, &form.status).map_err(page_error)?;
    Ok(back_to(EntityKind::Project))
}

pub async fn add_idea(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdeaForm>,
) -> Result<Redirect, PageError> {
    state.store.add_idea(&form.content).map_err(page_error)?;
    Ok(back_to(EntityKind::Idea))
}

pub async fn api_list(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let kind: EntityKind = kind
        .parse()
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e))?;

    let records = state
        .store
        .fetch_all(kind)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;
    Ok(Json(records))
}

pub async fn api_stats(State(state): State<Arc<AppState>>) -> Result<Json<DbStats>, ApiError> {
    let stats = state
        .store
        .stats()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;
    Ok(Json(stats))
}
