use crate::errors::AppError;
use crate::repositories::absences;
use crate::state::AppState;
use crate::structs::absences::{
    Absence, AbsenceFilters, AbsenceStats, CreateAbsence, UpdateAbsence,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(list_absences).post(create_absence))
        .route("/stats", get(absence_stats))
        .route(
            "/{id}",
            get(get_absence).put(update_absence).delete(delete_absence),
        )
}

/// 取缺勤清單，可用廚師、類別、日期區間過濾
pub async fn list_absences(
    State(state): State<AppState>,
    Query(filters): Query<AbsenceFilters>,
) -> Result<Json<Vec<Absence>>, AppError> {
    let result = absences::list_absences(&state, &filters).await;
    Ok(Json(result))
}

pub async fn create_absence(
    State(state): State<AppState>,
    Json(payload): Json<CreateAbsence>,
) -> Result<(StatusCode, Json<Absence>), AppError> {
    let created = absences::create_absence(&state, payload).await?;
    tracing::info!(chef = %created.chef, start = %created.start_date, end = %created.end_date, "absence created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn absence_stats(
    State(state): State<AppState>,
    Query(filters): Query<AbsenceFilters>,
) -> Result<Json<AbsenceStats>, AppError> {
    let stats = absences::absence_stats(&state, &filters).await;
    Ok(Json(stats))
}

pub async fn get_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Absence>, AppError> {
    let absence = absences::get_absence(&state, id).await?;
    Ok(Json(absence))
}

pub async fn update_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<UpdateAbsence>,
) -> Result<Json<Absence>, AppError> {
    let updated = absences::update_absence(&state, id, updates).await?;
    Ok(Json(updated))
}

pub async fn delete_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    absences::delete_absence(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
