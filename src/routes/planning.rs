use crate::errors::AppError;
use crate::repositories::absences;
use crate::services::{planning, recovery::RecoveryLedger};
use crate::state::AppState;
use crate::structs::planning::{WeekQuery, WeekSchedule};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/week", get(get_week_schedule))
        .route("/recovery", get(get_recovery_ledger))
}

/// 取 date 所在那一週的排班表，沒帶 date 就用今天
pub async fn get_week_schedule(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekSchedule>, AppError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let snapshot = absences::snapshot(&state).await;

    // 帳本拿寫鎖算完直接存回去，排班計算本身是純函式
    let mut ledger = state.get_recovery().write().await;
    let (week, updated) = planning::week_schedule(date, &snapshot, ledger.clone())?;
    *ledger = updated;

    tracing::info!(date = %date, week_in_cycle = week.week_in_cycle, "week schedule served");
    Ok(Json(week))
}

/// 看一下目前掛著的補休紀錄
pub async fn get_recovery_ledger(
    State(state): State<AppState>,
) -> Result<Json<RecoveryLedger>, AppError> {
    let ledger = state.get_recovery().read().await.clone();
    Ok(Json(ledger))
}
