use crate::errors::AppError;
use crate::state::AppState;
use crate::structs::holidays::Holiday;
use crate::utils::holidays::{french_holidays, holiday_on};
use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/check", get(check_holiday))
        .route("/{year}", get(get_holidays))
}

/// 取某年度的法國國定假日
pub async fn get_holidays(Path(year): Path<i32>) -> Result<Json<Vec<Holiday>>, AppError> {
    // 排班用不到這個範圍以外的年份
    if !(1970..=2100).contains(&year) {
        return Err(AppError::InvalidDate);
    }
    Ok(Json(french_holidays(year)))
}

#[derive(Deserialize)]
pub struct CheckQuery {
    pub date: NaiveDate,
}

/// 查某一天是不是國定假日
pub async fn check_holiday(
    Query(query): Query<CheckQuery>,
) -> Result<Json<Option<Holiday>>, AppError> {
    let holidays = french_holidays(query.date.year());
    Ok(Json(holiday_on(query.date, &holidays).cloned()))
}
