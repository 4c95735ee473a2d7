use crate::structs::planning::Chef;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;

/// 排班核心的完整性錯誤，屬於資料或程式的問題，不做重試
#[derive(Error, Debug, PartialEq)]
pub enum PlanningError {
    #[error("同一天找到 {chef} 的多筆缺勤（{date}）")]
    AbsenceInvariantViolation { chef: Chef, date: NaiveDate },
    #[error("輪替表第 {week} 週不是五個崗位的一對一配置")]
    CycleTable { week: u8 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("無效的日期")]
    InvalidDate,
    #[error("缺勤起始日晚於結束日")]
    InvalidAbsenceRange,
    #[error("該廚師在這段期間已有缺勤紀錄")]
    AbsenceOverlap,
    #[error("找不到這筆缺勤紀錄")]
    AbsenceNotFound,
    #[error(transparent)]
    Planning(#[from] PlanningError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::InvalidDate => StatusCode::BAD_REQUEST,
            AppError::InvalidAbsenceRange => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AbsenceOverlap => StatusCode::CONFLICT,
            AppError::AbsenceNotFound => StatusCode::NOT_FOUND,
            AppError::Planning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}
