use chrono::NaiveDate;
use serde::Serialize;

/// 法國國定假日
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}
