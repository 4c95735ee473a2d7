use crate::structs::planning::Chef;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 缺勤類別，沿用排班表上的標籤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceType {
    #[serde(rename = "Congé")]
    Conge,
    Maladie,
    Formation,
    Autre,
}

/// 一筆缺勤紀錄，起訖日皆含當日
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub id: Uuid,
    pub chef: Chef,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: AbsenceType,
    pub created_at: DateTime<Utc>,
}

impl Absence {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAbsence {
    pub chef: Chef,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: AbsenceType,
}

// 更新時欄位都可省略，沒帶的就維持原值
#[derive(Debug, Deserialize)]
pub struct UpdateAbsence {
    pub chef: Option<Chef>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<AbsenceType>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AbsenceFilters {
    pub chef: Option<Chef>,
    pub kind: Option<AbsenceType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// 缺勤統計，依類別分開計數
#[derive(Debug, Serialize, PartialEq)]
pub struct AbsenceStats {
    pub total: usize,
    pub conges: usize,
    pub maladies: usize,
    pub formations: usize,
    pub autres: usize,
    pub total_days: i64,
}
