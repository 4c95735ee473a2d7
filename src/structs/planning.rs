use crate::structs::absences::AbsenceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// 廚師名單固定五人，輪替順序也固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chef {
    Lionel,
    #[serde(rename = "Eugène")]
    Eugene,
    Stephane,
    Philippe,
    Nassim,
}

impl Chef {
    pub const ALL: [Chef; 5] = [
        Chef::Lionel,
        Chef::Eugene,
        Chef::Stephane,
        Chef::Philippe,
        Chef::Nassim,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Chef::Lionel => "Lionel",
            Chef::Eugene => "Eugène",
            Chef::Stephane => "Stephane",
            Chef::Philippe => "Philippe",
            Chef::Nassim => "Nassim",
        }
    }
}

impl std::fmt::Display for Chef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// 五個崗位：早班兩個、午班兩個、加上一個替補
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Poste {
    #[serde(rename = "MAT1")]
    Mat1,
    #[serde(rename = "MAT2")]
    Mat2,
    #[serde(rename = "AM1")]
    Am1,
    #[serde(rename = "AM2")]
    Am2,
    #[serde(rename = "REMPLACANT")]
    Remplacant,
}

impl Poste {
    // 顯示順序，排程輸出也照這個順序排
    pub const ORDER: [Poste; 5] = [
        Poste::Mat1,
        Poste::Mat2,
        Poste::Am1,
        Poste::Am2,
        Poste::Remplacant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Poste::Mat1 => "MAT1",
            Poste::Mat2 => "MAT2",
            Poste::Am1 => "AM1",
            Poste::Am2 => "AM2",
            Poste::Remplacant => "REMPLACANT",
        }
    }

    pub fn sort_key(&self) -> usize {
        Self::ORDER.iter().position(|p| p == self).unwrap_or(usize::MAX)
    }
}

impl std::fmt::Display for Poste {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 單日排班的一筆輸出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub chef: Chef,
    pub poste: Poste,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_absent: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_recup: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_replacing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_chef: Option<Chef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type: Option<AbsenceType>,
}

impl DaySchedule {
    pub fn working(chef: Chef, poste: Poste) -> Self {
        Self {
            chef,
            poste,
            is_absent: false,
            is_recup: false,
            is_replacing: false,
            replaced_chef: None,
            absence_type: None,
        }
    }

    pub fn absent(chef: Chef, poste: Poste, kind: AbsenceType) -> Self {
        Self {
            absence_type: Some(kind),
            is_absent: true,
            ..Self::working(chef, poste)
        }
    }

    pub fn recup(chef: Chef, poste: Poste) -> Self {
        Self {
            is_recup: true,
            ..Self::working(chef, poste)
        }
    }

    pub fn replacing(chef: Chef, poste: Poste, replaced: Chef) -> Self {
        Self {
            is_replacing: true,
            replaced_chef: Some(replaced),
            ..Self::working(chef, poste)
        }
    }
}

/// 一週排班表，schedule 以日期排序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub start_date: NaiveDate,
    pub cycle_number: i64,
    pub week_in_cycle: u8,
    pub remplacant: Chef,
    pub schedule: BTreeMap<NaiveDate, Vec<DaySchedule>>,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    // 不帶 date 就回當週
    pub date: Option<NaiveDate>,
}
