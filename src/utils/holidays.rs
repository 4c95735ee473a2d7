use crate::structs::holidays::Holiday;
use chrono::NaiveDate;

/// 某年度的法國國定假日清單
pub fn french_holidays(year: i32) -> Vec<Holiday> {
    [
        (1, 1, "Jour de l'an"),
        (4, 1, "Lundi de Pâques"),
        (5, 1, "Fête du Travail"),
        (5, 8, "Victoire 1945"),
        (5, 9, "Jour de l'Ascension"),
        (5, 20, "Lundi de Pentecôte"),
        (7, 14, "Fête Nationale"),
        (8, 15, "Assomption"),
        (11, 1, "Toussaint"),
        (11, 11, "Armistice 1918"),
        (12, 25, "Noël"),
    ]
    .iter()
    .filter_map(|&(month, day, name)| {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Holiday { date, name })
    })
    .collect()
}

pub fn holiday_on(date: NaiveDate, holidays: &[Holiday]) -> Option<&Holiday> {
    holidays.iter().find(|holiday| holiday.date == date)
}
