use crate::errors::PlanningError;
use crate::services::cycle;
use crate::services::recovery::RecoveryLedger;
use crate::structs::absences::Absence;
use crate::structs::planning::{Chef, DaySchedule, Poste, WeekSchedule};
use crate::utils::calendar;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// 某位廚師當天的缺勤。同一天撈到兩筆就是上游資料壞掉，直接回錯誤。
fn absence_for<'a>(
    chef: Chef,
    date: NaiveDate,
    absences: &'a [Absence],
) -> Result<Option<&'a Absence>, PlanningError> {
    let mut found = None;
    for absence in absences
        .iter()
        .filter(|a| a.chef == chef && a.covers(date))
    {
        if found.is_some() {
            return Err(PlanningError::AbsenceInvariantViolation { chef, date });
        }
        found = Some(absence);
    }
    Ok(found)
}

fn any_absent(date: NaiveDate, absences: &[Absence]) -> bool {
    absences.iter().any(|a| a.covers(date))
}

/// 週六只排 MAT1：本人缺勤就由替補頂上，否則一個人撐全場。
/// Eugène 正常上完週六會記進帳本，之後換他的補休日。
fn resolve_saturday(
    date: NaiveDate,
    week_in_cycle: u8,
    absences: &[Absence],
    ledger: &mut RecoveryLedger,
) -> Result<Vec<DaySchedule>, PlanningError> {
    let mat1 = cycle::mat1(week_in_cycle);

    if let Some(absence) = absence_for(mat1, date, absences)? {
        // 週六缺勤也連帶取消這週六掛著的補休
        ledger.cancel(date);
        let remplacant = cycle::remplacant(week_in_cycle);
        return Ok(vec![
            DaySchedule::absent(mat1, Poste::Mat1, absence.kind),
            DaySchedule::replacing(remplacant, Poste::Mat1, mat1),
        ]);
    }

    if mat1 == Chef::Eugene {
        ledger.record(date);
    }
    Ok(vec![DaySchedule::working(mat1, Poste::Mat1)])
}

/// 平日：五位廚師照崗位順序各出一筆。
/// 優先序是 缺勤 > 補休 > 正常，替補依序頂缺勤者或補休者的崗位。
fn resolve_weekday(
    date: NaiveDate,
    week_in_cycle: u8,
    absences: &[Absence],
    ledger: &mut RecoveryLedger,
) -> Result<Vec<DaySchedule>, PlanningError> {
    let remplacant = cycle::remplacant(week_in_cycle);
    let ordered = cycle::chefs_in_poste_order(week_in_cycle);

    // 替補只頂一個人，取崗位順序裡第一個缺勤的
    let mut absent: Option<Chef> = None;
    for chef in ordered {
        if absence_for(chef, date, absences)?.is_some() {
            absent = Some(chef);
            break;
        }
    }

    let saturday = calendar::preceding_saturday(date);
    // Eugène 的帳本到了週三一定結掉，補休給不給再另外看
    let eugene_pending = date.weekday() == Weekday::Wed && ledger.take_if_matches(saturday);

    let mut recovering: Option<Chef> = None;
    if absent.is_none() {
        if eugene_pending && !any_absent(saturday, absences) && remplacant != Chef::Eugene {
            recovering = Some(Chef::Eugene);
        } else if date.weekday() == Weekday::Mon {
            let mat1 = cycle::mat1(week_in_cycle);
            if mat1 != Chef::Eugene && absence_for(mat1, saturday, absences)?.is_none() {
                recovering = Some(mat1);
            }
        }
    }

    let mut day_schedules = Vec::with_capacity(ordered.len());
    for chef in ordered {
        let entry = if let Some(absence) = absence_for(chef, date, absences)? {
            DaySchedule::absent(chef, cycle::poste_of(week_in_cycle, chef), absence.kind)
        } else if chef == remplacant {
            if let Some(target) = absent.filter(|c| *c != remplacant) {
                DaySchedule::replacing(chef, cycle::poste_of(week_in_cycle, target), target)
            } else if let Some(target) = recovering {
                DaySchedule::replacing(chef, cycle::poste_of(week_in_cycle, target), target)
            } else {
                DaySchedule::working(chef, Poste::Remplacant)
            }
        } else if recovering == Some(chef) {
            DaySchedule::recup(chef, cycle::poste_of(week_in_cycle, chef))
        } else {
            DaySchedule::working(chef, cycle::poste_of(week_in_cycle, chef))
        };
        day_schedules.push(entry);
    }

    Ok(day_schedules)
}

fn resolve_day(
    date: NaiveDate,
    week_in_cycle: u8,
    absences: &[Absence],
    ledger: &mut RecoveryLedger,
) -> Result<Vec<DaySchedule>, PlanningError> {
    match date.weekday() {
        Weekday::Sun => Ok(Vec::new()),
        Weekday::Sat => resolve_saturday(date, week_in_cycle, absences, ledger),
        _ => resolve_weekday(date, week_in_cycle, absences, ledger),
    }
}

/// 算出 date 所在那一週的完整排班。
/// 純函式：同樣的日期、缺勤清單、帳本進來，結果一定一樣。
pub fn week_schedule(
    date: NaiveDate,
    absences: &[Absence],
    ledger: RecoveryLedger,
) -> Result<(WeekSchedule, RecoveryLedger), PlanningError> {
    let start_date = calendar::week_start(date);
    let (cycle_number, week_in_cycle) = calendar::cycle_position(date);
    let remplacant = cycle::remplacant(week_in_cycle);

    tracing::debug!(
        %start_date,
        cycle_number,
        week_in_cycle,
        remplacant = %remplacant,
        "derive week schedule"
    );

    let mut ledger = ledger;
    let mut schedule = BTreeMap::new();
    for offset in 0..7 {
        let day = start_date + Days::new(offset);
        let entries = resolve_day(day, week_in_cycle, absences, &mut ledger)?;
        schedule.insert(day, entries);
    }

    Ok((
        WeekSchedule {
            start_date,
            cycle_number,
            week_in_cycle,
            remplacant,
            schedule,
        },
        ledger,
    ))
}
