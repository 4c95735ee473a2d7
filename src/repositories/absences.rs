use crate::errors::AppError;
use crate::state::AppState;
use crate::structs::absences::{
    Absence, AbsenceFilters, AbsenceStats, AbsenceType, CreateAbsence, UpdateAbsence,
};
use crate::structs::planning::Chef;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

fn overlaps(existing: &Absence, chef: Chef, start: NaiveDate, end: NaiveDate) -> bool {
    existing.chef == chef && start <= existing.end_date && existing.start_date <= end
}

/// 同一位廚師的缺勤不能重疊，新增和更新前都要先查
pub async fn check_overlap(
    state: &AppState,
    chef: Chef,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<Uuid>,
) -> bool {
    let absences = state.get_absences().read().await;
    absences
        .iter()
        .filter(|a| exclude_id != Some(a.id))
        .any(|a| overlaps(a, chef, start, end))
}

pub async fn create_absence(
    state: &AppState,
    payload: CreateAbsence,
) -> Result<Absence, AppError> {
    if payload.start_date > payload.end_date {
        return Err(AppError::InvalidAbsenceRange);
    }
    if check_overlap(state, payload.chef, payload.start_date, payload.end_date, None).await {
        return Err(AppError::AbsenceOverlap);
    }

    let absence = Absence {
        id: Uuid::new_v4(),
        chef: payload.chef,
        start_date: payload.start_date,
        end_date: payload.end_date,
        kind: payload.kind,
        created_at: Utc::now(),
    };
    state.get_absences().write().await.push(absence.clone());
    Ok(absence)
}

/// 篩選後的清單，新的排前面
pub async fn list_absences(state: &AppState, filters: &AbsenceFilters) -> Vec<Absence> {
    let absences = state.get_absences().read().await;
    let mut result: Vec<Absence> = absences
        .iter()
        .filter(|a| filters.chef.map_or(true, |chef| a.chef == chef))
        .filter(|a| filters.kind.map_or(true, |kind| a.kind == kind))
        .filter(|a| filters.start_date.map_or(true, |d| a.start_date >= d))
        .filter(|a| filters.end_date.map_or(true, |d| a.end_date <= d))
        .cloned()
        .collect();
    result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    result
}

/// 給排班核心用的完整快照
pub async fn snapshot(state: &AppState) -> Vec<Absence> {
    state.get_absences().read().await.clone()
}

pub async fn get_absence(state: &AppState, id: Uuid) -> Result<Absence, AppError> {
    let absences = state.get_absences().read().await;
    absences
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or(AppError::AbsenceNotFound)
}

pub async fn update_absence(
    state: &AppState,
    id: Uuid,
    updates: UpdateAbsence,
) -> Result<Absence, AppError> {
    let current = get_absence(state, id).await?;
    let updated = Absence {
        chef: updates.chef.unwrap_or(current.chef),
        start_date: updates.start_date.unwrap_or(current.start_date),
        end_date: updates.end_date.unwrap_or(current.end_date),
        kind: updates.kind.unwrap_or(current.kind),
        ..current
    };

    if updated.start_date > updated.end_date {
        return Err(AppError::InvalidAbsenceRange);
    }
    if check_overlap(
        state,
        updated.chef,
        updated.start_date,
        updated.end_date,
        Some(id),
    )
    .await
    {
        return Err(AppError::AbsenceOverlap);
    }

    let mut absences = state.get_absences().write().await;
    let slot = absences
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(AppError::AbsenceNotFound)?;
    *slot = updated.clone();
    Ok(updated)
}

pub async fn delete_absence(state: &AppState, id: Uuid) -> Result<(), AppError> {
    let mut absences = state.get_absences().write().await;
    let before = absences.len();
    absences.retain(|a| a.id != id);
    if absences.len() == before {
        return Err(AppError::AbsenceNotFound);
    }
    Ok(())
}

/// 依類別統計筆數與總天數
pub async fn absence_stats(state: &AppState, filters: &AbsenceFilters) -> AbsenceStats {
    let absences = list_absences(state, filters).await;
    let count_kind = |kind: AbsenceType| absences.iter().filter(|a| a.kind == kind).count();
    AbsenceStats {
        total: absences.len(),
        conges: count_kind(AbsenceType::Conge),
        maladies: count_kind(AbsenceType::Maladie),
        formations: count_kind(AbsenceType::Formation),
        autres: count_kind(AbsenceType::Autre),
        total_days: absences
            .iter()
            .map(|a| (a.end_date - a.start_date).num_days() + 1)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payload(chef: Chef, start: NaiveDate, end: NaiveDate, kind: AbsenceType) -> CreateAbsence {
        CreateAbsence {
            chef,
            start_date: start,
            end_date: end,
            kind,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_round_trip() {
        let state = AppState::new();
        let created = create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 4), day(2024, 11, 8), AbsenceType::Conge),
        )
        .await
        .unwrap();
        let fetched = get_absence(&state, created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn rejects_inverted_range() {
        let state = AppState::new();
        let err = create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 8), day(2024, 11, 4), AbsenceType::Conge),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidAbsenceRange));
    }

    #[tokio::test]
    async fn rejects_overlap_for_the_same_chef_only() {
        let state = AppState::new();
        create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 4), day(2024, 11, 8), AbsenceType::Conge),
        )
        .await
        .unwrap();

        let err = create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 8), day(2024, 11, 12), AbsenceType::Maladie),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::AbsenceOverlap));

        // 不同廚師同期間沒問題
        create_absence(
            &state,
            payload(Chef::Nassim, day(2024, 11, 4), day(2024, 11, 8), AbsenceType::Conge),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn list_filters_and_sorts_newest_first() {
        let state = AppState::new();
        create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 4), day(2024, 11, 5), AbsenceType::Conge),
        )
        .await
        .unwrap();
        create_absence(
            &state,
            payload(Chef::Nassim, day(2024, 11, 18), day(2024, 11, 19), AbsenceType::Maladie),
        )
        .await
        .unwrap();
        create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 12, 2), day(2024, 12, 3), AbsenceType::Formation),
        )
        .await
        .unwrap();

        let all = list_absences(&state, &AbsenceFilters::default()).await;
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let lionel_only = list_absences(
            &state,
            &AbsenceFilters {
                chef: Some(Chef::Lionel),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(lionel_only.len(), 2);

        let december = list_absences(
            &state,
            &AbsenceFilters {
                start_date: Some(day(2024, 12, 1)),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(december.len(), 1);
        assert_eq!(december[0].kind, AbsenceType::Formation);
    }

    #[tokio::test]
    async fn update_validates_like_create() {
        let state = AppState::new();
        create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 4), day(2024, 11, 8), AbsenceType::Conge),
        )
        .await
        .unwrap();
        let second = create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 18), day(2024, 11, 20), AbsenceType::Maladie),
        )
        .await
        .unwrap();

        // 更新自己的期間不算跟自己重疊
        let moved = update_absence(
            &state,
            second.id,
            UpdateAbsence {
                chef: None,
                start_date: Some(day(2024, 11, 19)),
                end_date: None,
                kind: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(moved.start_date, day(2024, 11, 19));
        assert_eq!(moved.kind, AbsenceType::Maladie);

        // 改到跟另一筆撞期就擋下來
        let err = update_absence(
            &state,
            second.id,
            UpdateAbsence {
                chef: None,
                start_date: Some(day(2024, 11, 8)),
                end_date: None,
                kind: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::AbsenceOverlap));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let state = AppState::new();
        let created = create_absence(
            &state,
            payload(Chef::Stephane, day(2024, 11, 4), day(2024, 11, 5), AbsenceType::Autre),
        )
        .await
        .unwrap();
        delete_absence(&state, created.id).await.unwrap();
        assert!(matches!(
            delete_absence(&state, created.id).await.unwrap_err(),
            AppError::AbsenceNotFound
        ));
        assert!(snapshot(&state).await.is_empty());
    }

    #[tokio::test]
    async fn stats_count_kinds_and_days() {
        let state = AppState::new();
        create_absence(
            &state,
            payload(Chef::Lionel, day(2024, 11, 4), day(2024, 11, 8), AbsenceType::Conge),
        )
        .await
        .unwrap();
        create_absence(
            &state,
            payload(Chef::Nassim, day(2024, 11, 18), day(2024, 11, 18), AbsenceType::Maladie),
        )
        .await
        .unwrap();

        let stats = absence_stats(&state, &AbsenceFilters::default()).await;
        assert_eq!(
            stats,
            AbsenceStats {
                total: 2,
                conges: 1,
                maladies: 1,
                formations: 0,
                autres: 0,
                total_days: 6,
            }
        );
    }
}
