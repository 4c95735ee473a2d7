use chrono::{Datelike, Days, NaiveDate, Weekday};

/// 輪替週期的基準日（2024-10-14，星期一）
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 14).expect("valid reference date")
}

pub const CYCLE_WEEKS: i64 = 20;

/// 回傳 d 當週的星期一
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.weekday().num_days_from_monday()))
}

/// 基準日到 d 之間隔了幾週，可以是負數
pub fn weeks_since_reference(d: NaiveDate) -> i64 {
    (week_start(d) - week_start(reference_date())).num_days() / 7
}

/// 算出 d 落在第幾輪的第幾週（week_in_cycle 固定在 1..=20）
pub fn cycle_position(d: NaiveDate) -> (i64, u8) {
    let diff = weeks_since_reference(d);
    let cycle_number = diff.div_euclid(CYCLE_WEEKS) + 1;
    let week_in_cycle = diff.rem_euclid(CYCLE_WEEKS) + 1;
    (cycle_number, week_in_cycle as u8)
}

/// d 之前（不含 d）最近的星期六
pub fn preceding_saturday(d: NaiveDate) -> NaiveDate {
    let back = match d.weekday() {
        Weekday::Sun => 1,
        weekday => u64::from(weekday.num_days_from_monday()) + 2,
    };
    d - Days::new(back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_is_monday_for_every_weekday() {
        let monday = day(2024, 10, 14);
        for offset in 0..7 {
            let d = monday + Days::new(offset);
            assert_eq!(week_start(d), monday, "offset {}", offset);
        }
        assert_eq!(week_start(day(2024, 10, 13)), day(2024, 10, 7));
    }

    #[test]
    fn reference_week_is_cycle_one_week_one() {
        assert_eq!(cycle_position(reference_date()), (1, 1));
        // 週中任何一天都算同一週
        assert_eq!(cycle_position(day(2024, 10, 17)), (1, 1));
        assert_eq!(cycle_position(day(2024, 10, 20)), (1, 1));
    }

    #[test]
    fn twenty_weeks_later_starts_cycle_two() {
        let d = reference_date() + Days::new(20 * 7);
        assert_eq!(cycle_position(d), (2, 1));
        let last_of_first_cycle = reference_date() + Days::new(19 * 7);
        assert_eq!(cycle_position(last_of_first_cycle), (1, 20));
    }

    #[test]
    fn week_in_cycle_is_periodic() {
        let mut d = day(2023, 3, 6);
        for _ in 0..50 {
            let (_, week) = cycle_position(d);
            let (_, week_next_cycle) = cycle_position(d + Days::new(20 * 7));
            assert_eq!(week, week_next_cycle);
            assert!((1..=20).contains(&week));
            d = d + Days::new(7);
        }
    }

    #[test]
    fn dates_before_reference_stay_in_range() {
        // 基準日前一週是上一輪的第 20 週
        assert_eq!(cycle_position(day(2024, 10, 7)), (0, 20));
        assert_eq!(cycle_position(day(2024, 5, 27)), (0, 1));
        assert_eq!(cycle_position(day(2020, 1, 1)), (-12, 11));
    }

    #[test]
    fn preceding_saturday_from_each_weekday() {
        let saturday = day(2024, 10, 12);
        assert_eq!(preceding_saturday(day(2024, 10, 14)), saturday); // 一
        assert_eq!(preceding_saturday(day(2024, 10, 16)), saturday); // 三
        assert_eq!(preceding_saturday(day(2024, 10, 18)), saturday); // 五
        assert_eq!(preceding_saturday(day(2024, 10, 19)), saturday); // 六往前找上一個
        assert_eq!(preceding_saturday(day(2024, 10, 20)), day(2024, 10, 19));
    }
}
