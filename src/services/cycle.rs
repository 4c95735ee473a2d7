use crate::errors::PlanningError;
use crate::structs::planning::Poste::{Am1, Am2, Mat1, Mat2, Remplacant};
use crate::structs::planning::{Chef, Poste};
use crate::utils::calendar::CYCLE_WEEKS;

// 20 週的輪替表，欄位順序照 Chef::ALL（Lionel、Eugène、Stephane、Philippe、Nassim）。
// 每個崗位每週都恰好一人，validate 會在啟動時檢查。
const CYCLE: [[Poste; 5]; CYCLE_WEEKS as usize] = [
    [Mat2, Am2, Am1, Mat1, Remplacant],       // 第 1 週
    [Mat1, Mat2, Am2, Am1, Remplacant],       // 第 2 週
    [Am1, Mat1, Mat2, Am2, Remplacant],       // 第 3 週
    [Am2, Am1, Mat1, Mat2, Remplacant],       // 第 4 週
    [Mat2, Am2, Am1, Remplacant, Mat1],       // 第 5 週
    [Mat1, Mat2, Am2, Remplacant, Am1],       // 第 6 週
    [Am1, Mat1, Mat2, Remplacant, Am2],       // 第 7 週
    [Am2, Am1, Mat1, Remplacant, Mat2],       // 第 8 週
    [Mat2, Am2, Remplacant, Am1, Mat1],       // 第 9 週
    [Mat1, Mat2, Remplacant, Am2, Am1],       // 第 10 週
    [Am1, Mat1, Remplacant, Mat2, Am2],       // 第 11 週
    [Am2, Am1, Remplacant, Mat1, Mat2],       // 第 12 週
    [Mat2, Remplacant, Am2, Am1, Mat1],       // 第 13 週
    [Mat1, Remplacant, Mat2, Am2, Am1],       // 第 14 週
    [Am1, Remplacant, Mat1, Mat2, Am2],       // 第 15 週
    [Am2, Remplacant, Am1, Mat1, Mat2],       // 第 16 週
    [Remplacant, Mat2, Am2, Am1, Mat1],       // 第 17 週
    [Remplacant, Mat1, Mat2, Am2, Am1],       // 第 18 週
    [Remplacant, Am1, Mat1, Mat2, Am2],       // 第 19 週
    [Remplacant, Am2, Am1, Mat1, Mat2],       // 第 20 週
];

fn row(week_in_cycle: u8) -> &'static [Poste; 5] {
    let index = (usize::from(week_in_cycle) + CYCLE.len() - 1) % CYCLE.len();
    &CYCLE[index]
}

/// 指定週裡某位廚師的崗位
pub fn poste_of(week_in_cycle: u8, chef: Chef) -> Poste {
    let index = Chef::ALL
        .iter()
        .position(|c| *c == chef)
        .expect("Chef::ALL covers every chef");
    row(week_in_cycle)[index]
}

/// 指定週裡佔某個崗位的廚師，靠一對一配置保證唯一
pub fn holder_of(week_in_cycle: u8, poste: Poste) -> Chef {
    let assignments = row(week_in_cycle);
    Chef::ALL
        .into_iter()
        .zip(assignments.iter())
        .find(|(_, p)| **p == poste)
        .map(|(chef, _)| chef)
        .expect("validated cycle row holds every poste")
}

pub fn remplacant(week_in_cycle: u8) -> Chef {
    holder_of(week_in_cycle, Poste::Remplacant)
}

pub fn mat1(week_in_cycle: u8) -> Chef {
    holder_of(week_in_cycle, Poste::Mat1)
}

/// 當週所有廚師，照崗位順序（MAT1、MAT2、AM1、AM2、REMPLACANT）排好
pub fn chefs_in_poste_order(week_in_cycle: u8) -> [Chef; 5] {
    let mut chefs = Chef::ALL;
    chefs.sort_by_key(|chef| poste_of(week_in_cycle, *chef).sort_key());
    chefs
}

/// 啟動時跑一次：每一週的配置必須是五個崗位的一對一對應
pub fn validate() -> Result<(), PlanningError> {
    for week in 1..=CYCLE.len() as u8 {
        let assignments = row(week);
        for poste in Poste::ORDER {
            if assignments.iter().filter(|p| **p == poste).count() != 1 {
                return Err(PlanningError::CycleTable { week });
            }
        }
    }
    Ok(())
}
