use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Eugène 週六有無上班的紀錄，跨週帶著走。
/// 一律由呼叫端傳入再接回更新後的值，核心不留任何全域狀態。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryLedger {
    pub pending_saturday: Option<NaiveDate>,
}

impl RecoveryLedger {
    /// Eugène 在某個週六正常上班時記下來
    pub fn record(&mut self, saturday: NaiveDate) {
        self.pending_saturday = Some(saturday);
    }

    /// 那個週六後來變成缺勤的話，補休就取消
    pub fn cancel(&mut self, saturday: NaiveDate) {
        if self.pending_saturday == Some(saturday) {
            self.pending_saturday = None;
        }
    }

    /// 補休日處理到了就消耗掉紀錄，只會成功一次
    pub fn take_if_matches(&mut self, saturday: NaiveDate) -> bool {
        if self.pending_saturday == Some(saturday) {
            self.pending_saturday = None;
            true
        } else {
            false
        }
    }
}
