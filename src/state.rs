use crate::services::recovery::RecoveryLedger;
use crate::structs::absences::Absence;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 共用狀態：缺勤清單跟 Eugène 的補休帳本，都放記憶體就好
#[derive(Clone, Default)]
pub struct AppState {
    absences: Arc<RwLock<Vec<Absence>>>,
    recovery: Arc<RwLock<RecoveryLedger>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_absences(&self) -> &RwLock<Vec<Absence>> {
        &self.absences
    }

    pub fn get_recovery(&self) -> &RwLock<RecoveryLedger> {
        &self.recovery
    }
}
