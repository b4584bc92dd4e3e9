//! 班次時間彙總

use press_core::Job;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 剩餘時間低於此值即視為將滿（分鐘）
pub const NEAR_FULL_THRESHOLD_MINUTES: i64 = 60;

/// 產能狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityState {
    /// 剩餘時間 ≥ 60
    Available,
    /// 0 ≤ 剩餘時間 < 60
    NearFull,
    /// 剩餘時間 < 0
    Over,
}

impl CapacityState {
    /// 依剩餘時間分類
    pub fn classify(remaining: Decimal) -> Self {
        if remaining < Decimal::ZERO {
            CapacityState::Over
        } else if remaining < Decimal::from(NEAR_FULL_THRESHOLD_MINUTES) {
            CapacityState::NearFull
        } else {
            CapacityState::Available
        }
    }
}

/// 警告等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

/// 班次警告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftWarning {
    pub message: String,
    pub severity: WarningSeverity,
}

impl ShiftWarning {
    pub fn new(message: String, severity: WarningSeverity) -> Self {
        Self { message, severity }
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, WarningSeverity::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, WarningSeverity::Error)
    }
}

/// 班次彙總指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftMetrics {
    /// 每班準備時間
    pub setup_time: Decimal,

    /// 班次長度
    pub shift_duration: Decimal,

    /// 工單時間合計
    pub total_jobs_time: Decimal,

    /// 已用時間 = 準備時間 + 工單時間
    pub used_time: Decimal,

    /// 剩餘時間（可為負）
    pub remaining_shift_time: Decimal,

    /// 使用率（%，可超過 100）
    pub utilization_percentage: Decimal,

    /// 產能狀態
    pub capacity_state: CapacityState,

    /// 工單數
    pub job_count: usize,

    /// 張數合計
    pub total_sheets: u64,
}

impl ShiftMetrics {
    pub fn is_over_capacity(&self) -> bool {
        self.capacity_state == CapacityState::Over
    }

    /// 依產能狀態產生警告
    pub fn warnings(&self) -> Vec<ShiftWarning> {
        match self.capacity_state {
            CapacityState::Over => vec![ShiftWarning::error(format!(
                "班次超出產能 {} 分鐘",
                (-self.remaining_shift_time).round_dp(1)
            ))],
            CapacityState::NearFull => vec![ShiftWarning::warning(format!(
                "班次剩餘 {} 分鐘，即將排滿",
                self.remaining_shift_time.round_dp(1)
            ))],
            CapacityState::Available => Vec::new(),
        }
    }
}

/// 彙總班次時間
///
/// 只讀取各工單已計算的總時間，不重新計算。
pub fn aggregate_shift(jobs: &[Job], setup_time: Decimal, shift_duration: Decimal) -> ShiftMetrics {
    let total_jobs_time: Decimal = jobs.iter().map(|job| job.total_job_time()).sum();
    let total_sheets = jobs
        .iter()
        .fold(0u64, |sum, job| sum.saturating_add(job.sheet_count()));

    let used_time = setup_time + total_jobs_time;
    let remaining_shift_time = shift_duration - used_time;

    let utilization_percentage = if shift_duration > Decimal::ZERO {
        used_time / shift_duration * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    ShiftMetrics {
        setup_time,
        shift_duration,
        total_jobs_time,
        used_time,
        remaining_shift_time,
        utilization_percentage,
        capacity_state: CapacityState::classify(remaining_shift_time),
        job_count: jobs.len(),
        total_sheets,
    }
}
